use serde::{Deserialize, Serialize};

/// Regression error metrics, precomputed by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorMetrics {
    #[serde(default)]
    pub mse: f64,
    #[serde(default)]
    pub rmse: f64,
    #[serde(default)]
    pub mae: f64,
    #[serde(default)]
    pub r2: f64,
}

/// One histogram bar: a labelled range and how many samples fall in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub range: String,
    #[serde(default)]
    pub count: u64,
}

/// Model error within one price band.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeAccuracy {
    pub range: String,
    #[serde(default)]
    pub mae: f64,
    /// Mean absolute percentage error, when the backend reports it
    #[serde(default)]
    pub mape: Option<f64>,
    #[serde(default)]
    pub count: u64,
}

/// Response of `GET /model-stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    #[serde(default)]
    pub metrics: ErrorMetrics,
    #[serde(default)]
    pub price_distribution: Vec<DistributionBucket>,
    #[serde(default)]
    pub year_distribution: Vec<DistributionBucket>,
    #[serde(default)]
    pub accuracy_by_range: Vec<RangeAccuracy>,
    #[serde(default)]
    pub sample_count: Option<u64>,
}

impl ModelStats {
    pub fn has_year_distribution(&self) -> bool {
        !self.year_distribution.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "metrics": {"mse": 4000000.0, "rmse": 2000.0, "mae": 1450.25, "r2": 0.912},
        "price_distribution": [
            {"range": "0-5k", "count": 120},
            {"range": "5k-10k", "count": 340}
        ],
        "accuracy_by_range": [
            {"range": "0-5k", "mae": 610.0, "mape": 14.2, "count": 120},
            {"range": "5k-10k", "mae": 980.5, "count": 340}
        ],
        "sample_count": 460
    }"#;

    #[test]
    fn decodes_backend_payload() {
        let stats: ModelStats = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(stats.metrics.rmse, 2000.0);
        assert_eq!(stats.metrics.r2, 0.912);
        assert_eq!(stats.price_distribution.len(), 2);
        assert_eq!(stats.price_distribution[1].count, 340);
        assert_eq!(stats.accuracy_by_range[0].mape, Some(14.2));
        assert_eq!(stats.accuracy_by_range[1].mape, None);
        assert_eq!(stats.sample_count, Some(460));
    }

    #[test]
    fn year_distribution_is_optional() {
        let stats: ModelStats = serde_json::from_str(PAYLOAD).unwrap();
        assert!(!stats.has_year_distribution());

        let with_years: ModelStats = serde_json::from_str(
            r#"{"metrics": {}, "year_distribution": [{"range": "2015", "count": 9}]}"#,
        )
        .unwrap();
        assert!(with_years.has_year_distribution());
        assert_eq!(with_years.metrics, ErrorMetrics::default());
    }
}
