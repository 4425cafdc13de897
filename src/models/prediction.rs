use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::FORM;

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub name: String,
    pub year: i32,
    pub miles: f64,
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub predicted_price: Option<f64>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Price(f64),
    /// The backend answered but declined; carries its message when it sent one.
    Rejected(Option<String>),
}

impl PredictionResponse {
    pub fn outcome(&self) -> PredictionOutcome {
        match self.predicted_price {
            Some(price) if self.success && price.is_finite() => PredictionOutcome::Price(price),
            _ => PredictionOutcome::Rejected(
                self.error
                    .as_deref()
                    .map(str::trim)
                    .filter(|msg| !msg.is_empty())
                    .map(str::to_string),
            ),
        }
    }
}

/// One completed prediction, kept for the history panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub name: String,
    pub year: i32,
    pub miles: f64,
    pub predicted_price: f64,
    /// Local wall-clock label of when the answer arrived
    pub made_at: String,
}

impl PredictionRecord {
    pub fn new(request: &PredictionRequest, predicted_price: f64, made_at: String) -> Self {
        Self {
            name: request.name.clone(),
            year: request.year,
            miles: request.miles,
            predicted_price,
            made_at,
        }
    }
}

/// Rolling, newest-first list of recent predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionHistory {
    records: VecDeque<PredictionRecord>,
    capacity: usize,
}

impl Default for PredictionHistory {
    fn default() -> Self {
        Self::with_capacity(FORM.history_len)
    }
}

impl PredictionHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, record: PredictionRecord) {
        self.records.push_front(record);
        self.records.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64) -> PredictionRecord {
        let request = PredictionRequest {
            name: name.to_string(),
            year: 2018,
            miles: 42_000.0,
        };
        PredictionRecord::new(&request, price, "12:00:00".to_string())
    }

    #[test]
    fn request_serializes_to_backend_field_names() {
        let request = PredictionRequest {
            name: "Honda Civic".to_string(),
            year: 2019,
            miles: 30500.0,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "Honda Civic", "year": 2019, "miles": 30500.0})
        );
    }

    #[test]
    fn successful_response_yields_price() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"predicted_price": 14250.5, "success": true}"#).unwrap();
        assert_eq!(response.outcome(), PredictionOutcome::Price(14250.5));
    }

    #[test]
    fn unsuccessful_response_carries_backend_error() {
        let response: PredictionResponse = serde_json::from_str(
            r#"{"predicted_price": null, "success": false, "error": "Unknown model"}"#,
        )
        .unwrap();
        assert_eq!(
            response.outcome(),
            PredictionOutcome::Rejected(Some("Unknown model".to_string()))
        );
    }

    #[test]
    fn success_without_price_is_rejected() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"success": true, "error": "  "}"#).unwrap();
        assert_eq!(response.outcome(), PredictionOutcome::Rejected(None));
    }

    #[test]
    fn history_is_newest_first_and_capped() {
        let mut history = PredictionHistory::with_capacity(5);
        for i in 0..7 {
            history.push(record(&format!("car {i}"), 1_000.0 * i as f64));
        }

        assert_eq!(history.len(), 5);
        let names: Vec<&str> = history.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["car 6", "car 5", "car 4", "car 3", "car 2"]);
        assert_eq!(history.iter().next().map(|r| r.predicted_price), Some(6_000.0));

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn default_history_uses_form_capacity() {
        let mut history = PredictionHistory::default();
        for i in 0..FORM.history_len + 3 {
            history.push(record("car", i as f64));
        }
        assert_eq!(history.len(), FORM.history_len);
    }
}
