use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

/// Response of `GET /prediction-scatter`: parallel arrays, one entry per
/// held-out sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionScatter {
    #[serde(default)]
    pub actual: Vec<f64>,
    #[serde(default)]
    pub predicted: Vec<f64>,
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub miles: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub actual: f64,
    pub predicted: f64,
    pub year: i32,
    pub miles: f64,
}

impl PredictionScatter {
    /// True when the four arrays disagree in length.
    pub fn is_ragged(&self) -> bool {
        let len = self.actual.len();
        self.predicted.len() != len || self.years.len() != len || self.miles.len() != len
    }

    /// Zip the arrays position-wise. The result is as long as the shortest
    /// array; samples with a non-finite price are skipped.
    pub fn points(&self) -> Vec<ScatterPoint> {
        if self.is_ragged() {
            log::warn!(
                "Scatter arrays disagree in length (actual {}, predicted {}, years {}, miles {}); truncating",
                self.actual.len(),
                self.predicted.len(),
                self.years.len(),
                self.miles.len()
            );
        }

        self.actual
            .iter()
            .zip(&self.predicted)
            .zip(&self.years)
            .zip(&self.miles)
            .filter(|(((actual, predicted), _), _)| actual.is_finite() && predicted.is_finite())
            .map(|(((&actual, &predicted), &year), &miles)| ScatterPoint {
                actual,
                predicted,
                year,
                miles,
            })
            .collect()
    }
}

impl ScatterPoint {
    /// Lowest and highest price over both axes, used to span the `y = x` line.
    pub fn price_bounds(points: &[ScatterPoint]) -> Option<(f64, f64)> {
        match points
            .iter()
            .flat_map(|p| [p.actual, p.predicted])
            .minmax_by(|a, b| a.total_cmp(b))
        {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some((v, v)),
            MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
        }
    }

    pub fn year_bounds(points: &[ScatterPoint]) -> Option<(i32, i32)> {
        match points.iter().map(|p| p.year).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(y) => Some((y, y)),
            MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
        }
    }

    /// Closest point to `(actual, predicted)` in plot space, for hover labels.
    pub fn nearest(points: &[ScatterPoint], actual: f64, predicted: f64) -> Option<&ScatterPoint> {
        points.iter().min_by(|a, b| {
            let da = (a.actual - actual).powi(2) + (a.predicted - predicted).powi(2);
            let db = (b.actual - actual).powi(2) + (b.predicted - predicted).powi(2);
            da.total_cmp(&db)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scatter() -> PredictionScatter {
        serde_json::from_str(
            r#"{
                "actual":    [10000.0, 25000.0, 7000.0],
                "predicted": [11000.0, 23500.0, 7400.0],
                "years":     [2015, 2020, 2011],
                "miles":     [60000.0, 12000.0, 140000.0]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn zips_parallel_arrays() {
        let data = scatter();
        assert!(!data.is_ragged());

        let points = data.points();
        assert_eq!(points.len(), 3);
        assert_eq!(
            points[1],
            ScatterPoint {
                actual: 25000.0,
                predicted: 23500.0,
                year: 2020,
                miles: 12000.0
            }
        );
    }

    #[test]
    fn ragged_arrays_truncate_to_shortest() {
        let mut data = scatter();
        data.miles.pop();

        assert!(data.is_ragged());
        assert_eq!(data.points().len(), 2);
    }

    #[test]
    fn non_finite_prices_are_skipped() {
        let mut data = scatter();
        data.predicted[0] = f64::NAN;

        let points = data.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].year, 2020);
    }

    #[test]
    fn bounds_span_both_axes() {
        let points = scatter().points();

        assert_eq!(ScatterPoint::price_bounds(&points), Some((7000.0, 25000.0)));
        assert_eq!(ScatterPoint::year_bounds(&points), Some((2011, 2020)));
        assert_eq!(ScatterPoint::price_bounds(&[]), None);
    }

    #[test]
    fn nearest_point_for_hover() {
        let points = scatter().points();
        let hit = ScatterPoint::nearest(&points, 24000.0, 24000.0).unwrap();
        assert_eq!(hit.year, 2020);
        assert!(ScatterPoint::nearest(&[], 0.0, 0.0).is_none());
    }
}
