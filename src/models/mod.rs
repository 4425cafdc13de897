// Wire shapes exchanged with the prediction backend, plus view-side records

pub mod cars;
pub mod prediction;
pub mod scatter;
pub mod stats;

pub use cars::CarList;
pub use prediction::{
    PredictionHistory, PredictionOutcome, PredictionRecord, PredictionRequest, PredictionResponse,
};
pub use scatter::{PredictionScatter, ScatterPoint};
pub use stats::{DistributionBucket, ErrorMetrics, ModelStats, RangeAccuracy};
