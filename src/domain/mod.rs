//! Canonical prediction types shared by every predictor implementation.

mod assessment;
mod prediction;

pub use assessment::Assessment;
pub use prediction::{Cluster, Prediction, RiskScore};
