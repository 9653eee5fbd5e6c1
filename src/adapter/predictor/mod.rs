//! Predictor adapters: deterministic rule fallback and the HTTP
//! model-service client.

mod http;
mod rules;

pub use http::HttpPredictor;
pub use rules::RulePredictor;
