//! Application services wiring ports to adapters.

mod assessment;
mod gateway;

pub use assessment::AssessmentService;
pub use gateway::PredictionGateway;
