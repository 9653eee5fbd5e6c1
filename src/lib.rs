//! Riskgate - inference orchestration for diabetes-risk assessment.
//!
//! This crate decides whether a risk prediction comes from a remote model
//! service or a local deterministic fallback, bounds the remote call by a
//! configurable time budget, and normalizes every outcome (success, HTTP
//! failure, timeout, absent configuration) into one canonical
//! [`domain::Prediction`] carrying model provenance.
//!
//! # Architecture
//!
//! Hexagonal layout with ports and adapters:
//!
//! - [`domain`] - Canonical types: `Assessment`, `Prediction`, `Cluster`,
//!   `RiskScore`
//! - [`port`] - Capability traits: `Predictor`, `AssessmentStore`
//! - [`adapter`] - Concrete implementations: rule-based fallback, HTTP
//!   model client, in-memory store
//! - [`application`] - `PredictionGateway` (predictor selection and error
//!   normalization) and `AssessmentService` (predict-then-persist)
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use riskgate::application::PredictionGateway;
//! use riskgate::infrastructure::config::Config;
//!
//! # fn main() -> riskgate::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! config.logging.init();
//! let gateway = PredictionGateway::from_config(&config.inference)?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
