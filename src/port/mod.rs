//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the extension points of the crate: adapters implement them to
//! integrate with the model service and with whatever persistence backend
//! the surrounding application provides.
//!
//! # Available Ports
//!
//! - [`Predictor`] - Risk classification over an assessment
//! - [`AssessmentStore`] - Atomic persistence of an (assessment,
//!   prediction) pair

mod predictor;
mod store;

pub use predictor::Predictor;
pub use store::AssessmentStore;

#[cfg(test)]
pub use predictor::tests as predictor_tests;
