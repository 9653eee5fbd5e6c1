//! Implementations of ports (hexagonal adapters).

pub mod predictor;
pub mod store;
