//! Store port: persistence boundary for completed assessments.

use async_trait::async_trait;

use crate::domain::{Assessment, Prediction};
use crate::error::Result;

/// Persists a completed (assessment, prediction) pair.
///
/// The pair must be stored together or not at all; atomicity at the
/// storage backend is the implementor's responsibility. This crate never
/// defines the storage schema.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Store one assessment together with its prediction.
    async fn save(&self, assessment: &Assessment, prediction: &Prediction) -> Result<()>;
}
