//! Predict-then-persist assessment flow.

use std::sync::Arc;

use tracing::debug;

use crate::application::PredictionGateway;
use crate::domain::{Assessment, Prediction};
use crate::error::Result;
use crate::port::AssessmentStore;

/// Runs one assessment through the gateway and hands the completed
/// (assessment, prediction) pair to the store.
///
/// Prediction failures never surface here; the gateway has already
/// normalized them into the error sentinel. Storage failures are real and
/// propagate, because losing the pair is not acceptable silently.
pub struct AssessmentService<S: AssessmentStore> {
    gateway: PredictionGateway,
    store: Arc<S>,
}

impl<S: AssessmentStore> AssessmentService<S> {
    /// Create a service over a gateway and a store.
    pub fn new(gateway: PredictionGateway, store: Arc<S>) -> Self {
        Self { gateway, store }
    }

    /// Classify and persist one assessment, returning the prediction.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store rejects the pair.
    pub async fn assess(&self, assessment: &Assessment) -> Result<Prediction> {
        let prediction = self.gateway.predict(assessment).await;
        debug!(
            patient_id = assessment.patient_id,
            cluster = %prediction.cluster,
            risk = %prediction.risk,
            "assessment classified"
        );
        self.store.save(assessment, &prediction).await?;
        Ok(prediction)
    }
}
