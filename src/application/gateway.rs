//! Prediction gateway: predictor selection and error normalization.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::predictor::{HttpPredictor, RulePredictor};
use crate::domain::{Assessment, Prediction};
use crate::error::Result;
use crate::infrastructure::config::InferenceConfig;
use crate::port::Predictor;

/// Uniform prediction operation over either predictor implementation.
///
/// Constructed once at process startup: a configured model-service address
/// selects the [`HttpPredictor`], an empty one the [`RulePredictor`].
/// Callers never learn which is active.
///
/// [`PredictionGateway::predict`] never fails. Port-level errors are
/// absorbed into the canonical error sentinel so the assessment is never
/// lost and persistence has exactly one failure shape to handle. Every
/// result, sentinel included, is stamped with the configured model version
/// and dataset hash.
///
/// The gateway holds only read-only state and supports unbounded
/// concurrent invocation.
#[derive(Clone)]
pub struct PredictionGateway {
    predictor: Arc<dyn Predictor>,
    model_version: String,
    dataset_hash: String,
}

impl PredictionGateway {
    /// Select and construct the predictor from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for a configured service
    /// address cannot be built.
    pub fn from_config(config: &InferenceConfig) -> Result<Self> {
        let predictor: Arc<dyn Predictor> = if config.service_url.is_empty() {
            info!("no model service configured, using rule-based fallback predictor");
            Arc::new(RulePredictor::new())
        } else {
            info!(
                url = %config.service_url,
                timeout_ms = config.timeout_ms,
                "using remote model service"
            );
            Arc::new(HttpPredictor::new(
                &config.service_url,
                &config.model_version,
                config.timeout(),
            )?)
        };
        Ok(Self::with_predictor(
            predictor,
            &config.model_version,
            &config.dataset_hash,
        ))
    }

    /// Wrap an explicit predictor. Used by tests to inject mocks.
    #[must_use]
    pub fn with_predictor(
        predictor: Arc<dyn Predictor>,
        model_version: impl Into<String>,
        dataset_hash: impl Into<String>,
    ) -> Self {
        Self {
            predictor,
            model_version: model_version.into(),
            dataset_hash: dataset_hash.into(),
        }
    }

    /// Name of the active predictor, for logging and routing assertions.
    #[must_use]
    pub fn predictor_name(&self) -> &'static str {
        self.predictor.name()
    }

    /// Classify one assessment. Always returns a prediction.
    pub async fn predict(&self, assessment: &Assessment) -> Prediction {
        match self.predictor.predict(assessment).await {
            Ok((cluster, risk)) => Prediction {
                cluster,
                risk,
                model_version: self.model_version.clone(),
                dataset_hash: self.dataset_hash.clone(),
            },
            Err(e) => {
                warn!(
                    predictor = self.predictor.name(),
                    patient_id = assessment.patient_id,
                    error = %e,
                    "prediction failed, recording error sentinel"
                );
                Prediction::error_sentinel(&self.model_version, &self.dataset_hash)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cluster;
    use crate::port::predictor_tests::MockPredictor;

    #[tokio::test]
    async fn stamps_provenance_on_success() {
        let gateway = PredictionGateway::with_predictor(
            Arc::new(MockPredictor::returning(Cluster::Sidd, 92)),
            "v2.0",
            "hash-1",
        );

        let p = gateway.predict(&Assessment::for_patient(1)).await;
        assert_eq!(p.cluster, Cluster::Sidd);
        assert_eq!(p.risk.value(), 92);
        assert_eq!(p.model_version, "v2.0");
        assert_eq!(p.dataset_hash, "hash-1");
    }

    #[tokio::test]
    async fn absorbs_failure_into_sentinel_with_provenance() {
        let gateway =
            PredictionGateway::with_predictor(Arc::new(MockPredictor::failing()), "v2.0", "hash-1");

        let p = gateway.predict(&Assessment::for_patient(1)).await;
        assert!(p.is_error());
        assert_eq!(p.risk.value(), 0);
        assert_eq!(p.model_version, "v2.0");
        assert_eq!(p.dataset_hash, "hash-1");
    }

    #[tokio::test]
    async fn routes_to_fallback_without_service_url() {
        let config = InferenceConfig {
            service_url: String::new(),
            ..InferenceConfig::default()
        };
        let gateway = PredictionGateway::from_config(&config).unwrap();
        assert_eq!(gateway.predictor_name(), "rules");
    }

    #[tokio::test]
    async fn routes_to_http_with_service_url() {
        let config = InferenceConfig {
            service_url: "http://127.0.0.1:9/predict".into(),
            ..InferenceConfig::default()
        };
        let gateway = PredictionGateway::from_config(&config).unwrap();
        assert_eq!(gateway.predictor_name(), "http");
    }
}
