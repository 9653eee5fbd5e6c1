//! Predictor port: risk classification over one assessment.

use async_trait::async_trait;

use crate::domain::{Assessment, Cluster, RiskScore};
use crate::error::Result;

/// Produces a `(cluster, risk)` classification for an assessment.
///
/// Two interchangeable implementations exist: the deterministic rule-based
/// fallback and the HTTP model-service client. The active one is chosen
/// once at startup by the gateway; call sites never branch on which kind
/// is behind the trait.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`) and hold only
///   read-only configuration, so one instance serves unbounded concurrent
///   requests without locking
/// - `predict` is async to support the remote call; implementations must
///   not suspend beyond their own documented time budget
/// - An `Err` here is a port-level outcome only. The gateway converts it
///   to the canonical error sentinel before anything reaches a caller
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Predictor name for logging.
    fn name(&self) -> &'static str;

    /// Classify one assessment.
    async fn predict(&self, assessment: &Assessment) -> Result<(Cluster, RiskScore)>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::error::Error;

    /// Mock predictor returning a fixed outcome, or a fixed failure.
    pub struct MockPredictor {
        outcome: Option<(Cluster, RiskScore)>,
    }

    impl MockPredictor {
        pub fn returning(cluster: Cluster, risk: u8) -> Self {
            Self {
                outcome: Some((cluster, RiskScore::new(risk).unwrap())),
            }
        }

        pub fn failing() -> Self {
            Self { outcome: None }
        }
    }

    #[async_trait]
    impl Predictor for MockPredictor {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn predict(&self, _assessment: &Assessment) -> Result<(Cluster, RiskScore)> {
            self.outcome
                .ok_or_else(|| Error::ModelService("mock failure".into()))
        }
    }
}
