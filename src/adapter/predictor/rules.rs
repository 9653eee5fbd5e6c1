//! Deterministic rule-based fallback predictor.

use async_trait::async_trait;

use crate::domain::{Assessment, Cluster, RiskScore};
use crate::error::Result;
use crate::port::Predictor;

/// Rule-based fallback predictor requiring no network access.
///
/// Used whenever no model-service address is configured, and as the
/// reference behavior for correctness tests. Evaluation is an ordered rule
/// list where the first matching rule wins; there is no scoring blend and
/// no re-evaluation. Identical input always yields identical output, with
/// no I/O and no randomness.
///
/// The even-patient-id rule is a stable placeholder pending a real model
/// and is preserved verbatim for behavioral compatibility.
#[derive(Debug, Default)]
pub struct RulePredictor;

impl RulePredictor {
    /// Create a new rule-based predictor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the rule list. Pure and synchronous; exposed so tests can
    /// exercise determinism without a runtime.
    #[must_use]
    pub fn classify(assessment: &Assessment) -> (Cluster, RiskScore) {
        let (cluster, risk) = if assessment.bmi > 30.0 && assessment.hba1c > 6.0 {
            (Cluster::Soird, 85)
        } else if assessment.hba1c > 6.5 && assessment.bmi < 27.0 {
            (Cluster::Sidd, 92)
        } else if assessment.patient_id % 2 == 0 {
            (Cluster::Mard, 45)
        } else {
            (Cluster::Midd, 30)
        };
        // Rule scores are all within [0, 100] by construction.
        (cluster, RiskScore::new(risk).unwrap_or(RiskScore::ZERO))
    }
}

#[async_trait]
impl Predictor for RulePredictor {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn predict(&self, assessment: &Assessment) -> Result<(Cluster, RiskScore)> {
        Ok(Self::classify(assessment))
    }
}
