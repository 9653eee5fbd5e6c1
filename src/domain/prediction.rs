//! Prediction outcome types: cluster labels, bounded risk scores, and the
//! provenance-stamped result attached to every assessment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk-subtype classification label.
///
/// A small closed vocabulary of diabetes subtype clusters, plus the
/// reserved [`Cluster::Error`] sentinel that stands in for any unrecovered
/// remote-call failure. Unknown labels from the model service do not
/// deserialize; they are treated as a malformed response upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cluster {
    /// Severe obesity-related insulin-resistant diabetes.
    #[serde(rename = "SOIRD")]
    Soird,
    /// Severe insulin-deficient diabetes.
    #[serde(rename = "SIDD")]
    Sidd,
    /// Mild age-related diabetes.
    #[serde(rename = "MARD")]
    Mard,
    /// Mild diabetes, the residual subtype.
    #[serde(rename = "MIDD")]
    Midd,
    /// Sentinel for a failed remote prediction.
    #[serde(rename = "error")]
    Error,
}

impl Cluster {
    /// Wire representation of the label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Soird => "SOIRD",
            Cluster::Sidd => "SIDD",
            Cluster::Mard => "MARD",
            Cluster::Midd => "MIDD",
            Cluster::Error => "error",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer risk score bounded to [0, 100].
///
/// The inner value is private so every construction path goes through the
/// bounds check. Model-service responses carrying a score outside the
/// range fail to deserialize and collapse to the error sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RiskScore(u8);

impl RiskScore {
    /// Upper bound of the score range.
    pub const MAX: u8 = 100;

    /// Score zero, reserved for the error sentinel and fallback rules.
    pub const ZERO: RiskScore = RiskScore(0);

    /// Create a score, returning `None` when the value exceeds 100.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// The score as a plain integer.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RiskScore {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, String> {
        u8::try_from(value)
            .ok()
            .and_then(RiskScore::new)
            .ok_or_else(|| format!("risk score {value} outside [0, 100]"))
    }
}

impl From<RiskScore> for i64 {
    fn from(score: RiskScore) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The classification outcome attached to one [`Assessment`].
///
/// Exactly one prediction is produced per assessment. Provenance
/// (`model_version`, `dataset_hash`) comes from configuration and is
/// stamped by the gateway on every result, fallback and sentinel included.
///
/// [`Assessment`]: super::Assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Risk-subtype label.
    pub cluster: Cluster,
    /// Risk score in [0, 100].
    pub risk: RiskScore,
    /// Version of the model that produced (or should have produced) this
    /// result.
    #[serde(default)]
    pub model_version: String,
    /// Fingerprint of the training dataset behind `model_version`.
    #[serde(default)]
    pub dataset_hash: String,
}

impl Prediction {
    /// Canonical error sentinel: `cluster = "error"`, `risk = 0`.
    ///
    /// Used to represent any unrecovered remote-call failure so downstream
    /// persistence has a single failure shape to handle.
    #[must_use]
    pub fn error_sentinel(model_version: impl Into<String>, dataset_hash: impl Into<String>) -> Self {
        Self {
            cluster: Cluster::Error,
            risk: RiskScore::ZERO,
            model_version: model_version.into(),
            dataset_hash: dataset_hash.into(),
        }
    }

    /// True when this prediction is the error sentinel.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.cluster == Cluster::Error
    }
}
