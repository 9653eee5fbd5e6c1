//! Inference configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the prediction subsystem.
///
/// An empty `service_url` routes every prediction to the rule-based
/// fallback; a non-empty one selects the HTTP model-service client.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Model-service address. Empty means fallback mode.
    #[serde(default)]
    pub service_url: String,

    /// Model version stamped on every prediction and sent as the
    /// `X-Model-Version` request header. Defaults to "v1.0".
    #[serde(default = "default_model_version")]
    pub model_version: String,

    /// Fingerprint of the training dataset behind `model_version`.
    /// Stamped on every prediction. Defaults to empty.
    #[serde(default)]
    pub dataset_hash: String,

    /// End-to-end time budget for one remote prediction call, in
    /// milliseconds. Defaults to 2000.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl InferenceConfig {
    /// The remote-call time budget as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            service_url: String::new(),
            model_version: default_model_version(),
            dataset_hash: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_model_version() -> String {
    "v1.0".into()
}

const fn default_timeout_ms() -> u64 {
    2000
}
