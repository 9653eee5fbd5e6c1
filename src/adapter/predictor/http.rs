//! HTTP model-service client.
//!
//! Provides an implementation of the [`Predictor`] trait that posts
//! assessment biomarkers to a remote inference endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{Assessment, Cluster, RiskScore};
use crate::error::{Error, Result};
use crate::port::Predictor;

/// Header carrying the configured model version on every request.
const MODEL_VERSION_HEADER: &str = "X-Model-Version";

/// HTTP-backed predictor.
///
/// Issues exactly one `POST` per prediction to the configured service
/// address; there is no retry and no backoff. That is a deliberate
/// simplicity choice, preserved on purpose. The full round trip is bounded
/// by the timeout handed to [`HttpPredictor::new`], enforced by the
/// underlying client; once the budget elapses the in-flight request is
/// abandoned and the call errors out.
///
/// Every failure mode (connect error, non-success status, undecodable
/// body, out-of-vocabulary cluster, out-of-range score, elapsed budget)
/// surfaces as `Err` here and is collapsed to the error sentinel by the
/// gateway.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: Client,
    url: String,
    model_version: String,
}

/// Expected success body from the model service.
#[derive(Deserialize)]
struct PredictResponse {
    cluster: Cluster,
    risk_score: RiskScore,
}

impl HttpPredictor {
    /// Create a predictor for the given service address.
    ///
    /// `timeout` bounds each prediction call end to end, connect included.
    /// `model_version` is sent as the `X-Model-Version` header when
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        url: impl Into<String>,
        model_version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            model_version: model_version.into(),
        })
    }

    /// The configured service address.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn predict(&self, assessment: &Assessment) -> Result<(Cluster, RiskScore)> {
        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(assessment);
        if !self.model_version.is_empty() {
            request = request.header(MODEL_VERSION_HEADER, &self.model_version);
        }

        let response = request.send().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "model service request failed");
            Error::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "model service returned non-success status");
            return Err(Error::ModelService(format!("status {status}")));
        }

        let body: PredictResponse = response.json().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "model service returned malformed body");
            Error::Http(e)
        })?;

        Ok((body.cluster, body.risk_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_deserialization() {
        let json = r#"{"cluster": "SIDD", "risk_score": 92}"#;
        let parsed: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.cluster, Cluster::Sidd);
        assert_eq!(parsed.risk_score.value(), 92);
    }

    #[test]
    fn response_with_unknown_cluster_is_malformed() {
        let json = r#"{"cluster": "NOVEL", "risk_score": 50}"#;
        assert!(serde_json::from_str::<PredictResponse>(json).is_err());
    }

    #[test]
    fn response_with_out_of_range_score_is_malformed() {
        let json = r#"{"cluster": "MARD", "risk_score": 150}"#;
        assert!(serde_json::from_str::<PredictResponse>(json).is_err());
    }

    #[test]
    fn response_ignores_extra_fields() {
        let json = r#"{"cluster": "MARD", "risk_score": 45, "confidence": 0.9}"#;
        let parsed: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.cluster, Cluster::Mard);
    }
}
