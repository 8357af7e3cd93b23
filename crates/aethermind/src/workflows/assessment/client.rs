use super::report::{Report, ReportError};
use super::request::AssessmentRequest;
use crate::config::ScoringConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Failures of the single request/response exchange with the scoring service.
/// Every variant ends the submission in the `Failed` state.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("unable to reach the scoring service: {0}")]
    Transport(String),
    #[error("Analysis failed (scoring service returned HTTP {status})")]
    Status { status: u16 },
    #[error("Analysis failed: {0}")]
    MalformedResponse(#[from] ReportError),
}

/// Boundary to the external risk-scoring engine.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn analyze(&self, request: &AssessmentRequest) -> Result<Report, SubmissionError>;
}

/// reqwest-backed client for the scoring service's `POST /analyze` endpoint.
#[derive(Debug, Clone)]
pub struct HttpScoringClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpScoringClient {
    pub fn new(config: &ScoringConfig) -> Result<Self, SubmissionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;

        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: &ScoringConfig) -> Self {
        let endpoint = format!(
            "{}/analyze",
            config.base_url.as_str().trim_end_matches('/')
        );
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ScoringService for HttpScoringClient {
    async fn analyze(&self, request: &AssessmentRequest) -> Result<Report, SubmissionError> {
        debug!(endpoint = %self.endpoint, use_case = %request.use_case, "posting assessment");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "scoring service unreachable");
                SubmissionError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "scoring service rejected assessment");
            return Err(SubmissionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| SubmissionError::Transport(err.to_string()))?;

        Report::from_slice(&body).map_err(|err| {
            warn!(error = %err, "scoring service returned a malformed report");
            SubmissionError::from(err)
        })
    }
}
