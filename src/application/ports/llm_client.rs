use std::time::Duration;

use async_trait::async_trait;

/// Produces a completion for a single prompt.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("no api credentials configured")]
    NoCredentials,
    #[error("all {attempts} api credentials are rate limited, last error: {last}")]
    CredentialsExhausted {
        attempts: usize,
        last: Box<LlmClientError>,
    },
}

impl LlmClientError {
    /// Only rate-limit and quota signals justify moving to another credential.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}
