use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{CompletionBackend, LlmClient, LlmClientError};

use super::RotationCursor;

/// Spreads completions across several API credentials.
///
/// A call starts at the shared cursor and, on each rate-limit reply, moves to
/// the next credential until every credential has been tried once. Any other
/// failure is returned immediately without rotating. The cursor is never
/// rewound, so consecutive calls pick up where the previous one stopped.
pub struct CredentialRotationClient<B>
where
    B: CompletionBackend,
{
    backend: B,
    credentials: Vec<String>,
    cursor: Arc<RotationCursor>,
}

impl<B> CredentialRotationClient<B>
where
    B: CompletionBackend,
{
    pub fn new(backend: B, credentials: Vec<String>) -> Self {
        Self::with_cursor(backend, credentials, Arc::new(RotationCursor::new()))
    }

    pub fn with_cursor(backend: B, credentials: Vec<String>, cursor: Arc<RotationCursor>) -> Self {
        Self {
            backend,
            credentials,
            cursor,
        }
    }

    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }

    pub fn cursor(&self) -> &Arc<RotationCursor> {
        &self.cursor
    }
}

#[async_trait]
impl<B> LlmClient for CredentialRotationClient<B>
where
    B: CompletionBackend,
{
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        let pool_size = self.credentials.len();
        if pool_size == 0 {
            return Err(LlmClientError::NoCredentials);
        }

        let start = self.cursor.current(pool_size);
        let mut last_error = None;

        for attempt in 0..pool_size {
            let key_index = (start + attempt) % pool_size;

            match self
                .backend
                .complete_with_key(&self.credentials[key_index], prompt)
                .await
            {
                Ok(text) => {
                    tracing::debug!(key_index, attempt, "Completion succeeded");
                    return Ok(text);
                }
                Err(e) if e.is_rate_limit() => {
                    self.cursor.advance(key_index, pool_size);
                    tracing::warn!(
                        key_index,
                        next_key_index = (key_index + 1) % pool_size,
                        "API key rate limited, rotating"
                    );
                    last_error = Some(e);
                }
                Err(e) => {
                    tracing::warn!(key_index, error = %e, "Completion failed without rotation");
                    return Err(e);
                }
            }
        }

        tracing::error!(attempts = pool_size, "Every API key is rate limited");
        match last_error {
            Some(last) => Err(LlmClientError::CredentialsExhausted {
                attempts: pool_size,
                last: Box::new(last),
            }),
            None => Err(LlmClientError::NoCredentials),
        }
    }
}
