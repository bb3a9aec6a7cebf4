use async_trait::async_trait;

use super::LlmClientError;

/// One completion attempt against the text-generation service using one
/// credential. Rotation and retry live above this seam.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete_with_key(&self, api_key: &str, prompt: &str)
    -> Result<String, LlmClientError>;
}
