use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionBackend, LlmClientError};
use crate::presentation::config::LlmSettings;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// OpenAI-compatible chat completions endpoint, one request per call.
pub struct ChatCompletionBackend {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionBackend {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            max_tokens: 1000,
            temperature: 0.2,
            timeout,
        })
    }

    pub fn from_settings(settings: &LlmSettings) -> Result<Self, LlmClientError> {
        Ok(Self::new(
            &settings.base_url,
            &settings.model,
            Duration::from_secs(settings.timeout_secs),
        )?
        .with_generation(settings.max_tokens, settings.temperature))
    }

    pub fn with_generation(mut self, max_tokens: usize, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    fn map_send_error(&self, error: reqwest::Error) -> LlmClientError {
        if error.is_timeout() {
            LlmClientError::Timeout(self.timeout)
        } else {
            LlmClientError::ApiRequestFailed(error.to_string())
        }
    }
}

/// Providers differ in how they report exhausted quota; some use 429, others
/// a 4xx whose body names the condition.
fn signals_rate_limit(body: &str) -> bool {
    let body = body.to_lowercase();
    body.contains("rate_limit") || body.contains("rate limit") || body.contains("quota")
}

#[async_trait]
impl CompletionBackend for ChatCompletionBackend {
    async fn complete_with_key(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = format!("HTTP {}: {}", status, body);

            if status == StatusCode::TOO_MANY_REQUESTS || signals_rate_limit(&body) {
                return Err(LlmClientError::RateLimited(detail));
            }
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(LlmClientError::Unauthorized(detail));
            }
            return Err(LlmClientError::ApiRequestFailed(detail));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmClientError::Timeout(self.timeout)
            } else {
                LlmClientError::InvalidResponse(e.to_string())
            }
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| LlmClientError::InvalidResponse("empty completion".to_string()))
    }
}
