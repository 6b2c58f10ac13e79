use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error};

/// Upstream error bodies are logged for diagnosis but can be arbitrarily
/// large; cap what reaches the log line.
const MAX_LOGGED_BODY: usize = 2048;

/// Narrow seam over the chat-completion provider: send one prompt, get the
/// raw completion text back. Lets tests substitute a double for the real
/// network client.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub struct OpenRouterClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenRouterClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            model: config.model,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl ProviderClient for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // Fail fast before any network I/O when no credential was configured.
        let api_key = self.api_key.as_deref().ok_or(Error::ApiKeyMissing)?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::UpstreamTimeout
                } else {
                    Error::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let truncated: String = body.chars().take(MAX_LOGGED_BODY).collect();
            error!(status = status.as_u16(), body = %truncated, "OpenRouter API error");
            return Err(Error::Upstream {
                status: status.as_u16(),
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                Error::UpstreamTimeout
            } else {
                Error::Network(e)
            }
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::internal("provider response contained no choices"))?;

        Ok(choice.message.content)
    }
}
