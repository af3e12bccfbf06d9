use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::application::ChatService;
use crate::domain::{ChatError, ChatRequest, ChatResponse};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai";
const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";
const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the OpenRouter chat-completions API (and compatible
/// OpenAI-style endpoints).
///
/// Implements [`ChatService`] so the interactive loop stays decoupled from
/// transport and serialization details.  Override via environment variables
/// to target another server or model:
///
/// ```text
/// OPENROUTER_BASE_URL=https://openrouter.ai
/// OPENROUTER_API_KEY=sk-or-...
/// OPENROUTER_MODEL=openai/gpt-3.5-turbo
/// ```
///
/// Each call is one blocking-from-the-caller's-view request with a 30-second
/// transport timeout and no retry.  A timed-out or failed request surfaces as
/// [`ChatError::Transport`].
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenRouterClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{COMPLETIONS_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable              | Default                   | Purpose              |
    /// |-----------------------|---------------------------|----------------------|
    /// | `OPENROUTER_BASE_URL` | `https://openrouter.ai`   | API server           |
    /// | `OPENROUTER_MODEL`    | `openai/gpt-3.5-turbo`    | Model identifier     |
    /// | `OPENROUTER_API_KEY`  | `""` (empty)              | Bearer credential    |
    pub fn from_env() -> Self {
        let base =
            std::env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let key = std::env::var("OPENROUTER_API_KEY").unwrap_or_default();
        Self::new(key, model, base)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Extract the first choice's message text, guarding against a
    /// well-formed response that carries zero choices.
    fn first_choice_content(response: ChatResponse) -> Result<String, ChatError> {
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ChatError::EmptyChoices)
    }
}

#[async_trait]
impl ChatService for OpenRouterClient {
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        let request = ChatRequest::single_turn(self.model.as_str(), message);
        debug!("Sending chat request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::transport(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::transport(format!("failed to read response body: {e}")))?;
        debug!("Response ({status}): {body}");

        if status != StatusCode::OK {
            return Err(ChatError::http_status(status.as_u16(), body));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| ChatError::parse(format!("invalid chat-completions response: {e}")))?;

        Self::first_choice_content(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = OpenRouterClient::new("key", "model", "http://localhost:8080/");
        assert_eq!(client.url, "http://localhost:8080/api/v1/chat/completions");
    }

    #[test]
    fn first_choice_of_empty_response_is_an_error() {
        let body = serde_json::json!({
            "id": "gen-1",
            "provider": "OpenAI",
            "model": "m",
            "object": "chat.completion",
            "created": 0,
            "choices": [],
            "usage": {
                "prompt_tokens": 0,
                "completion_tokens": 0,
                "total_tokens": 0,
                "prompt_tokens_details": { "cached_tokens": 0 },
                "completion_tokens_details": { "reasoning_tokens": 0 }
            }
        });
        let response: ChatResponse = serde_json::from_value(body).unwrap();

        let result = OpenRouterClient::first_choice_content(response);
        assert!(matches!(result, Err(ChatError::EmptyChoices)));
    }
}
