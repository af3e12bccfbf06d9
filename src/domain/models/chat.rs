use serde::{Deserialize, Serialize};

/// A single role-tagged message on the chat-completions wire.
///
/// Outbound messages carry only `role` and `content`; the optional fields
/// appear on messages echoed back by the API and are omitted from serialized
/// output when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refusal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            refusal: None,
            reasoning: None,
        }
    }
}

/// Request payload for `POST /api/v1/chat/completions`.
///
/// This client always sends exactly one `user` message; no conversation
/// history accumulates between turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Build a single-turn request: one user message, no history.
    pub fn single_turn(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(content)],
        }
    }
}

/// One candidate reply among possibly several. Only the first is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Always null in practice; kept as a raw value so a provider that
    /// starts populating it doesn't break decoding.
    #[serde(default)]
    pub logprobs: Option<serde_json::Value>,
    pub finish_reason: String,
    pub native_finish_reason: String,
    pub index: u32,
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptTokensDetails {
    pub cached_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionTokensDetails {
    pub reasoning_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub prompt_tokens_details: PromptTokensDetails,
    pub completion_tokens_details: CompletionTokensDetails,
}

/// Response payload from the chat-completions endpoint.
///
/// The API adds fields without warning, so decoding must tolerate unknown
/// keys at every nesting level (serde's default behavior — no `deny_unknown_fields`).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub provider: String,
    pub model: String,
    pub object: String,
    pub created: i64,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub system_fingerprint: Option<String>,
    pub usage: Usage,
}
