use async_trait::async_trait;

use crate::domain::ChatError;

/// An interface for sending a single chat message to an LLM provider and
/// receiving the assistant's reply text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details.  Consumers (e.g. [`crate::application::RunChatUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one `user` message and return the first choice's content.
    ///
    /// Each call is an independent single-turn exchange; implementations
    /// carry no conversation state between calls and attempt no retries.
    async fn send(&self, message: &str) -> Result<String, ChatError>;
}
