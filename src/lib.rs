pub mod application;
pub mod connector;
pub mod domain;

pub use application::{ChatService, RunChatUseCase};

pub use connector::OpenRouterClient;

pub use domain::{
    ChatChoice, ChatError, ChatMessage, ChatRequest, ChatResponse, CompletionTokensDetails,
    PromptTokensDetails, Usage,
};
