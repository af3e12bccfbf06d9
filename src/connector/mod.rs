//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - OpenRouter chat-completions API (reqwest)

pub mod adapter;

pub use adapter::*;
