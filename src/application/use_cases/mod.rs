mod run_chat;

pub use run_chat::*;
