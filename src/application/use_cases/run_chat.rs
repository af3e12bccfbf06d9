use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::error;

use crate::application::ChatService;
use crate::domain::ChatError;

/// Drives the interactive read/send/print loop.
///
/// Reads newline-delimited input, forwards each line through the injected
/// [`ChatService`], and writes the transcript to `output`.  Every failure is
/// reported through `tracing` (diagnostics stream) rather than the
/// transcript, so stdout stays a clean conversational view.  The loop only
/// ends on end-of-input.
pub struct RunChatUseCase {
    chat_service: Arc<dyn ChatService>,
}

impl RunChatUseCase {
    pub fn new(chat_service: Arc<dyn ChatService>) -> Self {
        Self { chat_service }
    }

    /// Run the loop until `input` reaches end-of-stream.
    ///
    /// Turns are fully independent: a failed turn is logged and the prompt
    /// reprinted, with no state carried over to the next line.
    pub async fn execute<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<(), ChatError> {
        write!(output, "You: ")?;
        output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let message = line.trim_end_matches(['\n', '\r']);

            match self.chat_service.send(message).await {
                Ok(reply) => {
                    write!(output, "Assistant: {reply}\n\nYou: ")?;
                }
                Err(e) => {
                    error!("Chat turn failed: {e}");
                    write!(output, "You: ")?;
                }
            }
            output.flush()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Scripted [`ChatService`] that records every message it receives.
    struct ScriptedChat {
        calls: Mutex<Vec<String>>,
        replies: Mutex<Vec<Result<String, ChatError>>>,
    }

    impl ScriptedChat {
        fn new(replies: Vec<Result<String, ChatError>>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                replies: Mutex::new(replies),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatService for ScriptedChat {
        async fn send(&self, message: &str) -> Result<String, ChatError> {
            self.calls.lock().unwrap().push(message.to_string());
            self.replies.lock().unwrap().remove(0)
        }
    }

    #[tokio::test]
    async fn end_of_input_terminates_without_calling_service() {
        let service = Arc::new(ScriptedChat::new(vec![]));
        let use_case = RunChatUseCase::new(service.clone());

        let mut output = Vec::new();
        let result = use_case.execute(Cursor::new(""), &mut output).await;

        assert!(result.is_ok());
        assert_eq!(service.call_count(), 0);
        assert_eq!(String::from_utf8(output).unwrap(), "You: ");
    }

    #[tokio::test]
    async fn successful_turn_prints_reply_and_fresh_prompt() {
        let service = Arc::new(ScriptedChat::new(vec![Ok("hi there".to_string())]));
        let use_case = RunChatUseCase::new(service.clone());

        let mut output = Vec::new();
        use_case
            .execute(Cursor::new("hello\n"), &mut output)
            .await
            .unwrap();

        assert_eq!(service.call_count(), 1);
        assert_eq!(service.calls.lock().unwrap()[0], "hello");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "You: Assistant: hi there\n\nYou: "
        );
    }

    #[tokio::test]
    async fn failed_turn_keeps_transcript_clean_and_loop_alive() {
        let service = Arc::new(ScriptedChat::new(vec![
            Err(ChatError::parse("unexpected end of input")),
            Ok("recovered".to_string()),
        ]));
        let use_case = RunChatUseCase::new(service.clone());

        let mut output = Vec::new();
        use_case
            .execute(Cursor::new("first\nsecond\n"), &mut output)
            .await
            .unwrap();

        // Both lines reached the service despite the first failing.
        assert_eq!(service.call_count(), 2);
        let transcript = String::from_utf8(output).unwrap();
        assert!(!transcript.contains("unexpected end of input"));
        assert_eq!(transcript, "You: You: Assistant: recovered\n\nYou: ");
    }

    #[tokio::test]
    async fn carriage_returns_are_stripped_from_input_lines() {
        let service = Arc::new(ScriptedChat::new(vec![Ok("ok".to_string())]));
        let use_case = RunChatUseCase::new(service.clone());

        let mut output = Vec::new();
        use_case
            .execute(Cursor::new("windows line\r\n"), &mut output)
            .await
            .unwrap();

        assert_eq!(service.calls.lock().unwrap()[0], "windows line");
    }
}
