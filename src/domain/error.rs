use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("HTTP {code}: {body}")]
    HttpStatus { code: u16, body: String },

    #[error("Parse failure: {0}")]
    Parse(String),

    #[error("Response contained no choices")]
    EmptyChoices,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChatError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn http_status(code: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            code,
            body: body.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpStatus { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
