use thiserror::Error;

/// Why an autocomplete lookup produced no usable matches
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Search request failed: {0}")]
    Transport(String),

    #[error("Search endpoint returned status {0}")]
    Status(u16),

    #[error("Search endpoint reported an error: {0}")]
    Server(String),

    #[error("Malformed search response: {0}")]
    Malformed(String),
}

impl LookupError {
    /// Stable label used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Transport(_) => "transport",
            LookupError::Status(_) => "status",
            LookupError::Server(_) => "server",
            LookupError::Malformed(_) => "malformed",
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Malformed(err.to_string())
    }
}
