// src/poller/error.rs
use reqwest::StatusCode;

/// Failure of a single poll cycle. Always absorbed by the loop.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("unexpected content type '{0}', expected JSON")]
    ContentType(String),

    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl PollError {
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Connect(_) => "connect",
            PollError::Timeout(_) => "timeout",
            PollError::Status(_) => "status",
            PollError::ContentType(_) => "content_type",
            PollError::Decode(_) => "decode",
            PollError::Request(_) => "request",
        }
    }
}

impl From<reqwest::Error> for PollError {
    fn from(err: reqwest::Error) -> Self {
        // Timeouts while connecting report is_connect too
        if err.is_timeout() {
            PollError::Timeout(err)
        } else if err.is_connect() {
            PollError::Connect(err)
        } else {
            PollError::Request(err)
        }
    }
}
