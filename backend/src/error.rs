use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Telegram configuration missing: {0} is not set")]
    MissingConfig(&'static str),

    #[error("Telegram responded with {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Failed to reach Telegram: {0}")]
    Network(#[from] reqwest::Error),
}

impl RelayError {
    /// Message returned to the browser. Details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::MissingConfig(_) => "Telegram configuration missing",
            RelayError::Upstream { .. } | RelayError::Network(_) => "Failed to send message",
        }
    }
}

pub type RelayResult = Result<(), RelayError>;
