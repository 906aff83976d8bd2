//! Error types surfaced to the status line

use thiserror::Error;

/// Failure of a remote call. Transport and server failures collapse into one signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("No active user")]
    MissingUsername,

    #[error("Could not connect to the server. Is it running? ({0})")]
    Transport(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GatewayError::Decode(e.to_string())
        } else if e.is_timeout() {
            GatewayError::Transport("request timed out".to_string())
        } else {
            GatewayError::Transport(e.to_string())
        }
    }
}

/// Local form validation failure. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("List name is required")]
    MissingListName,

    #[error("Add at least one email")]
    NoEmails,

    #[error("No valid emails to add")]
    NoValidEmails,

    #[error("No valid emails found in the file")]
    NoValidEmailsInFile,

    #[error("Could not read file")]
    UnreadableFile,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} is not a valid email")]
    InvalidEmail(String),
}
