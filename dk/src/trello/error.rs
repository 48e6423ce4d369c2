//! Trello client error types

use thiserror::Error;

/// Errors that can occur talking to the Trello API
#[derive(Debug, Error)]
pub enum TrelloError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid list index {index} for a board with {len} lists")]
    InvalidIndex { index: usize, len: usize },
}

impl TrelloError {
    /// Check whether this was the remote side rejecting our credentials
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, TrelloError::Api { status, .. } if *status == 401 || *status == 403)
    }
}
