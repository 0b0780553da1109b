//! Gateway errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a backend call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend answered with a status outside 2xx.
    #[error("invalid response from server (status {status})")]
    InvalidResponse { status: StatusCode },

    /// The body did not have the expected shape.
    #[error("could not decode server response: {0}")]
    Decoding(serde_json::Error),

    /// The body was well formed but reported a failure.
    #[error("server error: {0}")]
    Server(String),

    /// Transport fault below HTTP: DNS, connect, reset, body read.
    #[error("network error: {0}")]
    Network(reqwest::Error),
}

impl GatewayError {
    /// Whether a cart listing failure means "this user has no cart yet".
    ///
    /// The backend answers an empty or never-created cart with a body that is
    /// either undecodable or flagged as a failure, so both read as empty.
    pub fn is_empty_cart_signal(&self) -> bool {
        matches!(self, Self::Decoding(_) | Self::Server(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decoding(error)
    }
}
