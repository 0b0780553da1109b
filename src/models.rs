//! Models
//!
//! Records as the FilmStore backend returns them.

mod cart;
mod movie;

pub use cart::{CartLine, CartLineId, CartListResponse};
pub use movie::{Movie, MovieId, MovieListResponse};

use serde::Deserialize;

/// Acknowledgement body returned by the mutating endpoints.
///
/// Both fields are optional on the wire; a missing `success` flag is a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    /// `1` when the backend applied the change.
    #[serde(default)]
    pub success: Option<i64>,

    /// Human readable status from the backend.
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Whether the backend reported success.
    pub fn is_success(&self) -> bool {
        self.success == Some(1)
    }
}
