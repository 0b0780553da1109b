//! Movie Models

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Movie Id
pub type MovieId = TypedId<Movie>;

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,

    /// File name resolved against the images base URL.
    pub image: String,

    /// Whole lira.
    pub price: u64,
    pub category: String,

    /// 0-10 scale.
    pub rating: f64,
    pub year: i32,
    pub director: String,
    pub description: String,
}

/// `getAllMovies.php` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
}
