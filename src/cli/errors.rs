use std::io;

use thiserror::Error;

use filmstore::{favorites::FavoritesError, models::MovieId};

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("could not load movies: {0}")]
    Catalog(String),

    #[error("could not load cart: {0}")]
    Cart(String),

    #[error("no movie with id {0}")]
    MovieNotFound(MovieId),

    #[error("cart has no line {position} (it has {count})")]
    NoSuchLine { position: usize, count: usize },

    #[error("{0}")]
    AddRejected(String),

    #[error(transparent)]
    Favorites(#[from] FavoritesError),

    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}
