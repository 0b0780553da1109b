//! Catalog Session

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::{
    gateway::StoreGateway,
    models::{Movie, MovieId},
    state::{SessionState, StateCell},
};

/// Movies whose name or category contains `query`, ignoring case.
///
/// An empty query returns every movie. Order is preserved.
pub fn filter_movies<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    if query.is_empty() {
        return movies.iter().collect();
    }

    let needle = query.to_lowercase();

    movies
        .iter()
        .filter(|movie| {
            movie.name.to_lowercase().contains(&needle)
                || movie.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Owns the catalog listing.
pub struct CatalogSession {
    gateway: Arc<dyn StoreGateway>,
    state: StateCell<Vec<Movie>>,
}

impl Debug for CatalogSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CatalogSession {
    /// Create an idle session.
    pub fn new(gateway: Arc<dyn StoreGateway>) -> Self {
        Self {
            gateway,
            state: StateCell::new(),
        }
    }

    /// Fetch the catalog. Every failure kind is surfaced the same way.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.state.set(SessionState::Loading);

        match self.gateway.list_movies().await {
            Ok(movies) => {
                debug!(count = movies.len(), "catalog loaded");

                self.state.set(SessionState::Loaded(movies));
            }
            Err(error) => {
                warn!(%error, "catalog load failed");

                self.state.set(SessionState::Failed(error.to_string()));
            }
        }
    }

    /// Loaded movies matching `query`; empty unless the catalog is loaded.
    pub fn filter(&self, query: &str) -> Vec<Movie> {
        self.state.with(|state| {
            state.loaded().map_or_else(Vec::new, |movies| {
                filter_movies(movies, query).into_iter().cloned().collect()
            })
        })
    }

    /// A loaded movie by id.
    pub fn find(&self, id: MovieId) -> Option<Movie> {
        self.state.with(|state| {
            state
                .loaded()
                .and_then(|movies| movies.iter().find(|movie| movie.id == id).cloned())
        })
    }

    /// Current state snapshot.
    pub fn state(&self) -> SessionState<Vec<Movie>> {
        self.state.snapshot()
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState<Vec<Movie>>> {
        self.state.subscribe()
    }
}
