//! Session state
//!
//! Every session owns exactly one [`StateCell`]. Only the owning session
//! writes to it (its mutating operations take `&mut self`); any number of
//! observers may subscribe and are notified on each transition.

use tokio::sync::watch;

/// Lifecycle of one session's data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState<T> {
    /// Nothing has been requested yet.
    #[default]
    Idle,

    /// A load is in flight.
    Loading,

    /// The last load finished with data.
    Loaded(T),

    /// The last load failed; holds a description fit for display.
    Failed(String),
}

impl<T> SessionState<T> {
    /// Data from the last successful load, if that is the current state.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Error description, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Observable single-writer container for a [`SessionState`].
#[derive(Debug)]
pub struct StateCell<T> {
    sender: watch::Sender<SessionState<T>>,
}

impl<T> Default for StateCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateCell<T> {
    /// A cell starting in [`SessionState::Idle`].
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SessionState::Idle);

        Self { sender }
    }

    /// Replace the state and wake subscribers. Succeeds with no subscribers.
    pub(crate) fn set(&self, state: SessionState<T>) {
        self.sender.send_replace(state);
    }

    /// Receiver that observes every subsequent transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState<T>> {
        self.sender.subscribe()
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState<T>) -> R) -> R {
        f(&self.sender.borrow())
    }
}

impl<T: Clone> StateCell<T> {
    /// Clone of the current state.
    pub fn snapshot(&self) -> SessionState<T> {
        self.sender.borrow().clone()
    }
}
