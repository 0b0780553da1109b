//! Cart Session

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::{
    cart::{CartGroup, cart_total, group_lines},
    gateway::StoreGateway,
    models::CartLine,
    state::{SessionState, StateCell},
};

/// Owns the cart's load / group / delete-and-reload cycle for one user.
///
/// The grouped view is always rebuilt from a fresh backend listing; nothing
/// is patched locally after a mutation.
pub struct CartSession {
    gateway: Arc<dyn StoreGateway>,
    user_name: String,
    lines: Vec<CartLine>,
    state: StateCell<Vec<CartGroup>>,
}

impl Debug for CartSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartSession")
            .field("user_name", &self.user_name)
            .field("lines", &self.lines.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CartSession {
    /// Create an idle session acting for `user_name`.
    pub fn new(gateway: Arc<dyn StoreGateway>, user_name: impl Into<String>) -> Self {
        Self {
            gateway,
            user_name: user_name.into(),
            lines: Vec::new(),
            state: StateCell::new(),
        }
    }

    /// Fetch the cart and publish its groups.
    ///
    /// A listing that fails to decode, or that the backend flags as failed, is
    /// how the backend answers for a user without a cart: it is published as
    /// an empty cart, not as an error. Any other failure moves the session to
    /// [`SessionState::Failed`].
    #[instrument(skip(self), fields(user = %self.user_name))]
    pub async fn load(&mut self) {
        self.state.set(SessionState::Loading);

        match self.gateway.list_cart(&self.user_name).await {
            Ok(lines) => {
                let groups = group_lines(&lines);

                debug!(lines = lines.len(), groups = groups.len(), "cart loaded");

                self.lines = lines;
                self.state.set(SessionState::Loaded(groups));
            }
            Err(error) if error.is_empty_cart_signal() => {
                info!(%error, "treating cart listing failure as empty cart");

                self.lines.clear();
                self.state.set(SessionState::Loaded(Vec::new()));
            }
            Err(error) => {
                warn!(%error, "cart load failed");

                self.lines.clear();
                self.state.set(SessionState::Failed(error.to_string()));
            }
        }
    }

    /// Delete every line behind `group`, then reload.
    ///
    /// Deletions run one at a time and are best effort: a failed or declined
    /// line is logged and skipped, never retried, and never reported to the
    /// caller. The reload that follows is what the caller should trust.
    #[instrument(skip(self, group), fields(user = %self.user_name, group = %group.key))]
    pub async fn delete(&mut self, group: &CartGroup) {
        for &cart_id in &group.cart_ids {
            match self
                .gateway
                .remove_cart_line(cart_id, &self.user_name)
                .await
            {
                Ok(true) => debug!(%cart_id, "cart line removed"),
                Ok(false) => warn!(%cart_id, "backend declined cart line removal"),
                Err(error) => warn!(%cart_id, %error, "cart line removal failed"),
            }
        }

        self.load().await;
    }

    /// Sum of price times amount over the current groups.
    pub fn total(&self) -> u64 {
        self.state
            .with(|state| state.loaded().map_or(0, |groups| cart_total(groups)))
    }

    /// Groups from the last successful load; empty otherwise.
    pub fn groups(&self) -> Vec<CartGroup> {
        self.state
            .with(|state| state.loaded().cloned().unwrap_or_default())
    }

    /// Raw lines behind the current groups; empty unless the cart is loaded.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Current state snapshot.
    pub fn state(&self) -> SessionState<Vec<CartGroup>> {
        self.state.snapshot()
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState<Vec<CartGroup>>> {
        self.state.subscribe()
    }

    /// Account the session acts for.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}
