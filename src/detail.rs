//! Detail Session
//!
//! Quantity selection and add-to-cart for a single movie.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::{info, instrument, warn};

use crate::{cart::CartSession, gateway::StoreGateway, models::Movie};

/// Smallest quantity that can be added.
pub const MIN_AMOUNT: u32 = 1;

/// Largest quantity that can be added in one go.
pub const MAX_AMOUNT: u32 = 20;

/// One movie's detail view: chosen quantity plus the outcome of the last add.
pub struct DetailSession {
    gateway: Arc<dyn StoreGateway>,
    user_name: String,
    movie: Movie,
    amount: u32,
    info: Option<String>,
    did_add: bool,
}

impl Debug for DetailSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DetailSession")
            .field("user_name", &self.user_name)
            .field("movie", &self.movie.id)
            .field("amount", &self.amount)
            .field("info", &self.info)
            .field("did_add", &self.did_add)
            .finish_non_exhaustive()
    }
}

impl DetailSession {
    /// Start at the minimum amount with no message.
    pub fn new(
        gateway: Arc<dyn StoreGateway>,
        user_name: impl Into<String>,
        movie: Movie,
    ) -> Self {
        Self {
            gateway,
            user_name: user_name.into(),
            movie,
            amount: MIN_AMOUNT,
            info: None,
            did_add: false,
        }
    }

    /// Movie being shown.
    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    /// Selected quantity.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Set the quantity, clamped to the allowed range.
    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount.clamp(MIN_AMOUNT, MAX_AMOUNT);
    }

    /// One more copy, up to [`MAX_AMOUNT`].
    pub fn increase(&mut self) {
        self.set_amount(self.amount.saturating_add(1));
    }

    /// One fewer copy, down to [`MIN_AMOUNT`].
    pub fn decrease(&mut self) {
        self.set_amount(self.amount.saturating_sub(1));
    }

    /// Price for the selected quantity.
    pub fn line_total(&self) -> u64 {
        self.movie.price.saturating_mul(u64::from(self.amount))
    }

    /// Outcome message of the last add attempt.
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Whether the last add attempt succeeded.
    pub fn did_add(&self) -> bool {
        self.did_add
    }

    /// Add the selected quantity to the cart.
    ///
    /// On success `cart` is reloaded so its groups include the new line. On
    /// failure the cart is left untouched and the error is kept in
    /// [`Self::info`]. Returns whether the add succeeded.
    #[instrument(skip(self, cart), fields(movie = %self.movie.name, amount = self.amount))]
    pub async fn add_to_cart(&mut self, cart: &mut CartSession) -> bool {
        match self
            .gateway
            .add_to_cart(&self.movie, self.amount, &self.user_name)
            .await
        {
            Ok(()) => {
                info!("added to cart");

                self.info = Some("Added to cart".to_string());
                self.did_add = true;

                cart.load().await;
            }
            Err(error) => {
                warn!(%error, "add to cart failed");

                self.info = Some(format!("Error: {error}"));
                self.did_add = false;
            }
        }

        self.did_add
    }
}
