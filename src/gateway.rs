//! HTTP Gateway
//!
//! The four backend operations the storefront depends on. Sessions talk to
//! [`StoreGateway`]; [`HttpGateway`] is the reqwest-backed implementation.

mod errors;
mod form;
mod http;

pub use errors::GatewayError;
pub use form::{FormFields, add_to_cart_form, cart_form, remove_cart_line_form};
pub use http::HttpGateway;

use async_trait::async_trait;
use mockall::automock;

use crate::models::{CartLine, CartLineId, Movie};

/// Backend operations used by the sessions.
#[automock]
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Fetch the full catalog, in backend order.
    async fn list_movies(&self) -> Result<Vec<Movie>, GatewayError>;

    /// Insert a cart line for `amount` copies of `movie`.
    async fn add_to_cart(
        &self,
        movie: &Movie,
        amount: u32,
        user_name: &str,
    ) -> Result<(), GatewayError>;

    /// Fetch every cart line belonging to `user_name`, in backend order.
    async fn list_cart(&self, user_name: &str) -> Result<Vec<CartLine>, GatewayError>;

    /// Delete one cart line. Returns the backend's success flag.
    async fn remove_cart_line(
        &self,
        cart_id: CartLineId,
        user_name: &str,
    ) -> Result<bool, GatewayError>;
}
