//! Cart
//!
//! Grouping of backend cart lines for display and the session that keeps the
//! grouped view in sync with the backend.

mod groups;
mod session;

pub use groups::{CartGroup, CartGroupIds, cart_total, group_key, group_lines};
pub use session::CartSession;
