//! Pricing
//!
//! Catalog and cart prices are whole Turkish lira.

use rusty_money::{Money, iso};

/// Render whole lira for display, e.g. `₺350,00`.
pub fn format_price(amount: u64) -> String {
    let major = i64::try_from(amount).unwrap_or(i64::MAX);

    Money::from_major(major, iso::TRY).to_string()
}
