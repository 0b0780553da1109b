//! Cart Models

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Cart Line Id
pub type CartLineId = TypedId<CartLine>;

/// One persisted cart record.
///
/// Movie attributes are copied into the line when it is inserted, so a line
/// never refers back to a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub cart_id: CartLineId,
    pub name: String,
    pub image: String,
    pub price: u64,
    pub category: String,
    pub rating: f64,
    pub year: i32,
    pub director: String,
    pub description: String,
    pub order_amount: u32,
    pub user_name: String,
}

/// `getMovieCart.php` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CartListResponse {
    pub movie_cart: Vec<CartLine>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_camel_case_fields() -> TestResult {
        let body = r#"{"movie_cart":[{"cartId":7,"name":"Inception","image":"inception.png",
            "price":32,"category":"Science Fiction","rating":8.8,"year":2010,
            "director":"Christopher Nolan","description":"Dreams.","orderAmount":3,
            "userName":"malis_movie"}],"success":1}"#;

        let response: CartListResponse = serde_json::from_str(body)?;

        let [line] = response.movie_cart.as_slice() else {
            return Err("expected exactly one line".into());
        };

        assert_eq!(line.cart_id, CartLineId::new(7));
        assert_eq!(line.order_amount, 3);
        assert_eq!(line.user_name, "malis_movie");

        Ok(())
    }
}
