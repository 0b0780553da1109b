//! Form bodies
//!
//! Field names are fixed by the PHP backend. Pairs are kept in a stable order
//! so requests are reproducible.

use crate::models::{CartLineId, Movie};

/// A `application/x-www-form-urlencoded` body before encoding.
pub type FormFields = Vec<(&'static str, String)>;

/// Body for `insertMovie.php`.
pub fn add_to_cart_form(movie: &Movie, amount: u32, user_name: &str) -> FormFields {
    vec![
        ("name", movie.name.clone()),
        ("image", movie.image.clone()),
        ("price", movie.price.to_string()),
        ("category", movie.category.clone()),
        ("rating", format_rating(movie.rating)),
        ("year", movie.year.to_string()),
        ("director", movie.director.clone()),
        ("description", movie.description.clone()),
        ("orderAmount", amount.to_string()),
        ("userName", user_name.to_string()),
    ]
}

/// Ratings always carry a decimal point, so `8.0` is sent as `8.0`, not `8`.
fn format_rating(rating: f64) -> String {
    let text = rating.to_string();

    if text.bytes().all(|byte| byte.is_ascii_digit() || byte == b'-') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Body for `getMovieCart.php`.
pub fn cart_form(user_name: &str) -> FormFields {
    vec![("userName", user_name.to_string())]
}

/// Body for `deleteMovie.php`.
pub fn remove_cart_line_form(cart_id: CartLineId, user_name: &str) -> FormFields {
    vec![
        ("cartId", cart_id.to_string()),
        ("userName", user_name.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use crate::models::MovieId;

    use super::*;

    fn movie() -> Movie {
        Movie {
            id: MovieId::new(3),
            name: "The Pianist".to_string(),
            image: "thepianist.png".to_string(),
            price: 40,
            category: "Drama".to_string(),
            rating: 8.5,
            year: 2002,
            director: "Roman Polanski".to_string(),
            description: "A Polish Jewish musician & survivor.".to_string(),
        }
    }

    #[test]
    fn add_to_cart_form_carts_every_movie_field() {
        let fields = add_to_cart_form(&movie(), 2, "malis_movie");

        let keys: Vec<&str> = fields.iter().map(|(key, _)| *key).collect();

        assert_eq!(
            keys,
            vec![
                "name",
                "image",
                "price",
                "category",
                "rating",
                "year",
                "director",
                "description",
                "orderAmount",
                "userName",
            ]
        );
        assert!(fields.contains(&("rating", "8.5".to_string())));
        assert!(fields.contains(&("orderAmount", "2".to_string())));
    }

    #[test]
    fn whole_ratings_keep_their_decimal_point() {
        let whole = Movie {
            rating: 8.0,
            ..movie()
        };

        let fields = add_to_cart_form(&whole, 1, "malis_movie");

        assert!(fields.contains(&("rating", "8.0".to_string())));
        assert_eq!(format_rating(10.0), "10.0");
        assert_eq!(format_rating(7.25), "7.25");
    }

    #[test]
    fn remove_form_uses_raw_line_id() {
        let fields = remove_cart_line_form(CartLineId::new(981), "malis_movie");

        assert_eq!(
            fields,
            vec![
                ("cartId", "981".to_string()),
                ("userName", "malis_movie".to_string()),
            ]
        );
    }
}
