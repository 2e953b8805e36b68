//! Product domain model.
//!
//! A [`Product`] is one deal returned by the search endpoint. Products are
//! created fresh for every search response and never merged with a previous
//! batch.

use serde::{Deserialize, Deserializer, Serialize};

/// A single deal offered by a store.
///
/// # Fields
///
/// - `title`: Product name as listed by the store
/// - `store`: Store offering the deal
/// - `price`: Currency-less price magnitude
/// - `rating`: Customer rating, expected in `[0, 5]` (not validated here)
/// - `image`: Image URI
/// - `link`: Deal page URI
///
/// Numeric fields accept either JSON numbers or numeric strings such as
/// `"4.3"`. Anything else fails deserialization, which the endpoint client
/// reports as a malformed response.
///
/// # Examples
///
/// ```
/// use wealthwagon::Product;
///
/// let product: Product = serde_json::from_str(r#"{
///     "title": "Laptop 14", "store": "Amazon", "price": 54999,
///     "rating": "4.3", "image": "https://img/1.png", "link": "https://shop/1"
/// }"#).unwrap();
///
/// assert_eq!(product.rating, 4.3);
/// assert_eq!(product.price, 54999.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub store: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub price: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub rating: f64,
    pub image: String,
    pub link: String,
}

impl Product {
    /// Formats the price the way the deal cards show it (`₹54999`, `₹12.5`).
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("₹{}", self.price)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {s:?}"))),
    }
}
