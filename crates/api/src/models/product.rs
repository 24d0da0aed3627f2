//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// `id` is the stable business key (e.g. `royal_timepieces_1`), distinct
/// from any storage-internal identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable business key used by the product lookup endpoint.
    pub id: String,
    pub name: String,
    /// Merchandising category, e.g. `royal_timepieces`.
    pub category: String,
    /// Product kind, e.g. `watch` or `jewelry`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Price in minor currency units.
    pub price: i64,
    /// ISO 4217 currency code, e.g. `AED`.
    pub currency: String,
    pub description: String,
    /// Image path or URL.
    pub image: String,
    /// Display label, e.g. `Limited Edition`.
    pub badge: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

const fn default_in_stock() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type() {
        let product = Product {
            id: "best_sellers_1".to_owned(),
            name: "Classic Steel Master".to_owned(),
            category: "best_sellers".to_owned(),
            kind: "watch".to_owned(),
            price: 35_999,
            currency: "AED".to_owned(),
            description: String::new(),
            image: String::new(),
            badge: String::new(),
            in_stock: true,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("watch"));
        assert!(value.get("kind").is_none());
    }
}
