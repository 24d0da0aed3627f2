//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use elanicia_core::{OrderStatus, RecordId};

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Populated only when the backend assigns an id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Weak reference to the ordering user; never validated for existence.
    pub user_id: Option<RecordId>,
    /// Line items, opaque beyond their JSON shape (id, quantity, price).
    pub items: Vec<serde_json::Value>,
    /// Order total in minor currency units.
    pub total_amount: i64,
    pub currency: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unassigned_id_is_omitted_from_json() {
        let order = Order {
            id: None,
            user_id: Some(RecordId::Seq(4)),
            items: vec![json!({"id": "x", "quantity": 2, "price": 100})],
            total_amount: 200,
            currency: "AED".to_owned(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value.get("status").and_then(|v| v.as_str()), Some("pending"));
    }
}
