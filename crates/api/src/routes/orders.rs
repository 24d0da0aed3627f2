//! Order creation handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use elanicia_core::{OrderStatus, RecordId};

use crate::error::{ApiError, Result};
use crate::models::Order;
use crate::state::AppState;

/// Request body for `POST /api/orders`.
///
/// Every field defaults: no items, zero total, AED. The user reference is
/// weak and never checked against the user store.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub total_amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "AED".to_owned()
}

/// Response from a successful order creation.
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub message: String,
    pub order: Order,
}

/// Create an order.
///
/// POST /api/orders
///
/// Orders are always created `pending`; no transition logic exists.
///
/// # Errors
///
/// Returns 400 for malformed JSON; 500 for storage failures.
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateOrderResponse>)> {
    let Json(req) = body.map_err(|_| ApiError::MalformedJson)?;

    let order = Order {
        id: None,
        user_id: req.user_id,
        items: req.items,
        total_amount: req.total_amount,
        currency: req.currency,
        status: OrderStatus::Pending,
        created_at: Utc::now(),
    };

    let order = state.storage().insert_order(order).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order created successfully".to_owned(),
            order,
        }),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_takes_all_defaults() {
        let req: CreateOrderRequest = serde_json::from_str("{}").unwrap();

        assert!(req.user_id.is_none());
        assert!(req.items.is_empty());
        assert_eq!(req.total_amount, 0);
        assert_eq!(req.currency, "AED");
    }

    #[test]
    fn test_user_id_accepts_both_id_forms() {
        let seq: CreateOrderRequest = serde_json::from_str(r#"{"user_id": 7}"#).unwrap();
        assert_eq!(seq.user_id, Some(RecordId::Seq(7)));

        let key: CreateOrderRequest =
            serde_json::from_str(r#"{"user_id": "68a1f0c2d4e5f60718293a4b"}"#).unwrap();
        assert_eq!(key.user_id, Some(RecordId::key("68a1f0c2d4e5f60718293a4b")));
    }
}
