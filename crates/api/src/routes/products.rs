//! Product catalog handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Response for `GET /api/products`.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// List the full catalog.
///
/// GET /api/products
///
/// # Errors
///
/// Returns 500 if the storage backend fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<ProductsResponse>> {
    let products = state.storage().list_products().await?;
    Ok(Json(ProductsResponse { products }))
}

/// Response for `GET /api/products/{id}`.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}

/// Get a single product by business key.
///
/// GET /api/products/{id}
///
/// The trailing path segment is taken verbatim as the id - no decoding,
/// no validation.
///
/// # Errors
///
/// Returns 404 for an unknown id; 500 if the storage backend fails.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = state
        .storage()
        .find_product_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_owned()))?;

    Ok(Json(ProductResponse { product }))
}

/// Request body for `POST /api/products`.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// Response from a successful product creation.
#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub message: String,
    pub product: Product,
}

/// Add a product to the catalog.
///
/// POST /api/products
///
/// The catalog is normally seeded once; this endpoint exists for the
/// occasional manual addition.
///
/// # Errors
///
/// Returns 400 for malformed JSON or a missing id/name; 500 for storage
/// failures.
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateProductResponse>)> {
    let Json(req) = body.map_err(|_| ApiError::MalformedJson)?;

    let id = req.id.as_deref().unwrap_or_default().trim().to_owned();
    let name = req.name.as_deref().unwrap_or_default().trim().to_owned();

    if id.is_empty() || name.is_empty() {
        return Err(ApiError::Validation(
            "Product id and name are required".to_owned(),
        ));
    }

    let product = Product {
        id,
        name,
        category: req.category.unwrap_or_default(),
        kind: req.kind.unwrap_or_default(),
        price: req.price.unwrap_or_default(),
        currency: req.currency.unwrap_or_else(|| "AED".to_owned()),
        description: req.description.unwrap_or_default(),
        image: req.image.unwrap_or_default(),
        badge: req.badge.unwrap_or_default(),
        in_stock: req.in_stock.unwrap_or(true),
        created_at: Utc::now(),
    };

    let product = state.storage().insert_product(product).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "Product created successfully".to_owned(),
            product,
        }),
    ))
}
