//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! POST /api/signup         - Create user account
//! POST /api/login          - User login
//! GET  /api/users          - List users (passwords stripped)
//! GET  /api/products       - List all products
//! GET  /api/products/{id}  - Get single product by business key
//! POST /api/products       - Create product
//! POST /api/orders         - Create order
//! GET  /api/health         - Health check (reports active backend)
//! ```
//!
//! Anything else is 404 - including a known path with the wrong method;
//! this API does not distinguish 405 from 404.

pub mod auth;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .route("/api/users", get(users::list))
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/products/{id}", get(products::show))
        .route("/api/orders", post(orders::create))
        .route("/api/health", get(health::health))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// Shared 404 for unknown routes and method mismatches alike.
async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_owned())
}
