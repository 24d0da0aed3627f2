//! Elanicia Storefront API library.
//!
//! This crate provides the API server as a library, allowing it to be
//! tested in-process and reused.
//!
//! # Architecture
//!
//! - Axum handlers over a shared [`state::AppState`]
//! - One storage backend selected at startup: MongoDB when reachable,
//!   flat JSON files otherwise ([`storage`])
//! - Argon2 password hashing with an opt-in legacy digest ([`services`])

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;

use axum::Router;
use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the complete application: routes, CORS, request tracing.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for browser storefronts: any origin, the API's methods, and the
/// headers clients actually send. Preflight OPTIONS is answered by this
/// layer with no body.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
