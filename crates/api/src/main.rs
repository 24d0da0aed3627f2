//! Elanicia Storefront API - e-commerce backend.
//!
//! This binary serves the storefront JSON API on port 8001.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response
//! - MongoDB for persistence when reachable at startup
//! - Flat-file JSON storage as the automatic fallback
//! - Argon2 password hashing (legacy SHA-256 behind an opt-in flag)
//!
//! The storage backend is probed and selected exactly once, before the
//! listener starts; request handlers never re-probe the database.

#![cfg_attr(not(test), forbid(unsafe_code))]

use elanicia_api::config::ApiConfig;
use elanicia_api::services::Hasher;
use elanicia_api::state::AppState;
use elanicia_api::storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "elanicia_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Select the storage backend: probe MongoDB once, fall back to files
    let storage = storage::connect(&config)
        .await
        .expect("Failed to initialize storage");
    tracing::info!(backend = %storage.kind(), "Storage backend selected");

    // Seed the catalog on first run
    storage::seed_catalog(&storage)
        .await
        .expect("Failed to seed product catalog");

    // Build application state
    let hasher = Hasher::from_config(&config);
    let state = AppState::new(config.clone(), storage, hasher);

    let app = elanicia_api::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
