//! Health check handler.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Response for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Active storage backend: `mongodb` or `file_storage`.
    pub database: &'static str,
    pub timestamp: String,
}

/// Report service health and which storage backend is active.
///
/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        database: state.storage().kind().as_str(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
