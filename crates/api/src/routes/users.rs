//! User listing handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::Result;
use crate::models::UserPublic;
use crate::state::AppState;

/// Response for `GET /api/users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserPublic>,
}

/// List all users.
///
/// GET /api/users
///
/// Password hashes are stripped here, before any response is built; the
/// storage layer returns them and nothing past this handler may.
///
/// # Errors
///
/// Returns 500 if the storage backend fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<UsersResponse>> {
    let users = state.storage().list_users().await?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserPublic::from).collect(),
    }))
}
