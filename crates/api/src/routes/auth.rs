//! Signup and login handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::models::UserSummary;
use crate::services::AuthService;
use crate::state::AppState;

/// Request body for `POST /api/signup`.
///
/// Every field is optional at the serde level so that missing fields
/// surface as the validation error, not as a parse failure.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response from a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Create a user account.
///
/// POST /api/signup
///
/// # Errors
///
/// Returns 400 for malformed JSON, missing fields, a too-short password,
/// or a duplicate email; 500 for storage failures.
pub async fn signup(
    State(state): State<AppState>,
    body: std::result::Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>)> {
    let Json(req) = body.map_err(|_| ApiError::MalformedJson)?;

    let name = req.name.as_deref().unwrap_or_default().trim();
    let email = req.email.as_deref().unwrap_or_default().trim();
    let password = req.password.as_deref().unwrap_or_default();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation("All fields are required".to_owned()));
    }

    let auth = AuthService::new(state.storage(), state.hasher());
    let user = auth.register(name, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".to_owned(),
            user: user.summary(),
        }),
    ))
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// The logged-in identity, with the login timestamp.
#[derive(Debug, Serialize)]
pub struct LoginUser {
    #[serde(flatten)]
    pub user: UserSummary,
    pub login_time: DateTime<Utc>,
}

/// Response from a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: LoginUser,
}

/// Login with email and password.
///
/// POST /api/login
///
/// # Errors
///
/// Returns 401 for an unknown email and a wrong password alike; 400 for
/// malformed JSON or missing fields.
pub async fn login(
    State(state): State<AppState>,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(req) = body.map_err(|_| ApiError::MalformedJson)?;

    let email = req.email.as_deref().unwrap_or_default().trim();
    let password = req.password.as_deref().unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_owned(),
        ));
    }

    let auth = AuthService::new(state.storage(), state.hasher());
    let user = auth.login(email, password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_owned(),
        user: LoginUser {
            user: user.summary(),
            login_time: Utc::now(),
        },
    }))
}
