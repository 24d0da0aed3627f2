//! Authentication error types.

use thiserror::Error;

use elanicia_core::EmailError;

use crate::storage::StorageError;

/// Errors that can occur during authentication operations.
///
/// Display strings for client-facing variants are the exact messages the
/// API returns.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email failed normalization.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Wrong password or unknown email - deliberately the same error, so
    /// responses cannot be used to probe which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The email is already registered.
    #[error("User with this email already exists")]
    UserAlreadyExists,

    /// Password failed the signup policy.
    #[error("{0}")]
    WeakPassword(String),

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,

    /// Storage backend error.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
