//! Authentication service.
//!
//! Registration and login over whichever storage backend is active.

mod error;
mod hasher;

pub use error::AuthError;
pub use hasher::Hasher;

use chrono::Utc;

use elanicia_core::Email;

use crate::models::User;
use crate::storage::Storage;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Authentication service.
///
/// Borrows the process-wide storage backend and hasher; construction is
/// free, so handlers create one per request.
pub struct AuthService<'a> {
    storage: &'a Storage,
    hasher: &'a Hasher,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(storage: &'a Storage, hasher: &'a Hasher) -> Self {
        Self { storage, hasher }
    }

    /// Register a new user.
    ///
    /// The duplicate-email check and the insert are two separate storage
    /// calls with no atomic guarantee: concurrent signups for the same
    /// email can both pass the check. Accepted hazard - neither backend
    /// carries a unique constraint.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email fails normalization.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::UserAlreadyExists` if the email is registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        if self.storage.find_user_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password = self.hasher.hash(password)?;
        let user = User {
            id: None,
            name: name.to_owned(),
            email,
            password,
            created_at: Utc::now(),
            is_active: true,
        };

        Ok(self.storage.insert_user(user).await?)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email and for
    /// a wrong password alike.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let Some(user) = self.storage.find_user_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &user.password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}

/// Validate password meets the signup policy.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::FileStore;

    async fn file_storage() -> (Storage, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::File(FileStore::open(dir.path()).await.unwrap());
        (storage, dir)
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (storage, _dir) = file_storage().await;
        let hasher = Hasher::Argon2;
        let auth = AuthService::new(&storage, &hasher);

        let registered = auth
            .register("Amira", "Amira@Example.com", "opensesame")
            .await
            .unwrap();
        assert!(registered.id.is_some());
        assert_eq!(registered.email.as_str(), "amira@example.com");

        let logged_in = auth.login("amira@example.com", "opensesame").await.unwrap();
        assert_eq!(logged_in.id, registered.id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (storage, _dir) = file_storage().await;
        let hasher = Hasher::Argon2;
        let auth = AuthService::new(&storage, &hasher);

        auth.register("Amira", "amira@example.com", "opensesame")
            .await
            .unwrap();

        let wrong_password = auth.login("amira@example.com", "not-it").await;
        assert!(matches!(wrong_password, Err(AuthError::InvalidCredentials)));

        let unknown_email = auth.login("nobody@example.com", "opensesame").await;
        assert!(matches!(unknown_email, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_case_insensitively() {
        let (storage, _dir) = file_storage().await;
        let hasher = Hasher::Argon2;
        let auth = AuthService::new(&storage, &hasher);

        auth.register("Amira", "amira@example.com", "opensesame")
            .await
            .unwrap();

        let duplicate = auth
            .register("Imposter", "AMIRA@EXAMPLE.COM", "different-pw")
            .await;
        assert!(matches!(duplicate, Err(AuthError::UserAlreadyExists)));

        assert_eq!(storage.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let (storage, _dir) = file_storage().await;
        let hasher = Hasher::Argon2;
        let auth = AuthService::new(&storage, &hasher);

        let result = auth.register("Amira", "amira@example.com", "tiny").await;
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
        assert!(storage.list_users().await.unwrap().is_empty());
    }
}
