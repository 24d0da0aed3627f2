//! Password hashing.
//!
//! Two modes: Argon2id (the default) and a legacy unsalted SHA-256 digest
//! kept only for records written before the hashing migration. The legacy
//! mode must be opted into explicitly; verification is format-detecting, so
//! legacy records stay loginable under the default mode.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sha2::{Digest, Sha256};

use super::AuthError;
use crate::config::ApiConfig;

/// Password hashing mode, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hasher {
    /// Argon2id with a random per-hash salt, PHC string output.
    Argon2,
    /// Unsalted SHA-256 hex digest. Weak; opt-in only.
    LegacySha256,
}

impl Hasher {
    /// Select the hashing mode from configuration.
    ///
    /// Defaults to Argon2; the legacy digest must be enabled explicitly
    /// and logs a warning when it is.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        if config.legacy_hashing {
            tracing::warn!("Legacy SHA-256 password hashing enabled; new hashes will be unsalted");
            Self::LegacySha256
        } else {
            Self::Argon2
        }
    }

    /// Hash a plaintext password.
    ///
    /// Under Argon2 two hashes of the same plaintext differ (random salt)
    /// and both verify.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        match self {
            Self::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|_| AuthError::PasswordHash)
            }
            Self::LegacySha256 => Ok(sha256_hex(password)),
        }
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// The stored format decides the algorithm: PHC strings verify with
    /// Argon2, anything else is compared as a legacy digest. The configured
    /// mode only controls how *new* hashes are produced.
    #[must_use]
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        if stored.starts_with("$argon2") {
            PasswordHash::new(stored).is_ok_and(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
        } else {
            sha256_hex(password) == stored
        }
    }
}

/// Hex-encoded SHA-256 digest, the legacy storage format.
fn sha256_hex(password: &str) -> String {
    use std::fmt::Write as _;

    let digest = Sha256::digest(password.as_bytes());
    digest.iter().fold(String::with_capacity(64), |mut hex, byte| {
        let _ = write!(hex, "{byte:02x}");
        hex
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_hashes_are_salted() {
        let hasher = Hasher::Argon2;

        let first = hasher.hash("opensesame").unwrap();
        let second = hasher.hash("opensesame").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("opensesame", &first));
        assert!(hasher.verify("opensesame", &second));
    }

    #[test]
    fn test_argon2_rejects_wrong_password() {
        let hasher = Hasher::Argon2;
        let hash = hasher.hash("opensesame").unwrap();

        assert!(!hasher.verify("wrong-password", &hash));
    }

    #[test]
    fn test_legacy_digest_is_deterministic() {
        let hasher = Hasher::LegacySha256;

        let first = hasher.hash("opensesame").unwrap();
        let second = hasher.hash("opensesame").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(hasher.verify("opensesame", &first));
    }

    #[test]
    fn test_legacy_records_verify_under_default_mode() {
        let legacy_hash = Hasher::LegacySha256.hash("opensesame").unwrap();

        assert!(Hasher::Argon2.verify("opensesame", &legacy_hash));
        assert!(!Hasher::Argon2.verify("wrong-password", &legacy_hash));
    }

    #[test]
    fn test_garbage_stored_hash_never_verifies() {
        assert!(!Hasher::Argon2.verify("anything", "$argon2id$not-a-real-hash"));
        assert!(!Hasher::Argon2.verify("anything", "not-a-digest"));
    }
}
