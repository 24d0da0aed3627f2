//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults match a local development
//! setup with MongoDB on its standard port.
//!
//! - `ELANICIA_HOST` - Bind address (default: 127.0.0.1)
//! - `ELANICIA_PORT` - Listen port (default: 8001)
//! - `MONGODB_URL` - MongoDB connection string (default:
//!   mongodb://localhost:27017). Set to an empty string to skip the
//!   startup probe and go straight to file storage.
//! - `ELANICIA_DATABASE` - MongoDB database name (default: elanicia_db)
//! - `ELANICIA_DATA_DIR` - Directory for the file backend's
//!   `users.json`/`products.json` (default: current directory)
//! - `ELANICIA_LEGACY_HASHING` - Opt into the legacy SHA-256 password
//!   digest for new hashes (default: false)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// MongoDB connection URL (may embed credentials); `None` disables the
    /// document backend entirely.
    pub mongodb_url: Option<SecretString>,
    /// MongoDB database name.
    pub mongodb_database: String,
    /// Data directory for the file backend.
    pub data_dir: PathBuf,
    /// Produce legacy SHA-256 digests instead of Argon2 hashes.
    pub legacy_hashing: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ELANICIA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ELANICIA_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("ELANICIA_PORT", "8001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ELANICIA_PORT".to_owned(), e.to_string()))?;

        let mongodb_url = match get_env_or_default("MONGODB_URL", DEFAULT_MONGODB_URL) {
            url if url.is_empty() => None,
            url => Some(SecretString::from(url)),
        };
        let mongodb_database = get_env_or_default("ELANICIA_DATABASE", "elanicia_db");

        let data_dir = PathBuf::from(get_env_or_default("ELANICIA_DATA_DIR", "."));

        let legacy_hashing = parse_bool(
            "ELANICIA_LEGACY_HASHING",
            &get_env_or_default("ELANICIA_LEGACY_HASHING", "false"),
        )?;

        Ok(Self {
            host,
            port,
            mongodb_url,
            mongodb_database,
            data_dir,
            legacy_hashing,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a boolean environment variable.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("K", "true").unwrap());
        assert!(parse_bool("K", "1").unwrap());
        assert!(!parse_bool("K", "false").unwrap());
        assert!(!parse_bool("K", "0").unwrap());
        assert!(parse_bool("K", "maybe").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8001,
            mongodb_url: None,
            mongodb_database: "elanicia_db".to_owned(),
            data_dir: PathBuf::from("."),
            legacy_hashing: false,
        };

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8001");
    }

    #[test]
    fn test_unset_var_falls_back_to_default() {
        assert_eq!(
            get_env_or_default("ELANICIA_TEST_VAR_THAT_IS_NEVER_SET", "fallback"),
            "fallback"
        );
    }
}
