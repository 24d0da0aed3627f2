//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::Hasher;
use crate::storage::Storage;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the storage backend selected at
/// startup - the selection is never revisited per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    storage: Storage,
    hasher: Hasher,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, storage: Storage, hasher: Hasher) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage,
                hasher,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.inner.storage
    }

    /// Get a reference to the password hasher.
    #[must_use]
    pub fn hasher(&self) -> &Hasher {
        &self.inner.hasher
    }
}
