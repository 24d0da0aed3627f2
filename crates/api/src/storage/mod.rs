//! Storage backends for users, products, and orders.
//!
//! The storefront prefers MongoDB but keeps working without it: at startup
//! [`connect`] probes the configured database once, and on failure falls
//! back to flat JSON files. The chosen [`Storage`] variant is constructed
//! exactly once and shared for the life of the process - nothing above this
//! module ever branches on which backend is active, except the health
//! endpoint reporting [`Storage::kind`].
//!
//! # Contracts
//!
//! - Lookups return `Ok(None)` for absent records; absence is not an error.
//! - `insert_user` assigns the backend's native id (sequential integer for
//!   files, generated key for MongoDB) and returns the stored record.
//! - `insert_order` populates an id only when the backend assigns one; the
//!   file backend does not persist orders (there is no orders file).

pub mod document;
pub mod file;
pub mod seed;

pub use document::DocumentStore;
pub use file::FileStore;
pub use seed::seed_catalog;

use elanicia_core::Email;

use crate::config::ApiConfig;
use crate::models::{Order, Product, User};

/// Which backend variant is serving this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// MongoDB document store.
    Mongo,
    /// Flat JSON files.
    File,
}

impl BackendKind {
    /// Stable name reported by the health endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mongo => "mongodb",
            Self::File => "file_storage",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// MongoDB driver error.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Filesystem error from the file backend.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored file could not be parsed, or a record could not be encoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Storage backend, selected once at startup and never switched.
pub enum Storage {
    /// MongoDB-backed store, used only after a successful startup probe.
    Mongo(DocumentStore),
    /// Flat-file store, the fallback when MongoDB is unavailable.
    File(FileStore),
}

impl Storage {
    /// Which variant is active.
    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        match self {
            Self::Mongo(_) => BackendKind::Mongo,
            Self::File(_) => BackendKind::File,
        }
    }

    /// Look up a user by normalized email.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails; an absent user is
    /// `Ok(None)`.
    pub async fn find_user_by_email(&self, email: &Email) -> Result<Option<User>, StorageError> {
        match self {
            Self::Mongo(store) => store.find_user_by_email(email).await,
            Self::File(store) => store.find_user_by_email(email).await,
        }
    }

    /// Insert a user and return it with the backend-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn insert_user(&self, user: User) -> Result<User, StorageError> {
        match self {
            Self::Mongo(store) => store.insert_user(user).await,
            Self::File(store) => store.insert_user(user).await,
        }
    }

    /// All users, password hashes included - callers must strip them
    /// before building a response.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        match self {
            Self::Mongo(store) => store.list_users().await,
            Self::File(store) => store.list_users().await,
        }
    }

    /// The full product catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    pub async fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        match self {
            Self::Mongo(store) => store.list_products().await,
            Self::File(store) => store.list_products().await,
        }
    }

    /// Look up a product by its business key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails; an unknown id is
    /// `Ok(None)`.
    pub async fn find_product_by_id(&self, id: &str) -> Result<Option<Product>, StorageError> {
        match self {
            Self::Mongo(store) => store.find_product_by_id(id).await,
            Self::File(store) => store.find_product_by_id(id).await,
        }
    }

    /// Insert a product into the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn insert_product(&self, product: Product) -> Result<Product, StorageError> {
        match self {
            Self::Mongo(store) => store.insert_product(product).await,
            Self::File(store) => store.insert_product(product).await,
        }
    }

    /// Insert an order, returning it with an id when the backend assigns
    /// one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn insert_order(&self, order: Order) -> Result<Order, StorageError> {
        match self {
            Self::Mongo(store) => store.insert_order(order).await,
            Self::File(store) => store.insert_order(order).await,
        }
    }
}

/// Select and construct the storage backend.
///
/// Probes MongoDB once with a bounded handshake. On probe failure (or when
/// no MongoDB URL is configured) the process falls back to the file backend
/// and never retries the database.
///
/// # Errors
///
/// Returns `StorageError` only if the fallback file store itself cannot be
/// opened; a MongoDB failure is not an error, it is the fallback trigger.
pub async fn connect(config: &ApiConfig) -> Result<Storage, StorageError> {
    if let Some(url) = config.mongodb_url.as_ref() {
        match DocumentStore::connect(url, &config.mongodb_database).await {
            Ok(store) => {
                tracing::info!(database = %config.mongodb_database, "Connected to MongoDB");
                return Ok(Storage::Mongo(store));
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "MongoDB connection failed, falling back to file storage"
                );
            }
        }
    } else {
        tracing::info!("No MongoDB URL configured, using file storage");
    }

    let store = FileStore::open(&config.data_dir).await?;
    Ok(Storage::File(store))
}
