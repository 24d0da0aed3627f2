//! MongoDB-backed storage.
//!
//! Wraps a [`mongodb::Database`] with `users`, `products`, and `orders`
//! collections. Only the generic find/insert contract is used - no
//! aggregation, no transactions, no server-side constraints.

use std::time::Duration;

use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use elanicia_core::{Email, RecordId};

use super::StorageError;
use crate::models::{Order, Product, User};

/// Bounded handshake applied to the startup connectivity probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// MongoDB document store.
pub struct DocumentStore {
    db: Database,
}

/// User record as stored in the `users` collection.
///
/// MongoDB owns the `_id`; domain ids are its hex form.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: Email,
    password: String,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl UserDocument {
    fn from_user(user: User) -> Self {
        Self {
            id: None,
            name: user.name,
            email: user.email,
            password: user.password,
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }

    fn into_user(self) -> User {
        User {
            id: self.id.map(|oid| RecordId::Key(oid.to_hex())),
            name: self.name,
            email: self.email,
            password: self.password,
            created_at: self.created_at,
            is_active: self.is_active,
        }
    }
}

impl DocumentStore {
    /// Connect and probe the server.
    ///
    /// The `ping` command must succeed within [`PROBE_TIMEOUT`]; a failure
    /// here means this variant is never used for the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Database` if the URL is invalid or the probe
    /// fails.
    pub async fn connect(url: &SecretString, database: &str) -> Result<Self, StorageError> {
        let mut options = ClientOptions::parse(url.expose_secret()).await?;
        options.server_selection_timeout = Some(PROBE_TIMEOUT);

        let client = Client::with_options(options)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok(Self {
            db: client.database(database),
        })
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.collection("users")
    }

    fn products(&self) -> Collection<Product> {
        self.db.collection("products")
    }

    fn orders(&self) -> Collection<Order> {
        self.db.collection("orders")
    }

    pub(super) async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<User>, StorageError> {
        let found = self
            .users()
            .find_one(doc! { "email": email.as_str() })
            .await?;
        Ok(found.map(UserDocument::into_user))
    }

    pub(super) async fn insert_user(&self, mut user: User) -> Result<User, StorageError> {
        let result = self
            .users()
            .insert_one(UserDocument::from_user(user.clone()))
            .await?;

        user.id = Some(RecordId::Key(inserted_key(&result.inserted_id)));
        Ok(user)
    }

    pub(super) async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let mut cursor = self.users().find(doc! {}).await?;
        let mut users = Vec::new();
        while cursor.advance().await? {
            users.push(cursor.deserialize_current()?.into_user());
        }
        Ok(users)
    }

    pub(super) async fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        let mut cursor = self.products().find(doc! {}).await?;
        let mut products = Vec::new();
        while cursor.advance().await? {
            products.push(cursor.deserialize_current()?);
        }
        Ok(products)
    }

    pub(super) async fn find_product_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Product>, StorageError> {
        // Business key lookup, not the collection `_id`.
        Ok(self.products().find_one(doc! { "id": id }).await?)
    }

    pub(super) async fn insert_product(&self, product: Product) -> Result<Product, StorageError> {
        self.products().insert_one(&product).await?;
        Ok(product)
    }

    pub(super) async fn insert_order(&self, mut order: Order) -> Result<Order, StorageError> {
        let result = self.orders().insert_one(&order).await?;

        order.id = Some(RecordId::Key(inserted_key(&result.inserted_id)));
        Ok(order)
    }
}

/// The inserted `_id` as a string key (ObjectIds as hex).
fn inserted_key(id: &mongodb::bson::Bson) -> String {
    id.as_object_id()
        .map_or_else(|| id.to_string(), |oid| oid.to_hex())
}
