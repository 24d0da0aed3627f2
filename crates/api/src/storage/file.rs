//! Flat-file storage.
//!
//! The fallback backend: `users.json` and `products.json` in a data
//! directory, each a pretty-printed JSON array. Every read loads and parses
//! the whole file; every write serializes the whole list and overwrites the
//! file. Writes are serialized behind a mutex, which makes read-modify-write
//! safe within this process only - a second writing process can still race,
//! and the last writer wins.
//!
//! Orders are not persisted in this mode; there is no orders file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use elanicia_core::{Email, RecordId};

use super::StorageError;
use crate::models::{Order, Product, User};

const USERS_FILE: &str = "users.json";
const PRODUCTS_FILE: &str = "products.json";

/// Flat-file store rooted at a data directory.
pub struct FileStore {
    users_path: PathBuf,
    products_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store in `data_dir`, creating the directory if needed.
    ///
    /// Missing data files are treated as empty lists; they are created on
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub async fn open(data_dir: &Path) -> Result<Self, StorageError> {
        tokio::fs::create_dir_all(data_dir).await?;

        Ok(Self {
            users_path: data_dir.join(USERS_FILE),
            products_path: data_dir.join(PRODUCTS_FILE),
            write_lock: Mutex::new(()),
        })
    }

    async fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    pub(super) async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<User>, StorageError> {
        let users: Vec<User> = Self::load(&self.users_path).await?;
        Ok(users.into_iter().find(|user| &user.email == email))
    }

    pub(super) async fn insert_user(&self, mut user: User) -> Result<User, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut users: Vec<User> = Self::load(&self.users_path).await?;
        #[allow(clippy::cast_possible_wrap)] // list length fits in i64
        let next_id = users.len() as i64 + 1;

        user.id = Some(RecordId::Seq(next_id));
        users.push(user.clone());

        Self::save(&self.users_path, &users).await?;
        Ok(user)
    }

    pub(super) async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        Self::load(&self.users_path).await
    }

    pub(super) async fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        Self::load(&self.products_path).await
    }

    pub(super) async fn find_product_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Product>, StorageError> {
        let products: Vec<Product> = Self::load(&self.products_path).await?;
        Ok(products.into_iter().find(|product| product.id == id))
    }

    pub(super) async fn insert_product(&self, product: Product) -> Result<Product, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut products: Vec<Product> = Self::load(&self.products_path).await?;
        products.push(product.clone());

        Self::save(&self.products_path, &products).await?;
        Ok(product)
    }

    #[allow(clippy::unused_async, clippy::unused_self)]
    pub(super) async fn insert_order(&self, order: Order) -> Result<Order, StorageError> {
        // No orders file; the order is acknowledged but not stored.
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use elanicia_core::OrderStatus;
    use serde_json::json;

    use super::*;

    fn sample_user(name: &str, email: &str) -> User {
        User {
            id: None,
            name: name.to_owned(),
            email: Email::parse(email).unwrap(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
            created_at: Utc::now(),
            is_active: true,
        }
    }

    fn sample_product(id: &str) -> Product {
        Product {
            id: id.to_owned(),
            name: "Classic Steel Master".to_owned(),
            category: "best_sellers".to_owned(),
            kind: "watch".to_owned(),
            price: 35_999,
            currency: "AED".to_owned(),
            description: "Stainless steel case, automatic movement".to_owned(),
            image: "images/classic-steel-watch.jpg".to_owned(),
            badge: "Best Seller".to_owned(),
            in_stock: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_missing_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        assert!(store.list_users().await.unwrap().is_empty());
        assert!(store.list_products().await.unwrap().is_empty());
        assert!(
            store
                .find_user_by_email(&Email::parse("a@b.c").unwrap())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_insert_user_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        let first = store
            .insert_user(sample_user("Amira", "amira@example.com"))
            .await
            .unwrap();
        let second = store
            .insert_user(sample_user("Bilal", "bilal@example.com"))
            .await
            .unwrap();

        assert_eq!(first.id, Some(RecordId::Seq(1)));
        assert_eq!(second.id, Some(RecordId::Seq(2)));
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store
            .insert_user(sample_user("Amira", "amira@example.com"))
            .await
            .unwrap();

        let found = store
            .find_user_by_email(&Email::parse("amira@example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(found.map(|u| u.name), Some("Amira".to_owned()));

        let missing = store
            .find_user_by_email(&Email::parse("nobody@example.com").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_users_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::open(dir.path()).await.unwrap();
        store
            .insert_user(sample_user("Amira", "amira@example.com"))
            .await
            .unwrap();
        store
            .insert_user(sample_user("Bilal", "bilal@example.com"))
            .await
            .unwrap();

        // Simulated restart: a fresh store over the same directory.
        let reopened = FileStore::open(dir.path()).await.unwrap();
        let mut emails: Vec<String> = reopened
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|user| user.email.into_inner())
            .collect();
        emails.sort();

        assert_eq!(emails, vec!["amira@example.com", "bilal@example.com"]);
    }

    #[tokio::test]
    async fn test_users_file_is_a_pretty_printed_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store
            .insert_user(sample_user("Amira", "amira@example.com"))
            .await
            .unwrap();

        let raw = tokio::fs::read_to_string(dir.path().join(USERS_FILE))
            .await
            .unwrap();
        assert!(raw.trim_start().starts_with('['));
        assert!(raw.contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_products_roundtrip_and_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store.insert_product(sample_product("best_sellers_1")).await.unwrap();

        let found = store.find_product_by_id("best_sellers_1").await.unwrap();
        assert_eq!(found.map(|p| p.price), Some(35_999));

        assert!(store.find_product_by_id("no_such_id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_order_is_an_unpersisted_echo() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        let order = Order {
            id: None,
            user_id: Some(RecordId::Seq(1)),
            items: vec![json!({"id": "x", "quantity": 2, "price": 100})],
            total_amount: 200,
            currency: "AED".to_owned(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let stored = store.insert_order(order.clone()).await.unwrap();
        assert!(stored.id.is_none());
        assert_eq!(stored.total_amount, order.total_amount);
    }
}
