//! Catalog seeding.
//!
//! The catalog is normally populated once; on startup the selected backend
//! is seeded with the sample products when it holds no products at all.

use chrono::Utc;

use super::{Storage, StorageError};
use crate::models::Product;

/// Seed the product catalog if it is empty.
///
/// Idempotent: any existing product skips seeding entirely.
///
/// # Errors
///
/// Returns `StorageError` if the catalog cannot be read or written.
pub async fn seed_catalog(storage: &Storage) -> Result<(), StorageError> {
    if !storage.list_products().await?.is_empty() {
        return Ok(());
    }

    for product in sample_products() {
        storage.insert_product(product).await?;
    }
    tracing::info!(backend = %storage.kind(), "Sample products seeded");

    Ok(())
}

/// The launch catalog: three luxury pieces priced in AED.
fn sample_products() -> Vec<Product> {
    let now = Utc::now();

    vec![
        Product {
            id: "royal_timepieces_1".to_owned(),
            name: "Diamond Elite Necklace".to_owned(),
            category: "royal_timepieces".to_owned(),
            kind: "jewelry".to_owned(),
            price: 125_999,
            currency: "AED".to_owned(),
            description: "18k white gold, premium diamonds, luxury design".to_owned(),
            image: "images/diamond-necklace.jpg".to_owned(),
            badge: "Premium".to_owned(),
            in_stock: true,
            created_at: now,
        },
        Product {
            id: "royal_timepieces_2".to_owned(),
            name: "Platinum Heritage".to_owned(),
            category: "royal_timepieces".to_owned(),
            kind: "watch".to_owned(),
            price: 195_999,
            currency: "AED".to_owned(),
            description: "Platinum case, sapphire crystal, limited to 100 pieces".to_owned(),
            image: "images/platinum-watch.jpg".to_owned(),
            badge: "Limited Edition".to_owned(),
            in_stock: true,
            created_at: now,
        },
        Product {
            id: "best_sellers_1".to_owned(),
            name: "Classic Steel Master".to_owned(),
            category: "best_sellers".to_owned(),
            kind: "watch".to_owned(),
            price: 35_999,
            currency: "AED".to_owned(),
            description: "Stainless steel case, automatic movement, water resistant".to_owned(),
            image: "images/classic-steel-watch.jpg".to_owned(),
            badge: "Best Seller".to_owned(),
            in_stock: true,
            created_at: now,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::FileStore;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::File(FileStore::open(dir.path()).await.unwrap());

        seed_catalog(&storage).await.unwrap();
        let first = storage.list_products().await.unwrap();
        assert_eq!(first.len(), 3);

        seed_catalog(&storage).await.unwrap();
        let second = storage.list_products().await.unwrap();
        assert_eq!(second.len(), 3);
    }

    #[tokio::test]
    async fn test_seeded_ids_are_stable() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::File(FileStore::open(dir.path()).await.unwrap());

        seed_catalog(&storage).await.unwrap();

        let product = storage
            .find_product_by_id("royal_timepieces_1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.name, "Diamond Elite Necklace");
        assert_eq!(product.currency, "AED");
    }
}
