use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products. The category
/// existence check lives here too: creating a product is the only consumer,
/// and keeping it on this trait saves the service a second repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Insert a new product; the store assigns the identity
    async fn insert(&self, input: ProductInput) -> ProductResult<Product>;

    /// Replace all mutable fields of an existing product
    ///
    /// Fails with `ProductError::NotFound` when no product with the given
    /// id exists.
    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Check whether a category with the given id exists
    async fn category_exists(&self, category_id: i32) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    categories: Arc<RwLock<HashSet<i32>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            categories: Arc::new(RwLock::new(HashSet::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    /// Register a category id so `category_exists` can resolve it
    pub async fn add_category(&self, category_id: i32) {
        let mut categories = self.categories.write().await;
        categories.insert(category_id);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by_key(|p| p.id);

        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn insert(&self, input: ProductInput) -> ProductResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category_id: input.category_id,
        };

        let mut products = self.products.write().await;
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.name = input.name;
        product.description = input.description;
        product.price = input.price;
        product.stock = input.stock;
        product.category_id = input.category_id;
        let updated = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn category_exists(&self, category_id: i32) -> ProductResult<bool> {
        let categories = self.categories.read().await;
        Ok(categories.contains(&category_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop_input() -> ProductInput {
        ProductInput {
            name: "Laptop".to_string(),
            description: "High-end laptop".to_string(),
            price: 1500.0,
            stock: 10,
            category_id: 1,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.insert(laptop_input()).await.unwrap();
        let second = repo.insert(laptop_input()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_insert_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.insert(laptop_input()).await.unwrap();

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryProductRepository::new();
        let product = repo.insert(laptop_input()).await.unwrap();

        let replacement = ProductInput {
            name: "Updated Product".to_string(),
            description: "Refreshed".to_string(),
            price: 2000.0,
            stock: 15,
            category_id: 2,
        };
        let updated = repo.update(product.id, replacement).await.unwrap();

        assert_eq!(updated.name, "Updated Product");
        assert_eq!(updated.price, 2000.0);
        assert_eq!(updated.stock, 15);
        assert_eq!(updated.category_id, 2);
    }

    #[tokio::test]
    async fn test_update_missing_product_fails() {
        let repo = InMemoryProductRepository::new();

        let result = repo.update(99, laptop_input()).await;
        assert!(matches!(result, Err(ProductError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryProductRepository::new();
        let product = repo.insert(laptop_input()).await.unwrap();

        assert!(repo.delete(product.id).await.unwrap());
        assert!(!repo.delete(product.id).await.unwrap());
        assert!(repo.get_by_id(product.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_category_exists() {
        let repo = InMemoryProductRepository::new();
        repo.add_category(1).await;

        assert!(repo.category_exists(1).await.unwrap());
        assert!(!repo.category_exists(999).await.unwrap());
    }
}
