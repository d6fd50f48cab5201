use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product with validation and category existence check
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;

        if !self.repository.category_exists(input.category_id).await? {
            return Err(ProductError::CategoryNotFound(input.category_id));
        }

        self.repository.insert(input).await
    }

    /// Replace all mutable fields of an existing product
    ///
    /// Updates run the same field rules as creation; a payload that could
    /// not create a product cannot replace one either.
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;

        if !self.repository.category_exists(input.category_id).await? {
            return Err(ProductError::CategoryNotFound(input.category_id));
        }

        self.repository.update(id, input).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
