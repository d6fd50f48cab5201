use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    repository::ProductRepository,
};

pub struct SqliteProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl SqliteProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn insert(&self, input: ProductInput) -> ProductResult<Product> {
        // Convert ProductInput to ActiveModel; the store assigns the id
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        // Fetch existing product first so a missing id surfaces as NotFound
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?
            .ok_or(ProductError::NotFound(id))?;

        // Full replace of the mutable fields
        let active_model = entity::ActiveModel {
            id: Set(model.id),
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            stock: Set(input.stock),
            category_id: Set(input.category_id),
        };

        let updated_model = self
            .base
            .update(active_model)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn category_exists(&self, category_id: i32) -> ProductResult<bool> {
        let exists = domain_categories::entity::Entity::find_by_id(category_id)
            .one(self.base.db())
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?
            .is_some();

        Ok(exists)
    }
}
