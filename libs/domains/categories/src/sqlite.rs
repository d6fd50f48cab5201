use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{CategoryError, CategoryResult},
    models::Category,
    repository::CategoryRepository,
};

pub struct SqliteCategoryRepository {
    base: BaseRepository<entity::Entity>,
}

impl SqliteCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn get_all(&self) -> CategoryResult<Vec<Category>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(|e| CategoryError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}
