use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CategoryResult;
use crate::models::Category;

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories
    async fn get_all(&self) -> CategoryResult<Vec<Category>>;
}

/// In-memory implementation of CategoryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<i32, Category>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    /// Insert a category, assigning the next id
    pub async fn add(&self, name: &str) -> Category {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let category = Category {
            id,
            name: name.to_string(),
        };

        let mut categories = self.categories.write().await;
        categories.insert(id, category.clone());
        category
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> CategoryResult<Vec<Category>> {
        let categories = self.categories.read().await;

        let mut result: Vec<Category> = categories.values().cloned().collect();
        result.sort_by_key(|c| c.id);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_list_categories() {
        let repo = InMemoryCategoryRepository::new();

        let electronics = repo.add("Electronics").await;
        let books = repo.add("Books").await;

        assert_eq!(electronics.id, 1);
        assert_eq!(books.id, 2);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Electronics");
        assert_eq!(all[1].name, "Books");
    }
}
