use std::sync::Arc;

use crate::error::CategoryResult;
use crate::models::Category;
use crate::repository::CategoryRepository;

/// Service layer for Category business logic
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all categories
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CategoryError;
    use crate::repository::MockCategoryRepository;

    #[tokio::test]
    async fn test_list_categories_returns_repository_contents() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                Category {
                    id: 1,
                    name: "Electronics".to_string(),
                },
                Category {
                    id: 2,
                    name: "Books".to_string(),
                },
            ])
        });

        let service = CategoryService::new(mock_repo);
        let categories = service.list_categories().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Electronics");
    }

    #[tokio::test]
    async fn test_list_categories_propagates_repository_error() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_get_all()
            .returning(|| Err(CategoryError::Internal("connection lost".to_string())));

        let service = CategoryService::new(mock_repo);
        let result = service.list_categories().await;

        assert!(matches!(result, Err(CategoryError::Internal(_))));
    }
}
