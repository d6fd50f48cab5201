//! Integration tests for Products domain
//!
//! These tests run against an in-memory SQLite database to ensure:
//! - Database queries work correctly
//! - The repository honors its contract (identity assignment, NotFound,
//!   delete reporting)
//! - The service layer composes validation, existence checks, and
//!   persistence correctly

use domain_products::*;
use sea_orm::ConnectionTrait;
use test_utils::{assertions::*, TestDatabase, TestDataBuilder};

async fn seed_categories(db: &TestDatabase) {
    db.connection
        .execute_unprepared("INSERT INTO categories (name) VALUES ('Electronics'), ('Books')")
        .await
        .unwrap();
}

fn laptop_input() -> ProductInput {
    ProductInput {
        name: "Laptop".to_string(),
        description: "High-end laptop".to_string(),
        price: 1500.0,
        stock: 10,
        category_id: 1,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_insert_and_get_product() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("insert_and_get");

    let input = ProductInput {
        name: builder.name("product", "main"),
        description: "Integration test product".to_string(),
        price: builder.price(),
        stock: 4,
        category_id: 1,
    };

    let created = repo.insert(input.clone()).await.unwrap();

    assert!(created.id > 0, "store should assign an identity");
    assert_eq!(created.name, input.name);
    assert_eq!(created.price, input.price);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");

    assert_eq!(retrieved, created);
}

#[tokio::test]
async fn test_get_by_id_missing_returns_none() {
    let db = TestDatabase::new().await;
    let repo = SqliteProductRepository::new(db.connection());

    let retrieved = repo.get_by_id(12345).await.unwrap();
    assert!(retrieved.is_none());
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());

    let created = repo.insert(laptop_input()).await.unwrap();

    let replacement = ProductInput {
        name: "Updated Product".to_string(),
        description: "Refreshed".to_string(),
        price: 2000.0,
        stock: 15,
        category_id: 2,
    };
    let updated = repo.update(created.id, replacement).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Updated Product");
    assert_eq!(updated.description, "Refreshed");
    assert_eq!(updated.price, 2000.0);
    assert_eq!(updated.stock, 15);
    assert_eq!(updated.category_id, 2);

    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_product_fails() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());

    let result = repo.update(12345, laptop_input()).await;
    assert!(
        matches!(result, Err(ProductError::NotFound(12345))),
        "Expected NotFound error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_delete_product() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());

    let created = repo.insert(laptop_input()).await.unwrap();

    // Delete should succeed
    let deleted = repo.delete(created.id).await.unwrap();
    assert!(deleted, "delete should return true");

    // Product should no longer exist
    let retrieved = repo.get_by_id(created.id).await.unwrap();
    assert!(retrieved.is_none(), "product should be deleted");

    // Second delete should return false
    let deleted_again = repo.delete(created.id).await.unwrap();
    assert!(!deleted_again, "second delete should return false");
}

#[tokio::test]
async fn test_category_exists() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());

    assert!(repo.category_exists(1).await.unwrap());
    assert!(repo.category_exists(2).await.unwrap());
    assert!(!repo.category_exists(999).await.unwrap());
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_service_rejects_invalid_input_without_persisting() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());
    let service = ProductService::new(repo);

    let invalid_inputs = vec![
        ProductInput {
            name: String::new(),
            ..laptop_input()
        },
        ProductInput {
            description: String::new(),
            ..laptop_input()
        },
        ProductInput {
            price: 0.0,
            ..laptop_input()
        },
        ProductInput {
            stock: -1,
            ..laptop_input()
        },
        ProductInput {
            category_id: 0,
            ..laptop_input()
        },
    ];

    for input in invalid_inputs {
        let result = service.create_product(input).await;
        assert!(
            matches!(result, Err(ProductError::Validation(_))),
            "invalid input should fail validation, got {:?}",
            result
        );
    }

    let all = service.list_products().await.unwrap();
    assert!(all.is_empty(), "no product should have been persisted");
}

#[tokio::test]
async fn test_service_rejects_missing_category_without_persisting() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());
    let service = ProductService::new(repo);

    let input = ProductInput {
        category_id: 999,
        ..laptop_input()
    };
    let result = service.create_product(input).await;

    assert!(
        matches!(result, Err(ProductError::CategoryNotFound(999))),
        "Expected CategoryNotFound error, got {:?}",
        result
    );

    let all = service.list_products().await.unwrap();
    assert!(all.is_empty(), "no product should have been persisted");
}

#[tokio::test]
async fn test_service_round_trip_preserves_fields() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());
    let service = ProductService::new(repo);

    let input = laptop_input();
    let created = service.create_product(input.clone()).await.unwrap();
    let fetched = service.get_product(created.id).await.unwrap();

    assert_eq!(fetched.name, input.name);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.price, input.price);
    assert_eq!(fetched.stock, input.stock);
    assert_eq!(fetched.category_id, input.category_id);
}

// ============================================================================
// Catalog Scenario
// ============================================================================

#[tokio::test]
async fn test_catalog_lifecycle_scenario() {
    let db = TestDatabase::new().await;
    seed_categories(&db).await;
    let repo = SqliteProductRepository::new(db.connection());
    let service = ProductService::new(repo);

    // Seed one product
    let laptop = service.create_product(laptop_input()).await.unwrap();

    let all = service.list_products().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Laptop");

    // Add a second product
    service
        .create_product(ProductInput {
            name: "Smartphone".to_string(),
            description: "Latest model".to_string(),
            price: 1000.0,
            stock: 20,
            category_id: 1,
        })
        .await
        .unwrap();

    let all = service.list_products().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.last().unwrap().name, "Smartphone");

    // A bad category must not change the count
    let result = service
        .create_product(ProductInput {
            name: "Tablet".to_string(),
            description: "Mid-range tablet".to_string(),
            price: 500.0,
            stock: 5,
            category_id: 999,
        })
        .await;
    assert!(matches!(result, Err(ProductError::CategoryNotFound(999))));
    assert_eq!(service.list_products().await.unwrap().len(), 2);

    // Full replace of the first product
    service
        .update_product(
            laptop.id,
            ProductInput {
                name: "Updated Product".to_string(),
                description: "Updated description".to_string(),
                price: 2000.0,
                stock: 15,
                category_id: 1,
            },
        )
        .await
        .unwrap();

    let fetched = service.get_product(laptop.id).await.unwrap();
    assert_eq!(fetched.price, 2000.0);
    assert_eq!(fetched.name, "Updated Product");

    // Delete the first product
    service.delete_product(laptop.id).await.unwrap();

    let all = service.list_products().await.unwrap();
    assert!(all.iter().all(|p| p.id != laptop.id));
    assert_eq!(all.len(), 1);
}
