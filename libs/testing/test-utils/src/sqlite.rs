//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by an in-memory SQLite database
//! with the application schema applied. Seed rows are not inserted, so
//! tests start from an empty catalog.

use migration::SchemaMigrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Test database wrapper around an in-memory SQLite database
///
/// The database lives for as long as the connection; it disappears when
/// this struct is dropped.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with the schema applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        // A single connection keeps every query on the same in-memory
        // database; a pool would hand each connection its own empty one.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);

        let connection = Database::connect(options)
            .await
            .expect("Failed to connect to test database");

        SchemaMigrator::up(&connection, None)
            .await
            .expect("Failed to apply schema");

        tracing::debug!("Test database ready (in-memory SQLite)");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_database_has_schema() {
        let db = TestDatabase::new().await;

        // Both tables exist and are empty
        db.connection
            .execute_unprepared("SELECT id, name FROM categories")
            .await
            .expect("categories table missing");
        db.connection
            .execute_unprepared("SELECT id, name, description, price, stock, category_id FROM products")
            .await
            .expect("products table missing");
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let db1 = TestDatabase::new().await;
        let db2 = TestDatabase::new().await;

        db1.connection
            .execute_unprepared("INSERT INTO categories (name) VALUES ('Electronics')")
            .await
            .unwrap();

        let rows = db2
            .connection
            .query_all(sea_orm::Statement::from_string(
                sea_orm::DatabaseBackend::Sqlite,
                "SELECT id FROM categories",
            ))
            .await
            .unwrap();

        assert!(rows.is_empty(), "databases should not share state");
    }
}
