use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT OR IGNORE INTO categories (id, name)
            VALUES
                (1, 'Electronics'),
                (2, 'Books')
            "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT OR IGNORE INTO products (id, name, description, price, stock, category_id)
            VALUES
                (1, 'Laptop', 'High-end laptop', 1500.0, 10, 1)
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Delete in reverse order of foreign key dependencies
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM products WHERE id = 1")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DELETE FROM categories WHERE id IN (1, 2)")
            .await?;

        Ok(())
    }
}
