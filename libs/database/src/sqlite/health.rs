use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check SQLite database health
///
/// Executes a simple `SELECT 1` query to verify the connection is working.
/// Useful for readiness probes.
///
/// # Example
/// ```ignore
/// use database::sqlite::{connect, check_health};
///
/// let db = connect(&db_url).await?;
///
/// match check_health(&db).await {
///     Ok(_) => { /* ready */ }
///     Err(e) => { /* not ready: {e} */ }
/// }
/// ```
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running SQLite health check");

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1".to_owned());
    db.query_one(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("SQLite health check failed: {}", e))
    })?;

    debug!("SQLite health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::connect;

    #[tokio::test]
    async fn test_check_health_on_live_connection() {
        let db = connect("sqlite::memory:").await.unwrap();
        assert!(check_health(&db).await.is_ok());
    }
}
