//! Application state management.
//!
//! This module defines the shared application state passed to request
//! handlers that need it (the readiness probe). Domain routers carry their
//! own service state.

use sea_orm::DatabaseConnection;

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones),
/// providing access to:
/// - Application configuration
/// - SQLite database connection pool
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SQLite database connection pool
    pub db: DatabaseConnection,
}
