//! Database library providing the SQLite connector and repository utilities
//!
//! This library owns everything that touches a live store connection:
//! connection setup (with retry), migration running, health checks, and a
//! generic [`BaseRepository`] that domain crates build their store-backed
//! repositories on.
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect("sqlite://products.db?mode=rwc").await?;
//! sqlite::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

// Always available modules
pub mod common;

// Repository abstraction (requires sqlite feature since it uses SeaORM)
#[cfg(feature = "sqlite")]
pub mod repository;

#[cfg(feature = "sqlite")]
pub mod sqlite;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "sqlite")]
pub use repository::BaseRepository;
