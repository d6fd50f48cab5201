use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{env_or_default, ConfigError, FromEnv};

/// SQLite database configuration
///
/// Holds the connection URL and pool settings. Construct manually or load
/// from environment variables (with the `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// // Manual construction
/// let config = SqliteConfig::new("sqlite://products.db?mode=rwc");
///
/// // From environment variables (requires `config` feature)
/// let config = SqliteConfig::from_env()?;
///
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Acquire timeout in seconds
    pub acquire_timeout_secs: u64,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Convert to SeaORM [`ConnectOptions`]
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url);
        options
            .max_connections(self.max_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
        options
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://products.db?mode=rwc".to_string(),
            max_connections: 10,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
        }
    }
}

#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    /// Reads from environment variables with defaults:
    /// - `DATABASE_URL`: defaults to `sqlite://products.db?mode=rwc`
    /// - `DATABASE_MAX_CONNECTIONS`: defaults to 10
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_or_default("DATABASE_URL", "sqlite://products.db?mode=rwc");
        let max_connections = env_or_default("DATABASE_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "DATABASE_MAX_CONNECTIONS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            url,
            max_connections,
            ..Self::default()
        })
    }
}
