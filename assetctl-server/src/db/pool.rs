//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits and foreign
//! keys turned on for every connection.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::repos::DbError;
use super::schema;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://asset_manager.db";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// SQLite connection string (e.g. `sqlite://asset_manager.db`)
    pub database_url: String,

    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Create a SQLite connection pool and make sure the schema exists.
///
/// The database file is created if it is missing.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(url = %config.database_url, "Database opened");

    schema::run(&pool).await?;
    Ok(pool)
}

/// Create an in-memory pool with the schema applied (for testing).
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn create_pool_in_memory() -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    schema::run(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_pool_acquires_connection() {
        let pool = create_pool_in_memory().await.expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn foreign_keys_are_enabled() {
        let pool = create_pool_in_memory().await.unwrap();

        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn file_pool_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.db");
        let config = DbConfig {
            database_url: format!("sqlite://{}", path.display()),
            max_connections: 2,
        };

        let pool = create_pool(&config).await.expect("pool creation failed");
        assert!(path.exists());
        pool.close().await;

        // Reopening an existing database must not fail on the schema step
        let pool = create_pool(&config).await.expect("reopen failed");
        pool.close().await;
    }

    #[test]
    fn default_config() {
        let config = DbConfig::default();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, 5);
    }
}
