//! Database module for the login server.
//!
//! The account and character tables belong to the game server. SQLite
//! builds ship their own copy of that schema and migrate it on open; MySQL
//! builds (`mysql` feature) connect to the game server's database as-is.

mod account;
mod character;
mod schema;
mod status;
mod traits;

pub use account::{AccountRecord, AccountRepository, NewAccount};
pub use character::{CharacterRecord, CharacterRepository, NewCharacter};
pub use schema::MIGRATIONS;
pub use status::{StatusRepository, DEFAULT_BOOSTED_RACE_ID};
pub use traits::{AccountStore, StatusStore};

use std::time::Duration;

use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::Result;

/// Connection pool for the compiled-in backend.
#[cfg(feature = "mysql")]
pub type DbPool = sqlx::MySqlPool;
/// Connection pool for the compiled-in backend.
#[cfg(not(feature = "mysql"))]
pub type DbPool = sqlx::SqlitePool;

/// Database wrapper owning the connection pool.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Close every pooled connection.
    ///
    /// Later queries fail immediately instead of waiting for a connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Name of the compiled-in backend.
    pub fn backend_name(&self) -> &'static str {
        if cfg!(feature = "mysql") {
            "mysql"
        } else {
            "sqlite"
        }
    }
}

#[cfg(not(feature = "mysql"))]
impl Database {
    /// Open the SQLite database described by `config`.
    ///
    /// The file and its parent directories are created if missing, and
    /// pending migrations are applied.
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        use std::str::FromStr;

        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

        info!("Opening database at {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Open an in-memory database for testing.
    ///
    /// Uses a single connection that never expires, since every SQLite
    /// memory connection is a separate database.
    pub async fn open_in_memory() -> Result<Self> {
        use sqlx::sqlite::SqlitePoolOptions;

        debug!("Opening in-memory database");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(Duration::from_secs(5))
            .connect("sqlite::memory:")
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get the current schema version.
    pub async fn schema_version(&self) -> Result<i64> {
        if !self.table_exists("schema_version").await? {
            return Ok(0);
        }

        let version: i64 =
            sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
                .fetch_one(&self.pool)
                .await?;
        Ok(version)
    }

    /// Apply pending migrations, one transaction per migration.
    pub async fn migrate(&self) -> Result<()> {
        let current_version = self.schema_version().await?;

        if current_version as usize >= MIGRATIONS.len() {
            debug!("Database is up to date (version {})", current_version);
            return Ok(());
        }

        info!(
            "Migrating database from version {} to {}",
            current_version,
            MIGRATIONS.len()
        );

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version     INTEGER PRIMARY KEY,
                applied_at  TEXT NOT NULL DEFAULT (datetime('now'))
            )",
        )
        .execute(&self.pool)
        .await?;

        for (i, migration) in MIGRATIONS.iter().enumerate().skip(current_version as usize) {
            let version = (i + 1) as i64;
            info!("Applying migration v{}", version);

            let mut tx = self.pool.begin().await?;
            sqlx::raw_sql(migration).execute(&mut *tx).await?;
            sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
                .bind(version)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            debug!("Migration v{} applied successfully", version);
        }

        info!(
            "Database migration complete (now at version {})",
            MIGRATIONS.len()
        );
        Ok(())
    }

    /// Check if a table exists.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
        )
        .bind(table_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }
}

#[cfg(feature = "mysql")]
impl Database {
    /// Connect to the game server's MySQL database.
    ///
    /// The schema is owned by the game server, so no migrations run.
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        use sqlx::mysql::MySqlPoolOptions;

        info!("Connecting to MySQL database");
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        let version: String = sqlx::query_scalar("SELECT VERSION()")
            .fetch_one(&pool)
            .await?;
        info!("Database version: {}", version);

        Ok(Self { pool })
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("backend", &self.backend_name())
            .finish()
    }
}

#[cfg(all(test, not(feature = "mysql")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = Database::open_in_memory().await.unwrap();
        assert_eq!(db.schema_version().await.unwrap() as usize, MIGRATIONS.len());
        assert_eq!(db.backend_name(), "sqlite");
    }

    #[tokio::test]
    async fn test_tables_exist() {
        let db = Database::open_in_memory().await.unwrap();

        assert!(db.table_exists("schema_version").await.unwrap());
        assert!(db.table_exists("accounts").await.unwrap());
        assert!(db.table_exists("players").await.unwrap());
        assert!(db.table_exists("boosted_creature").await.unwrap());
        assert!(db.table_exists("players_online").await.unwrap());
        assert!(!db.table_exists("nonexistent").await.unwrap());
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = Database::open_in_memory().await.unwrap();
        db.migrate().await.unwrap();
        assert_eq!(db.schema_version().await.unwrap() as usize, MIGRATIONS.len());
    }

    #[tokio::test]
    async fn test_open_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("login.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            ..DatabaseConfig::default()
        };

        {
            let db = Database::open(&config).await.unwrap();
            assert!(db.table_exists("accounts").await.unwrap());
            db.close().await;
        }

        assert!(path.exists());

        // Reopen: migrations must not be reapplied
        let db = Database::open(&config).await.unwrap();
        assert_eq!(db.schema_version().await.unwrap() as usize, MIGRATIONS.len());
        db.close().await;
    }

    #[tokio::test]
    async fn test_closed_pool_fails_fast() {
        let db = Database::open_in_memory().await.unwrap();
        db.close().await;
        assert!(db.table_exists("accounts").await.is_err());
    }
}
