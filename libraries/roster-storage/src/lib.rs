//! Roster Storage
//!
//! `UserStore` implementations for Roster.
//!
//! # Architecture
//!
//! - **SQLite**: `SqliteUserStore`, backed by an `sqlx` pool with embedded migrations
//! - **In-memory**: `MemoryUserStore`, for tests and throwaway instances
//! - **Vertical Slicing**: each table owns its own queries (`users`)
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::{CreateUser, UserStore};
//! use roster_storage::SqliteUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteUserStore::connect("sqlite://roster.db", 5).await?;
//!
//! let saved = store.save(CreateUser::new("Alice")).await?;
//! let users = store.list_all().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;
mod sqlite;

// Vertical slices
pub mod users;

pub use error::StorageError;
pub use memory::MemoryUserStore;
pub use sqlite::SqliteUserStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "SQLite pool created");

    Ok(pool)
}
