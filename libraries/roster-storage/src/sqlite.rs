use crate::{create_pool, run_migrations, users, StorageError};
use async_trait::async_trait;
use roster_core::{error::Result, storage::UserStore, CreateUser, User, UserId};
use sqlx::SqlitePool;

/// User store backed by `SQLite`
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool on `database_url` and bring the schema up to date
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url, max_connections)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        run_migrations(&pool).await?;
        tracing::info!("User store migrations applied");

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn list_all(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn save(&self, user: CreateUser) -> Result<Option<User>> {
        let requested = user.id;
        let saved = users::create(&self.pool, user).await?;
        if saved.is_none() {
            tracing::debug!(id = ?requested, "Insert ignored, id already taken");
        }
        Ok(saved)
    }
}
