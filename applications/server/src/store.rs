/// Store selection
use crate::{
    config::{StorageBackend, StorageSettings},
    error::Result,
};
use roster_core::UserStore;
use roster_storage::{MemoryUserStore, SqliteUserStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Open the user store named by `settings`
pub async fn open_store(settings: &StorageSettings) -> Result<Arc<dyn UserStore>> {
    match settings.backend {
        StorageBackend::Sqlite => {
            if let Some(parent) = database_path(&settings.database_url)
                .as_deref()
                .and_then(|path| path.parent())
                .filter(|parent| !parent.as_os_str().is_empty())
            {
                tokio::fs::create_dir_all(parent).await?;
            }

            let store =
                SqliteUserStore::connect(&settings.database_url, settings.max_connections).await?;
            tracing::info!("Database connected");
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on exit");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}

/// File path behind a `sqlite:` URL, if it names a file at all
fn database_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}
