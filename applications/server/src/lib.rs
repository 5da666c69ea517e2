//! Roster Server Library
//!
//! HTTP front for the user store: routing, configuration, and error mapping.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use config::{ApiSettings, CreateResponseMode, ServerConfig, StorageBackend};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
pub use store::open_store;

use std::net::SocketAddr;

/// Open the configured store, bind the listener, and serve until the
/// listener fails.
pub async fn run(config: ServerConfig) -> Result<()> {
    let store = open_store(&config.storage).await?;
    let app = create_router(AppState::new(store, config.api));

    let host = config
        .server
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|e| ServerError::Config(format!("Invalid host {:?}: {}", config.server.host, e)))?;
    let addr = SocketAddr::from((host, config.server.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
