/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use roster_core::{CreateUser, RosterError, User, UserId, UserStore};
use roster_server::{create_router, ApiSettings, AppState, CreateResponseMode};
use roster_storage::{MemoryUserStore, SqliteUserStore};
use std::sync::Arc;
use tempfile::TempDir;

/// Router over an in-memory store seeded with `users`
pub fn memory_app(users: Vec<User>, mode: CreateResponseMode) -> Router {
    app_with_store(Arc::new(MemoryUserStore::with_users(users)), mode)
}

/// Router over any store
pub fn app_with_store(store: Arc<dyn UserStore>, mode: CreateResponseMode) -> Router {
    let api = ApiSettings {
        create_response: mode,
    };
    create_router(AppState::new(store, api))
}

/// Router over a real SQLite file with migrations applied
pub async fn sqlite_app(mode: CreateResponseMode) -> (Router, Arc<SqliteUserStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let store = Arc::new(SqliteUserStore::connect(&db_url, 5).await.unwrap());

    let app = app_with_store(store.clone(), mode);
    (app, store, temp_dir)
}

/// Store whose every call fails, for exercising the 5xx path
pub struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn list_all(&self) -> roster_core::Result<Vec<User>> {
        Err(RosterError::storage("store offline"))
    }

    async fn find_by_id(&self, _id: UserId) -> roster_core::Result<Option<User>> {
        Err(RosterError::storage("store offline"))
    }

    async fn save(&self, _user: CreateUser) -> roster_core::Result<Option<User>> {
        Err(RosterError::storage("store offline"))
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Test users
pub mod fixtures {
    use roster_core::{User, UserId};

    pub fn alice() -> User {
        User::new(UserId::new(1), "Alice")
    }

    pub fn bob() -> User {
        User::new(UserId::new(2), "Bob")
    }
}
