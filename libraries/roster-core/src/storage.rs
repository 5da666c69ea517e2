//! User store contract

use crate::error::Result;
use crate::types::{CreateUser, User, UserId};
use async_trait::async_trait;

/// Persistence collaborator for `User` records
///
/// Implementations must be safe to share across request handlers
/// (`Arc<dyn UserStore>`). Misses and rejected writes are reported as `None`;
/// `Err` is reserved for failures of the store itself.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users, in the store's own order
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Persist a new user and return it with its assigned id
    ///
    /// Returns `None` when the store rejects the write, e.g. because the
    /// requested id is already taken or outside `1..=UserId::MAX_REQUESTED`.
    async fn save(&self, user: CreateUser) -> Result<Option<User>>;
}
