use async_trait::async_trait;
use roster_core::{
    error::{Result, RosterError},
    storage::UserStore,
    CreateUser, User, UserId,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-process user store
///
/// Ids are assigned as `max(id) + 1` (starting at 1) under the write lock, so
/// concurrent saves never hand out the same id. Requested ids outside
/// `1..=UserId::MAX_REQUESTED` are rejected like taken ones.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Later users replace earlier ones with the same id.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn save(&self, user: CreateUser) -> Result<Option<User>> {
        let mut users = self.users.write().await;

        let id = match user.id {
            Some(id) if !id.is_requestable() => {
                tracing::debug!(%id, "Rejecting save, id out of range");
                return Ok(None);
            }
            Some(id) => id,
            None => match users.keys().next_back() {
                None => UserId::new(1),
                Some(last) => last
                    .next()
                    .ok_or_else(|| RosterError::storage("User id space exhausted"))?,
            },
        };

        if users.contains_key(&id) {
            tracing::debug!(%id, "Rejecting save, id already taken");
            return Ok(None);
        }

        let saved = User::from_create(id, user);
        users.insert(id, saved.clone());
        Ok(Some(saved))
    }
}
