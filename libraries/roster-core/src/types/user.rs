/// User domain types
use super::ids::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque profile fields carried alongside a user's id and name.
///
/// Flattened into the top-level JSON object on the wire.
pub type Profile = serde_json::Map<String, Value>;

/// Field names owned by `User` itself; never stored in a `Profile`.
const RESERVED_FIELDS: [&str; 2] = ["id", "name"];

/// User account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned by the store
    pub id: UserId,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Any further fields the client supplied
    #[serde(flatten)]
    pub profile: Profile,
}

impl User {
    /// Create a named user with an empty profile
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            profile: Profile::new(),
        }
    }

    /// Display name, if the user has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Build the stored record for a create request once the store has
    /// settled on an id. Any id carried by the request is discarded.
    pub fn from_create(id: UserId, request: CreateUser) -> Self {
        Self {
            id,
            name: request.name,
            profile: request.profile,
        }
    }
}

/// Data for creating a new user
///
/// Every field is optional. When `id` is present the store tries to persist
/// under that id and rejects the write if it is taken or out of range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Requested id, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Profile fields
    #[serde(flatten)]
    pub profile: Profile,
}

impl CreateUser {
    /// Create a named request without an id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            profile: Profile::new(),
        }
    }

    /// Request a specific id
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Add a profile field. Reserved names (`id`, `name`) are ignored.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !RESERVED_FIELDS.contains(&key.as_str()) {
            self.profile.insert(key, value.into());
        }
        self
    }
}
