//! Types for Roster API responses.

use roster_core::User;
use serde::Deserialize;

/// Response from the health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    pub version: String,
}

/// Result of `POST /users`.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// 201. Carries the saved user when the server is configured to return it.
    Created(Option<User>),
    /// 409. The store rejected the write.
    Conflict,
}
