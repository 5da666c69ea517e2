//! Roster Core
//!
//! Shared domain types, the user store contract, and error handling for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `UserId`
//! - **Store Contract**: the `UserStore` trait consumed by the HTTP layer
//! - **Error Handling**: unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{CreateUser, User, UserId};
//!
//! // A payload submitted by a client, without an id
//! let request = CreateUser::new("Alice");
//!
//! // The record a store hands back once it has assigned one
//! let user = User::from_create(UserId::new(1), request);
//! assert_eq!(user.id.get(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{CreateUser, Profile, User, UserId};
