//! Roster Client
//!
//! HTTP client library for the Roster user API.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{CreateOutcome, RosterClient};
//! use roster_core::CreateUser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RosterClient::new("http://localhost:8080")?;
//!
//!     match client.create_user(&CreateUser::new("Alice")).await? {
//!         CreateOutcome::Created(_) => println!("created"),
//!         CreateOutcome::Conflict => println!("id already taken"),
//!     }
//!
//!     for user in client.list_users().await? {
//!         println!("{} - {:?}", user.id, user.name());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::RosterClient;
pub use error::{ClientError, Result};
pub use types::{CreateOutcome, HealthInfo};
