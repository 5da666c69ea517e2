mod ids;
mod user;

pub use ids::UserId;
pub use user::{CreateUser, Profile, User};
