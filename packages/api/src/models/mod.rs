//! Wire models for the users API.

mod user;

pub use user::{User, UserId, UserPage};
