//! # API crate — REST client for the user management backend
//!
//! Every network call the admin screen makes goes through this crate. The
//! backend is an external JSON API; this crate only knows its three user
//! endpoints.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`UsersApi`] trait and its HTTP implementation [`UsersClient`] |
//! | [`config`] | Base URL resolution from the environment |
//! | [`error`] | [`ApiError`], the single error type returned by every call |
//! | [`models`] | Wire types: [`User`] and the list envelope [`UserPage`] |
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Returns |
//! |--------|------|------|---------|
//! | `GET` | `/api/users` | — | `{ "data": [User] }` |
//! | `PUT` | `/api/users/{id}` | `User` | the server's canonical `User` |
//! | `DELETE` | `/api/users/{id}` | — | any 2xx, body ignored |
//!
//! Calls are never retried. Any non-2xx status is an [`ApiError::Status`].

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{UsersApi, UsersClient};
pub use config::{ApiConfig, BASE_URL_VAR};
pub use error::ApiError;
pub use models::{User, UserId, UserPage};
