//! Errors returned by [`crate::UsersApi`] calls.
//!
//! The UI does not branch on the variant; every error becomes the same
//! generic toast. The variants exist for logs and tests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, DNS, malformed URL, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
