//! Errors raised by [`crate::SessionStore`] backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored session is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backing storage could not be reached (e.g. `localStorage` disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
