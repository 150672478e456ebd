//! # User record as sent by the backend
//!
//! [`User`] is the only entity the admin screen manages. The backend assigns
//! `id`; the client never invents one. Field names are snake_case on the wire.
//!
//! `GET /api/users` wraps the collection in a [`UserPage`]. Only `data` is
//! read. Paging fields the backend adds (`page`, `per_page`, `total`, ...)
//! are ignored by serde's default unknown-field handling.

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
pub type UserId = u64;

/// A user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar URL. Read-only in the edit form.
    #[serde(default)]
    pub avatar: String,
}

impl User {
    /// "First Last", used for image alt text and dialog titles.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Envelope returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPage {
    pub data: Vec<User>,
}
