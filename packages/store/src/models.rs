//! # Persisted authentication state
//!
//! The only durable client state in the admin screen is the authentication
//! slice: a flag saying whether the operator is signed in, plus the opaque
//! token handed out by the login flow. It is stored as JSON under a single key
//! (see [`crate::SESSION_KEY`]) wrapped in a [`PersistedSlices`] envelope:
//!
//! ```json
//! { "auth": { "isAuthenticated": true, "token": "abc" } }
//! ```
//!
//! Only whitelisted slices go into the envelope. Today that is just `auth`.

use serde::{Deserialize, Serialize};

/// Authentication flag and token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthSession {
    /// A signed-in session carrying `token`.
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token.into()),
        }
    }
}

/// Envelope written under the session key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSlices {
    #[serde(default)]
    pub auth: AuthSession,
}

impl PersistedSlices {
    /// Parse from the stored JSON string.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Serialize to the stored JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
