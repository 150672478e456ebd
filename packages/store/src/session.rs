//! # Session service — hydrate, sign in, sign out
//!
//! [`SessionService`] owns the in-memory [`AuthSession`] and mirrors every
//! change into a [`SessionStore`]. The UI creates one at startup, calls
//! [`hydrate`](SessionService::hydrate) before rendering guarded routes, and
//! injects the resulting state through context.
//!
//! ## [`SessionStore`] trait
//!
//! A small async key/value interface (`read`, `write`, `remove`) over string
//! values. Implementations live in sibling modules: [`crate::MemoryStore`] for
//! tests, `FileStore` for native builds and `LocalStorageStore` for the
//! browser.
//!
//! ## Lifecycle
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`hydrate`](SessionService::hydrate) | Reads the stored slice. Missing or malformed data yields the signed-out default. |
//! | [`sign_in`](SessionService::sign_in) | Marks the session authenticated with a token and persists it. |
//! | [`sign_out`](SessionService::sign_out) | Resets to the default and removes the stored key. |

use crate::error::StoreError;
use crate::models::{AuthSession, PersistedSlices};

/// Storage key holding the serialized [`PersistedSlices`].
pub const SESSION_KEY: &str = "usermanagement-authkey";

/// Async trait for durable string storage.
pub trait SessionStore {
    fn read(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn write(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// Authentication state backed by a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct SessionService<S: SessionStore> {
    store: S,
    key: String,
    current: AuthSession,
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SESSION_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            current: AuthSession::default(),
        }
    }

    pub fn current(&self) -> &AuthSession {
        &self.current
    }

    /// Load the persisted session.
    ///
    /// Never fails: an unreadable store or a corrupted value is logged and
    /// treated as signed out, so startup is never blocked on storage.
    pub async fn hydrate(&mut self) -> &AuthSession {
        self.current = match self.store.read(&self.key).await {
            Ok(Some(raw)) => match PersistedSlices::from_json(&raw) {
                Ok(slices) => slices.auth,
                Err(e) => {
                    tracing::warn!("Discarding malformed session under {}: {}", self.key, e);
                    AuthSession::default()
                }
            },
            Ok(None) => AuthSession::default(),
            Err(e) => {
                tracing::warn!("Failed to read session: {}", e);
                AuthSession::default()
            }
        };
        &self.current
    }

    pub async fn sign_in(&mut self, token: impl Into<String>) -> Result<&AuthSession, StoreError> {
        self.set(AuthSession::signed_in(token)).await
    }

    /// Replace the whole session and persist it.
    pub async fn set(&mut self, session: AuthSession) -> Result<&AuthSession, StoreError> {
        let slices = PersistedSlices { auth: session };
        self.store.write(&self.key, slices.to_json()?).await?;
        self.current = slices.auth;
        Ok(&self.current)
    }

    pub async fn sign_out(&mut self) -> Result<&AuthSession, StoreError> {
        self.current = AuthSession::default();
        self.store.remove(&self.key).await?;
        Ok(&self.current)
    }
}
