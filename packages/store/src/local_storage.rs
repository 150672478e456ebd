//! # `localStorage` session store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**.
//! Values go straight into `window.localStorage`, which survives reloads and
//! browser restarts for the same origin.
//!
//! ## Connection management
//!
//! The struct is zero-sized; the `Storage` handle is looked up on every call.
//! A missing window or disabled storage (private mode, sandboxed iframes)
//! surfaces as [`StoreError::Unavailable`].

use web_sys::Storage;

use crate::error::StoreError;
use crate::session::SessionStore;

/// `window.localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl SessionStore for LocalStorageStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    async fn write(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, &value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
