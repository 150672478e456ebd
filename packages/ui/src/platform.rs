//! Shared service constructors for all platforms.
//!
//! Returns a [`store::SessionService`] backed by the appropriate [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStorageStore`
//! - **Native**: filesystem via [`store::FileStore`] under `<data_dir>/usermanagement/`
//! - **WASM without `web`**: in-memory, nothing survives a reload

/// Create a platform-appropriate session service.
pub fn make_session_service() -> store::SessionService<impl store::SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionService::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::SessionService::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("usermanagement");
        store::SessionService::new(store::FileStore::new(base))
    }
}

/// Create the users API client from the environment.
pub fn make_users_api() -> api::UsersClient {
    let client = api::UsersClient::from_env();
    if let Some(base) = client.config().base_url() {
        tracing::info!("Using users API at {}", base);
    }
    client
}
