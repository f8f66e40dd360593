//! Durable storage for the current platform.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Desktop / native**: one JSON file under `<data_dir>/docmind/` via [`store::FileStore`]
//! - **WASM without `web`**: in-memory only

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate key-value store.
pub fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("docmind");
        store::FileStore::new(base)
    }
}
