//! Key-value storage backends
//!
//! Modelled on the Web Storage API so the browser's LocalStorage can sit
//! behind the same trait as the native and in-memory stores:
//! - `LocalStore`: `window.localStorage` (wasm32)
//! - `FileStore`: one file per key in a data directory (native)
//! - `MemoryStore`: process-local map

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// No storage on this host (no window, or storage disabled)
    #[error("storage unavailable")]
    Unavailable,
    /// Host refused the operation (quota exceeded, security error)
    #[error("storage rejected operation: {0}")]
    Rejected(String),
    /// Native file error
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string-to-string persistent store
pub trait KeyValueStore {
    /// Read a key (`Ok(None)` when absent)
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a key, replacing any prior value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key; removing an absent key succeeds
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}
