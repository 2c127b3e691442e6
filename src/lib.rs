//! High score persistence for a small arcade game
//!
//! Core modules:
//! - `highscore`: save/load of the single high score value
//! - `storage`: key-value backends (LocalStorage on web, files on native, memory)
//! - `web`: JS-visible `saveHighScore` / `loadHighScore` (wasm32 only)
//! - `config`: native configuration

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod highscore;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use config::{Config, ConfigError};
pub use highscore::{
    clear, load, parse_score, record, save, try_clear, try_load, try_record, try_save,
};
pub use storage::{KeyValueStore, MemoryStore, StoreError};

/// Storage constants
pub mod consts {
    /// Key the high score lives under
    pub const STORAGE_KEY: &str = "highscore";
    /// Value used when nothing has been saved yet
    pub const DEFAULT_RAW: &str = "0";
    /// Default native data directory
    pub const DEFAULT_DATA_DIR: &str = "assets/data";
    /// Extension of native data files
    pub const DATA_FILE_EXT: &str = "dat";
}
