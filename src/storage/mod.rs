//! Persistent storage
//!
//! Key/value persistence for the quote collection, the selected category and
//! the session snapshot, plus application settings.

pub mod file;
pub mod memory;
pub mod settings;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Durable key holding the full quote collection as a JSON array.
pub const QUOTES_KEY: &str = "quotes";
/// Durable key holding the last selected category as a plain string.
pub const SELECTED_CATEGORY_KEY: &str = "lastSelectedCategory";
/// Session key holding the most recently displayed quote as JSON.
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine data directory")]
    NoDataDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// String key/value persistence
///
/// Implementations must be safe to share between the UI and the sync task.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `Ok(None)` when the key was never written
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write a value, replacing any previous one
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Get the application data directory
///
/// Linux: ~/.local/share/quotebox
/// macOS: ~/Library/Application Support/com.QuoteBox.QuoteBox
/// Windows: %APPDATA%/QuoteBox/QuoteBox/data
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "QuoteBox", "QuoteBox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
