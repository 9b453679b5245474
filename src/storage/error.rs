//! Storage error types.

use thiserror::Error;

/// Errors that can occur while talking to a key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be stored by this backend
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}
