//! Storage error types.

use thiserror::Error;

/// Errors raised by a key-value store or while encoding a record for it.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store refused the operation (quota exceeded, disabled)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Key cannot be mapped onto the backing store
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Reading or writing the backing file failed
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the record to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
