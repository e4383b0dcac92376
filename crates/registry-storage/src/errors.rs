//! Storage error types.

use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Engine failure (open, read, write, lock)
    #[error("Database error: {0}")]
    Database(String),

    /// Record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded into the expected record
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Not found
    #[error("Key not found")]
    NotFound,

    /// Already exists
    #[error("Key already exists")]
    AlreadyExists,

    /// Identifier cannot be turned into a key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StorageError {
    /// Whether the caller may retry the operation with backoff.
    ///
    /// Only engine-level failures qualify; codec failures mean the stored
    /// data is corrupt and retrying cannot help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageError::Database(_) | StorageError::IoError(_))
    }
}

impl From<rocksdb::Error> for StorageError {
    fn from(err: rocksdb::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
