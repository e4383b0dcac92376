//! Record codec.
//!
//! Records are stored as bincode blobs. The encoding only needs to stay
//! stable for the lifetime of one deployment.

use crate::errors::{Result, StorageError};
use serde::{de::DeserializeOwned, Serialize};

/// Encode a record into bytes
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode a record from bytes
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    bincode::deserialize(bytes).map_err(|e| StorageError::Deserialization(e.to_string()))
}
