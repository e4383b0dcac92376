//! Storage trait definitions.

use crate::errors::Result;
use async_trait::async_trait;

/// Ordered key-value engine underneath [`RegistryStore`](crate::RegistryStore)
///
/// This trait abstracts the underlying engine (RocksDB) so the record store
/// and everything built on it can run against an in-memory map in tests.
/// Every call is self-contained: one read snapshot or one single-key write.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Point lookup
    ///
    /// # Returns
    ///
    /// `Ok(Some(value))` if key exists, `Ok(None)` if not found
    async fn get_raw(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Write a value, overwriting whatever is stored under the key
    async fn put_raw(&self, key: Vec<u8>, value: Vec<u8>) -> Result<()>;

    /// Write a value only if the key is absent
    ///
    /// The check and the write are atomic: of several concurrent inserts of
    /// the same key exactly one succeeds, the rest get
    /// [`StorageError::AlreadyExists`](crate::StorageError::AlreadyExists).
    async fn insert_raw(&self, key: Vec<u8>, value: Vec<u8>) -> Result<()>;

    /// Delete a key. Deleting an absent key succeeds.
    async fn delete_raw(&self, key: &[u8]) -> Result<()>;

    /// All pairs whose key starts with `prefix`, in ascending key order
    ///
    /// The result reflects a single consistent snapshot taken when the scan
    /// starts.
    async fn scan_prefix_raw(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>>;
}
