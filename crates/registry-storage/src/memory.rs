//! In-memory storage engine.

use crate::{
    errors::{Result, StorageError},
    traits::Storage,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// `BTreeMap`-backed engine with the same ordering and conditional-write
/// semantics as [`RocksDbStorage`](crate::RocksDbStorage)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys across all namespaces
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_raw(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put_raw(&self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        self.entries.write().await.insert(key, value);
        Ok(())
    }

    async fn insert_raw(&self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&key) {
            return Err(StorageError::AlreadyExists);
        }
        entries.insert(key, value);
        Ok(())
    }

    async fn delete_raw(&self, key: &[u8]) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn scan_prefix_raw(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        // The read guard is held for the whole scan, which gives the snapshot.
        let entries = self.entries.read().await;

        Ok(entries
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let storage = MemoryStorage::new();

        storage.put_raw(b"k".to_vec(), b"v".to_vec()).await.unwrap();

        assert_eq!(storage.get_raw(b"k").await.unwrap(), Some(b"v".to_vec()));
        assert_eq!(storage.get_raw(b"missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_refuses_existing_key() {
        let storage = MemoryStorage::new();

        storage.insert_raw(b"k".to_vec(), b"1".to_vec()).await.unwrap();
        let result = storage.insert_raw(b"k".to_vec(), b"2".to_vec()).await;

        assert!(matches!(result, Err(StorageError::AlreadyExists)));
        assert_eq!(storage.get_raw(b"k").await.unwrap(), Some(b"1".to_vec()));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.put_raw(b"k".to_vec(), b"v".to_vec()).await.unwrap();

        storage.delete_raw(b"k").await.unwrap();
        storage.delete_raw(b"k").await.unwrap();

        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_scan_prefix_is_ordered_and_bounded() {
        let storage = MemoryStorage::new();
        for key in ["b_2", "a_1", "b_1", "c_1", "b_3"] {
            storage
                .put_raw(key.as_bytes().to_vec(), vec![])
                .await
                .unwrap();
        }

        let keys: Vec<Vec<u8>> = storage
            .scan_prefix_raw(b"b_")
            .await
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        assert_eq!(
            keys,
            vec![b"b_1".to_vec(), b"b_2".to_vec(), b"b_3".to_vec()]
        );
        assert_eq!(storage.len().await, 5);
    }
}
