//! RocksDB storage implementation.

use crate::{
    errors::{Result, StorageError},
    traits::Storage,
};
use async_trait::async_trait;
use rocksdb::{Direction, IteratorMode, Options, TransactionDB, TransactionDBOptions};
use std::{path::Path, sync::Arc};
use tempfile::TempDir;
use tracing::debug;

/// How long a conditional insert waits for a competing writer's row lock
const TXN_LOCK_TIMEOUT_MS: i64 = 1_000;

/// RocksDB storage implementation
///
/// Opened once per process and shared behind an `Arc`. RocksDB holds an
/// exclusive `LOCK` file on the directory, so a second open of the same path
/// fails instead of corrupting data.
pub struct RocksDbStorage {
    db: Arc<TransactionDB>,
}

impl RocksDbStorage {
    /// Open RocksDB database at the specified path
    ///
    /// Creates the database if it doesn't exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let mut txn_opts = TransactionDBOptions::default();
        txn_opts.set_txn_lock_timeout(TXN_LOCK_TIMEOUT_MS);

        let db = TransactionDB::open(&opts, &txn_opts, &path)?;

        debug!("Opened RocksDB at {:?}", path.as_ref());

        Ok(Self { db: Arc::new(db) })
    }

    /// Open a database in a fresh temporary directory
    ///
    /// The directory is removed when the returned `TempDir` is dropped, so
    /// keep it alive for as long as the storage is used. This is public for
    /// use in other crates' test modules.
    pub fn open_temporary() -> Result<(Self, TempDir)> {
        let temp_dir = TempDir::new()?;
        let storage = Self::open(temp_dir.path())?;
        Ok((storage, temp_dir))
    }
}

#[async_trait]
impl Storage for RocksDbStorage {
    async fn get_raw(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.db.get(key)?)
    }

    async fn put_raw(&self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        self.db.put(&key, &value)?;
        Ok(())
    }

    async fn insert_raw(&self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        let txn = self.db.transaction();

        // Exclusive row lock: a concurrent insert of the same key blocks here
        // until this transaction commits, then sees the value.
        if txn.get_for_update(&key, true)?.is_some() {
            txn.rollback()?;
            return Err(StorageError::AlreadyExists);
        }

        txn.put(&key, &value)?;
        txn.commit()?;

        Ok(())
    }

    async fn delete_raw(&self, key: &[u8]) -> Result<()> {
        self.db.delete(key)?;
        Ok(())
    }

    async fn scan_prefix_raw(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let snapshot = self.db.snapshot();
        let mut results = Vec::new();

        // Seek to the prefix; no prefix extractor is configured.
        let iter = snapshot.iterator(IteratorMode::From(prefix, Direction::Forward));

        for item in iter {
            let (key, value) = item?;

            if !key.starts_with(prefix) {
                // Keys are sorted, so once we're past the prefix, we're done
                break;
            }
            results.push((key.into_vec(), value.into_vec()));
        }

        Ok(results)
    }
}
