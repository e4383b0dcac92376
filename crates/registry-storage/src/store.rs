//! Typed record store.

use crate::{
    codec::{decode, encode},
    errors::{Result, StorageError},
    records::{Package, Record, User},
    traits::Storage,
};
use std::sync::Arc;
use tracing::debug;

/// Namespaced CRUD over packages and users
///
/// Constructed explicitly around an engine and shared behind `Arc` by
/// whoever needs it. Every operation runs in its own read snapshot or its
/// own single-key write; nothing spans several keys.
pub struct RegistryStore<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> RegistryStore<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Direct engine access
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    // ========================================================================
    // Packages
    // ========================================================================

    pub async fn get_package(&self, name: &str) -> Result<Package> {
        self.get_record(name).await
    }

    /// Store a package, replacing any package with the same name
    pub async fn add_package(&self, package: &Package) -> Result<()> {
        self.put_record(package).await
    }

    pub async fn del_package(&self, package: &Package) -> Result<()> {
        self.delete_record(package).await
    }

    /// All packages, ordered by name
    pub async fn all_packages(&self) -> Result<Vec<Package>> {
        self.all_records().await
    }

    pub async fn all_package_names(&self) -> Result<Vec<String>> {
        Ok(self
            .all_packages()
            .await?
            .into_iter()
            .map(|package| package.name)
            .collect())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn get_user(&self, username: &str) -> Result<User> {
        self.get_record(username).await
    }

    /// Store a user, replacing any user with the same username
    pub async fn add_user(&self, user: &User) -> Result<()> {
        self.put_record(user).await
    }

    /// Store a user only if the username is free
    ///
    /// Fails with [`StorageError::AlreadyExists`] otherwise; concurrent
    /// creations of one username have exactly one winner.
    pub async fn create_user(&self, user: &User) -> Result<()> {
        let key = User::NAMESPACE.key(user.id())?;
        let value = encode(user)?;
        self.storage.insert_raw(key, value).await
    }

    pub async fn del_user(&self, user: &User) -> Result<()> {
        self.delete_record(user).await
    }

    /// All users, ordered by username
    pub async fn all_users(&self) -> Result<Vec<User>> {
        self.all_records().await
    }

    // ========================================================================
    // Generic helpers
    // ========================================================================

    async fn get_record<R: Record>(&self, id: &str) -> Result<R> {
        let key = R::NAMESPACE.key(id)?;

        match self.storage.get_raw(&key).await? {
            Some(bytes) => decode(&bytes),
            None => Err(StorageError::NotFound),
        }
    }

    async fn put_record<R: Record>(&self, record: &R) -> Result<()> {
        let key = R::NAMESPACE.key(record.id())?;
        let value = encode(record)?;
        self.storage.put_raw(key, value).await
    }

    async fn delete_record<R: Record>(&self, record: &R) -> Result<()> {
        let key = R::NAMESPACE.key(record.id())?;
        self.storage.delete_raw(&key).await
    }

    async fn all_records<R: Record>(&self) -> Result<Vec<R>> {
        let prefix = R::NAMESPACE.prefix_bytes();
        let entries = self.storage.scan_prefix_raw(prefix).await?;

        debug!(
            "Scanned {} entries under {:?}",
            entries.len(),
            R::NAMESPACE.prefix()
        );

        // One undecodable entry fails the whole listing.
        entries.iter().map(|(_, value)| decode(value)).collect()
    }
}

impl<S: Storage> Clone for RegistryStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}
