//! Key namespaces.
//!
//! Every persisted key is `<prefix><identifier>`. Prefixes partition the
//! single key space into one collection per record kind, so no prefix may be
//! a prefix of another.

use crate::errors::{Result, StorageError};

/// A key prefix owning one record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespace {
    prefix: &'static str,
}

/// Packages: "pkg_" + package name → Package
pub const PACKAGES: Namespace = Namespace::new("pkg_");

/// Users: "user_" + username → User
pub const USERS: Namespace = Namespace::new("user_");

impl Namespace {
    const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// The raw prefix string
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Prefix bytes used for range scans
    pub fn prefix_bytes(&self) -> &'static [u8] {
        self.prefix.as_bytes()
    }

    /// Build the full key for an identifier
    pub fn key(&self, id: &str) -> Result<Vec<u8>> {
        if id.is_empty() {
            return Err(StorageError::InvalidKey(format!(
                "empty identifier in namespace {:?}",
                self.prefix
            )));
        }

        let mut key = Vec::with_capacity(self.prefix.len() + id.len());
        key.extend_from_slice(self.prefix.as_bytes());
        key.extend_from_slice(id.as_bytes());
        Ok(key)
    }

    /// Strip the prefix from a key of this namespace
    pub fn identifier<'a>(&self, key: &'a [u8]) -> Option<&'a [u8]> {
        key.strip_prefix(self.prefix.as_bytes())
    }
}

/// Get all namespaces
pub fn all_namespaces() -> Vec<Namespace> {
    vec![PACKAGES, USERS]
}
