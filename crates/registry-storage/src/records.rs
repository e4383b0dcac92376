//! Persisted record types.

use crate::keys::{Namespace, PACKAGES, USERS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A record kind stored under its own namespace
pub trait Record: Serialize + serde::de::DeserializeOwned + Send + Sync {
    /// Namespace holding every record of this kind
    const NAMESPACE: Namespace;

    /// Unique identifier within the namespace
    fn id(&self) -> &str;
}

/// A package known to the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Unique package name
    pub name: String,
    /// Username of the uploader, if any
    pub owner: Option<String>,
    /// Metadata owned by the HTTP and CLI layers, stored as-is
    pub metadata: BTreeMap<String, String>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            metadata: BTreeMap::new(),
        }
    }
}

impl Record for Package {
    const NAMESPACE: Namespace = PACKAGES;

    fn id(&self) -> &str {
        &self.name
    }
}

/// A registry user.
///
/// `password` holds plaintext only while a request is in flight. Whatever is
/// persisted through the auth service is the Argon2id PHC string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Record for User {
    const NAMESPACE: Namespace = USERS;

    fn id(&self) -> &str {
        &self.username
    }
}
