//! Auth trait definitions.

use crate::errors::Result;
use async_trait::async_trait;
use registry_storage::User;
use registry_tokens::Claims;

/// Authentication operations exposed to the HTTP and CLI layers
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Register a new user. `user.password` is the submitted plaintext.
    async fn register(&self, user: User) -> Result<()>;

    /// Replace the password of an existing user
    ///
    /// `old_password` is not checked; callers authenticate the request with
    /// a token first.
    async fn update(&self, user: User, old_password: &str) -> Result<()>;

    /// Check credentials and issue a token
    async fn login(&self, user: &User) -> Result<String>;

    /// Verify a token. `None` for any invalid token.
    fn verify(&self, token: &str) -> Option<Claims>;
}
