//! Auth error types.

use thiserror::Error;

/// Auth service errors
///
/// Credential failures surface only as [`AuthError::InvalidCredentials`],
/// whether the user is unknown or the password is wrong.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username already registered
    #[error("User already exists: {0}")]
    UserExists(String),

    /// Update of a user that was never registered
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Unknown user or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Rejected request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    Hashing(#[from] registry_crypto::CryptoError),

    /// Token signing failed
    #[error("Token signing error: {0}")]
    Signing(#[from] registry_tokens::TokenError),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] registry_storage::StorageError),
}

impl AuthError {
    /// Whether the error stems from what the user submitted rather than from
    /// an operational problem
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials
                | AuthError::UserExists(_)
                | AuthError::UserNotFound(_)
                | AuthError::InvalidInput(_)
        )
    }
}

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;
