//! Cryptographic error types.

use thiserror::Error;

/// Cryptographic operation errors
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Argon2 hashing failed
    #[error("Argon2 hashing failed: {0}")]
    Argon2Failed(String),

    /// Work-factor parameters rejected by Argon2
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    /// Invalid hash format
    #[error("Invalid hash format")]
    InvalidHashFormat,

    /// Password did not match the hash
    #[error("Password mismatch")]
    PasswordMismatch,
}

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;
