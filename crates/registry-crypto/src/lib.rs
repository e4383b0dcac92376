//! # registry-crypto
//!
//! Credential handling for the package registry.
//!
//! ## Security Properties
//!
//! - Passwords are only ever persisted as Argon2id PHC strings
//! - Every hash carries its own random salt
//! - Verification uses argon2's constant-time comparison
//! - No unsafe code

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod credentials;
pub mod errors;
pub mod hashing;

pub use constants::*;
pub use credentials::{CredentialManager, HashingParams};
pub use errors::{CryptoError, Result};
pub use hashing::*;
