//! Credential manager: the password hashing entry point used by auth.

use crate::{constants::argon2_params, errors::*, hashing::*};
use argon2::Params;
use std::sync::OnceLock;
use tracing::debug;

/// Argon2id work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of iterations
    pub time_cost: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: argon2_params::MEMORY_COST,
            time_cost: argon2_params::TIME_COST,
            parallelism: argon2_params::PARALLELISM,
        }
    }
}

impl HashingParams {
    fn to_argon2(self) -> Result<Params> {
        Params::new(
            self.memory_kib,
            self.time_cost,
            self.parallelism,
            Some(argon2_params::OUTPUT_LENGTH),
        )
        .map_err(|e| CryptoError::InvalidParams(e.to_string()))
    }
}

/// Hashes plaintext passwords for storage and checks candidates against
/// stored hashes
#[derive(Debug)]
pub struct CredentialManager {
    params: Params,
    dummy_hash: OnceLock<String>,
}

impl CredentialManager {
    /// Create a manager hashing with the given work factor
    pub fn new(params: HashingParams) -> Result<Self> {
        Ok(Self {
            params: params.to_argon2()?,
            dummy_hash: OnceLock::new(),
        })
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// Two calls with the same input produce different strings.
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        hash_password(plaintext.as_bytes(), &generate_salt(), self.params.clone())
    }

    /// Check a candidate password against a stored hash
    ///
    /// A malformed stored hash counts as a mismatch.
    pub fn verify(&self, hash: &str, candidate: &str) -> bool {
        match verify_password(candidate.as_bytes(), hash) {
            Ok(()) => true,
            Err(CryptoError::PasswordMismatch) => false,
            Err(e) => {
                debug!("Password verification failed: {}", e);
                false
            }
        }
    }

    /// Spend the same work as [`verify`](Self::verify) without a real hash
    ///
    /// Used when the user does not exist, so that path is not measurably
    /// faster than a wrong password. Always returns `false`.
    pub fn verify_dummy(&self, candidate: &str) -> bool {
        let dummy = self.dummy_hash.get_or_init(|| {
            // Hashing only fails on invalid parameters, which `new` rejected.
            self.hash("registry-dummy-password").unwrap_or_default()
        });

        self.verify(dummy, candidate);
        false
    }
}

impl Default for CredentialManager {
    fn default() -> Self {
        Self {
            params: argon2_params::get_params(),
            dummy_hash: OnceLock::new(),
        }
    }
}
