//! Argon2id password hashing.

use crate::{constants::argon2_params, errors::*};
use argon2::password_hash::SaltString;
use argon2::{Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier};

fn argon2id(params: Params) -> Argon2<'static> {
    Argon2::new(argon2::Algorithm::Argon2id, argon2_params::VERSION, params)
}

/// Hash a password using Argon2id
///
/// # Arguments
///
/// * `password` - The password to hash
/// * `salt` - Salt string (use `generate_salt()` to create)
/// * `params` - Work factor
///
/// # Returns
///
/// PHC-formatted hash string that includes algorithm, parameters, salt, and hash
pub fn hash_password(password: &[u8], salt: &SaltString, params: Params) -> Result<String> {
    let password_hash = argon2id(params)
        .hash_password(password, salt)
        .map_err(|e| CryptoError::Argon2Failed(e.to_string()))?;

    Ok(password_hash.to_string())
}

/// Verify a password against an Argon2id hash
///
/// The work factor and salt are read from the PHC string, so hashes created
/// under older parameters keep verifying after the defaults change.
///
/// # Returns
///
/// `Ok(())` if password matches, `Err` otherwise
pub fn verify_password(password: &[u8], hash_str: &str) -> Result<()> {
    let parsed_hash = PasswordHash::new(hash_str).map_err(|_| CryptoError::InvalidHashFormat)?;

    argon2id(argon2_params::get_params())
        .verify_password(password, &parsed_hash)
        .map_err(|e| match e {
            argon2::password_hash::Error::Password => CryptoError::PasswordMismatch,
            other => CryptoError::Argon2Failed(other.to_string()),
        })
}

/// Generate a random salt for password hashing
pub fn generate_salt() -> SaltString {
    SaltString::generate(&mut rand::thread_rng())
}
