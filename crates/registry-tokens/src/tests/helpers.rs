//! Test helpers for token tests.

use crate::*;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::time::Duration;

pub const TEST_SECRET: &[u8] = b"registry-test-secret-registry-test-secret-0123456789";

pub fn issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET, None).unwrap()
}

pub fn expiring_issuer(ttl: Duration) -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET, Some(ttl)).unwrap()
}

/// Sign arbitrary claims with the test secret
pub fn sign(algorithm: Algorithm, claims: &impl serde::Serialize) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

/// Replace the first character of the signature segment
pub fn tamper_signature(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", head, chars.into_iter().collect::<String>())
}
