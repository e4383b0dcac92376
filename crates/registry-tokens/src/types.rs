use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Audience claim carried by every registry user token
pub const TOKEN_AUDIENCE: &str = "user";

/// Recommended minimum HS384 key length in bytes
pub const MIN_RECOMMENDED_KEY_LEN: usize = 48;

/// JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (username)
    pub sub: String,
    /// Audience
    pub aud: String,
    /// Issued at (seconds since epoch)
    pub iat: u64,
    /// Expiration (seconds since epoch), only set when a TTL is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Identity extracted from a verified token
///
/// Lives for the request that presented the token; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub raw_token: String,
}

/// Current Unix timestamp in seconds
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
