use anyhow::{Context, Result};
use registry_crypto::HashingParams;
use std::path::PathBuf;
use std::time::Duration;

/// Registry configuration
#[derive(Clone)]
pub struct Config {
    /// Path to RocksDB database
    pub database_path: PathBuf,

    /// Shared HS384 signing secret
    pub jwt_secret: Vec<u8>,

    /// Token lifetime; `None` issues tokens without expiration
    pub token_ttl: Option<Duration>,

    /// Argon2id work factor for new password hashes
    pub hashing: HashingParams,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("DATABASE_PATH")
            .unwrap_or_else(|| "./data/registry.db".to_string())
            .into();

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .context("JWT_SECRET environment variable required")?
            .into_bytes();

        let token_ttl = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("TOKEN_TTL_SECONDS is not a number: {raw:?}"))?;
                // 0 means tokens never expire
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        let defaults = HashingParams::default();
        let hashing = HashingParams {
            memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
            time_cost: parse_or(&lookup, "ARGON2_TIME_COST", defaults.time_cost)?,
            parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", defaults.parallelism)?,
        };

        Ok(Config {
            database_path,
            jwt_secret,
            token_ttl,
            hashing,
        })
    }
}

fn parse_or<F>(lookup: &F, name: &str, default: u32) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{name} is not a number: {raw:?}")),
        None => Ok(default),
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_path", &self.database_path)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("hashing", &self.hashing)
            .finish()
    }
}
