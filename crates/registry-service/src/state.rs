use anyhow::{Context, Result};
use registry_auth::StoreAuthService;
use registry_crypto::CredentialManager;
use registry_storage::{RegistryStore, RocksDbStorage};
use registry_tokens::TokenIssuer;
use std::sync::Arc;

use crate::config::Config;

/// Shared handles for everything built on the registry core
#[derive(Clone)]
pub struct RegistryState {
    pub store: Arc<RegistryStore<RocksDbStorage>>,
    pub auth: Arc<StoreAuthService<RocksDbStorage>>,
}

impl RegistryState {
    /// Open the database and build the services
    ///
    /// Fails if another process (or another `RegistryState`) holds the
    /// database directory.
    pub fn open(config: &Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let storage = RocksDbStorage::open(&config.database_path)
            .with_context(|| format!("opening store at {}", config.database_path.display()))?;
        let store = Arc::new(RegistryStore::new(Arc::new(storage)));

        let credentials =
            CredentialManager::new(config.hashing).context("configuring password hashing")?;
        let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl)
            .context("configuring token signing")?;

        let auth = Arc::new(StoreAuthService::new(
            Arc::clone(&store),
            credentials,
            tokens,
        ));

        tracing::info!(
            "Registry store opened at {}",
            config.database_path.display()
        );

        Ok(RegistryState { store, auth })
    }
}
