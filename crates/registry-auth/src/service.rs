//! Store-backed auth service.

use crate::{errors::*, traits::Authenticator};
use async_trait::async_trait;
use registry_crypto::CredentialManager;
use registry_storage::{RegistryStore, Storage, StorageError, User};
use registry_tokens::{Claims, TokenIssuer};
use std::sync::Arc;
use tracing::info;

/// Auth service keeping users in the registry store
///
/// Holds no state of its own beyond its collaborators; every user record it
/// reads or writes goes through [`RegistryStore`].
pub struct StoreAuthService<S: Storage> {
    store: Arc<RegistryStore<S>>,
    credentials: CredentialManager,
    tokens: TokenIssuer,
}

impl<S: Storage> StoreAuthService<S> {
    /// Create a new auth service
    pub fn new(
        store: Arc<RegistryStore<S>>,
        credentials: CredentialManager,
        tokens: TokenIssuer,
    ) -> Self {
        Self {
            store,
            credentials,
            tokens,
        }
    }

    /// Replace the plaintext password with its hash
    fn hash_user(&self, mut user: User) -> Result<User> {
        if user.password.is_empty() {
            return Err(AuthError::InvalidInput("password is empty".to_string()));
        }
        user.password = self.credentials.hash(&user.password)?;
        Ok(user)
    }
}

fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(AuthError::InvalidInput("username is empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl<S: Storage> Authenticator for StoreAuthService<S> {
    async fn register(&self, user: User) -> Result<()> {
        validate_username(&user.username)?;
        info!("Registering user: {}", user.username);

        let user = self.hash_user(user)?;

        // Insert-if-absent: of two concurrent registrations one gets UserExists.
        match self.store.create_user(&user).await {
            Ok(()) => {}
            Err(StorageError::AlreadyExists) => {
                return Err(AuthError::UserExists(user.username));
            }
            Err(e) => return Err(e.into()),
        }

        info!("User registered: {}", user.username);
        Ok(())
    }

    async fn update(&self, user: User, _old_password: &str) -> Result<()> {
        validate_username(&user.username)?;

        match self.store.get_user(&user.username).await {
            Ok(_) => {}
            Err(StorageError::NotFound) => return Err(AuthError::UserNotFound(user.username)),
            Err(e) => return Err(e.into()),
        }

        let user = self.hash_user(user)?;
        self.store.add_user(&user).await?;

        info!("User updated: {}", user.username);
        Ok(())
    }

    async fn login(&self, user: &User) -> Result<String> {
        let stored = match self.store.get_user(&user.username).await {
            Ok(stored) => Some(stored),
            Err(StorageError::NotFound) | Err(StorageError::InvalidKey(_)) => None,
            Err(e) => return Err(e.into()),
        };

        let valid = match &stored {
            Some(stored) => self.credentials.verify(&stored.password, &user.password),
            None => self.credentials.verify_dummy(&user.password),
        };

        // Unknown user and wrong password are indistinguishable from here on.
        let stored = match stored {
            Some(stored) if valid => stored,
            _ => {
                info!("Login rejected for user: {}", user.username);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(&stored.username)?;

        info!("User logged in: {}", stored.username);
        Ok(token)
    }

    fn verify(&self, token: &str) -> Option<Claims> {
        self.tokens.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_crypto::HashingParams;
    use registry_storage::{MemoryStorage, USERS};

    const SECRET: &[u8] = b"auth-test-secret-auth-test-secret-auth-test-secret";

    fn test_service() -> (StoreAuthService<MemoryStorage>, Arc<RegistryStore<MemoryStorage>>) {
        let store = Arc::new(RegistryStore::new(Arc::new(MemoryStorage::new())));
        let credentials = CredentialManager::new(HashingParams {
            memory_kib: 1024,
            time_cost: 1,
            parallelism: 1,
        })
        .unwrap();
        let tokens = TokenIssuer::new(SECRET, None).unwrap();

        (
            StoreAuthService::new(Arc::clone(&store), credentials, tokens),
            store,
        )
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let (auth, store) = test_service();

        auth.register(User::new("alice", "s3cret")).await.unwrap();

        let stored = store.get_user("alice").await.unwrap();
        assert_ne!(stored.password, "s3cret");
        assert!(stored.password.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_twice_fails() {
        let (auth, store) = test_service();

        auth.register(User::new("alice", "first")).await.unwrap();
        let first_hash = store.get_user("alice").await.unwrap().password;

        let result = auth.register(User::new("alice", "second")).await;
        assert!(matches!(result, Err(AuthError::UserExists(ref name)) if name == "alice"));

        // No mutation on conflict
        assert_eq!(store.get_user("alice").await.unwrap().password, first_hash);
        auth.login(&User::new("alice", "first")).await.unwrap();
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let (auth, store) = test_service();

        assert!(matches!(
            auth.register(User::new("", "pw")).await,
            Err(AuthError::InvalidInput(_))
        ));
        assert!(matches!(
            auth.register(User::new("alice", "")).await,
            Err(AuthError::InvalidInput(_))
        ));
        assert!(store.all_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_success() {
        let (auth, _) = test_service();
        auth.register(User::new("alice", "s3cret")).await.unwrap();

        let token = auth.login(&User::new("alice", "s3cret")).await.unwrap();

        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_user_look_the_same() {
        let (auth, _) = test_service();
        auth.register(User::new("alice", "s3cret")).await.unwrap();

        let wrong_password = auth
            .login(&User::new("alice", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = auth
            .login(&User::new("bob", "anything"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_login_with_empty_username_is_invalid_credentials() {
        let (auth, _) = test_service();

        assert!(matches!(
            auth.login(&User::new("", "pw")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_corrupt_record_is_storage_error() {
        let (auth, store) = test_service();
        store
            .storage()
            .put_raw(USERS.key("alice").unwrap(), vec![0xff])
            .await
            .unwrap();

        let err = auth.login(&User::new("alice", "pw")).await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Storage(StorageError::Deserialization(_))
        ));
        assert!(!err.is_credential_error());
    }

    #[tokio::test]
    async fn test_verify_login_token() {
        let (auth, _) = test_service();
        auth.register(User::new("alice", "s3cret")).await.unwrap();
        let token = auth.login(&User::new("alice", "s3cret")).await.unwrap();

        let claims = auth.verify(&token).expect("valid token");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.raw_token, token);

        assert!(auth.verify("not-a-token").is_none());
    }

    #[tokio::test]
    async fn test_update_rehashes() {
        let (auth, store) = test_service();
        auth.register(User::new("alice", "old")).await.unwrap();
        let old_hash = store.get_user("alice").await.unwrap().password;

        auth.update(User::new("alice", "new"), "old").await.unwrap();

        let stored = store.get_user("alice").await.unwrap();
        assert_ne!(stored.password, "new");
        assert_ne!(stored.password, old_hash);

        assert!(auth.login(&User::new("alice", "new")).await.is_ok());
        assert!(matches!(
            auth.login(&User::new("alice", "old")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_user_fails() {
        let (auth, store) = test_service();

        let result = auth.update(User::new("ghost", "pw"), "").await;

        assert!(matches!(result, Err(AuthError::UserNotFound(_))));
        assert!(store.all_users().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registration_has_one_winner() {
        let (auth, store) = test_service();
        let auth = Arc::new(auth);

        let mut handles = Vec::new();
        for i in 0..6 {
            let auth = Arc::clone(&auth);
            handles.push(tokio::spawn(async move {
                auth.register(User::new("carol", format!("password-{i}")))
                    .await
            }));
        }

        let mut winners = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => winners += 1,
                Err(AuthError::UserExists(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(conflicts, 5);
        assert_eq!(store.all_users().await.unwrap().len(), 1);
    }

    #[test]
    fn test_credential_errors_are_classified() {
        assert!(AuthError::InvalidCredentials.is_credential_error());
        assert!(AuthError::UserExists("a".into()).is_credential_error());
        assert!(!AuthError::Storage(StorageError::Database("io".into())).is_credential_error());
    }
}
