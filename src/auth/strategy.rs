use crate::auth::jwt::AuthService;
use crate::auth::password::PasswordService;
use crate::db::{Store, User};
use crate::types::{AppError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// A pluggable authentication check: given the material a request carries,
/// produce the authenticated identity or a rejection.
///
/// Exactly two strategies exist — interactive password login and bearer
/// tokens — and each route selects one explicitly: the login handler runs
/// [`PasswordStrategy`], the protected-route middleware runs
/// [`BearerStrategy`].
#[async_trait]
pub trait AuthStrategy {
    /// The request material this strategy consumes.
    type Material;

    /// Authenticates the material, returning the resolved user record.
    async fn authenticate(&self, material: Self::Material) -> Result<User>;
}

/// A claimed username and plaintext password, as presented at login.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Interactive login: looks the user up by username and verifies the
/// presented password against the stored hash.
pub struct PasswordStrategy {
    store: Arc<Store>,
    passwords: Arc<PasswordService>,
}

impl PasswordStrategy {
    pub fn new(store: Arc<Store>, passwords: Arc<PasswordService>) -> Self {
        Self { store, passwords }
    }
}

#[async_trait]
impl AuthStrategy for PasswordStrategy {
    type Material = Credentials;

    async fn authenticate(&self, credentials: Credentials) -> Result<User> {
        // Unknown-user and wrong-password collapse into the same rejection,
        // so a caller can not probe which usernames are registered.
        let user = self
            .store
            .get_user_by_username(&credentials.username)
            .await?
            .ok_or(AppError::IncorrectCredentials)?;

        if !self
            .passwords
            .verify(&credentials.password, &user.password_hash)?
        {
            return Err(AppError::IncorrectCredentials);
        }

        Ok(user)
    }
}

/// Bearer-token check: verifies the presented JWT's signature and expiry,
/// then resolves its subject back to a live user record.
pub struct BearerStrategy {
    store: Arc<Store>,
    tokens: Arc<AuthService>,
}

impl BearerStrategy {
    pub fn new(store: Arc<Store>, tokens: Arc<AuthService>) -> Self {
        Self { store, tokens }
    }
}

#[async_trait]
impl AuthStrategy for BearerStrategy {
    /// Raw value of the `Authorization` header.
    type Material = String;

    async fn authenticate(&self, header: String) -> Result<User> {
        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthenticated("Expected a bearer token".to_string())
        })?;

        let claims = self.tokens.verify_token(token)?;

        // The subject may have deregistered after the token was issued; an
        // orphaned token is as invalid as a forged one.
        self.store
            .get_user_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::Unauthenticated("Invalid token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn create_test_store() -> Arc<Store> {
        Arc::new(Store::new_memory().await.expect("in-memory store"))
    }

    fn create_password_service() -> Arc<PasswordService> {
        Arc::new(PasswordService::new(8, 1, 1).expect("valid Argon2 parameters"))
    }

    fn create_token_service() -> Arc<AuthService> {
        Arc::new(AuthService::new(
            "test-secret-key-that-is-at-least-32-chars".to_string(),
            604800,
        ))
    }

    async fn register_test_user(
        store: &Store,
        passwords: &PasswordService,
        username: &str,
        password: &str,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let hash = passwords.hash(password).expect("should hash");
        store
            .create_user(&id, username, &hash, "user@example.com", None)
            .await
            .expect("should create user");
        id
    }

    #[tokio::test]
    async fn password_strategy_accepts_correct_credentials() {
        let store = create_test_store().await;
        let passwords = create_password_service();
        register_test_user(&store, &passwords, "alice", "s3cret!").await;

        let strategy = PasswordStrategy::new(store, passwords);
        let user = strategy
            .authenticate(Credentials {
                username: "alice".to_string(),
                password: "s3cret!".to_string(),
            })
            .await
            .expect("correct credentials should authenticate");

        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn password_strategy_rejections_are_uniform() {
        let store = create_test_store().await;
        let passwords = create_password_service();
        register_test_user(&store, &passwords, "alice", "s3cret!").await;

        let strategy = PasswordStrategy::new(store, passwords);

        let wrong_password = strategy
            .authenticate(Credentials {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        let unknown_user = strategy
            .authenticate(Credentials {
                username: "nobody".to_string(),
                password: "s3cret!".to_string(),
            })
            .await;

        // Both failures must be indistinguishable to the caller.
        assert!(matches!(wrong_password, Err(AppError::IncorrectCredentials)));
        assert!(matches!(unknown_user, Err(AppError::IncorrectCredentials)));
    }

    #[tokio::test]
    async fn bearer_strategy_resolves_subject() {
        let store = create_test_store().await;
        let passwords = create_password_service();
        let tokens = create_token_service();
        let id = register_test_user(&store, &passwords, "alice", "s3cret!").await;

        let issued = tokens.issue_token(&id).expect("should issue");

        let strategy = BearerStrategy::new(store, tokens);
        let user = strategy
            .authenticate(format!("Bearer {}", issued.token))
            .await
            .expect("valid token should authenticate");

        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn bearer_strategy_rejects_wrong_scheme() {
        let store = create_test_store().await;
        let tokens = create_token_service();

        let strategy = BearerStrategy::new(store, tokens);
        let result = strategy
            .authenticate("Basic dXNlcjpwYXNz".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }

    #[tokio::test]
    async fn bearer_strategy_rejects_deleted_subject() {
        let store = create_test_store().await;
        let passwords = create_password_service();
        let tokens = create_token_service();
        let id = register_test_user(&store, &passwords, "alice", "s3cret!").await;

        let issued = tokens.issue_token(&id).expect("should issue");
        store.delete_user(&id).await.expect("should delete");

        let strategy = BearerStrategy::new(store, tokens);
        let result = strategy
            .authenticate(format!("Bearer {}", issued.token))
            .await;

        assert!(
            matches!(result, Err(AppError::Unauthenticated(_))),
            "a token whose subject is gone must be rejected"
        );
    }
}
