//! Signed-in session: the auth reducer plus the side effects around it.
//!
//! The token and the user profile are kept in a [`KeyValueStore`] under
//! [`TOKEN_KEY`] and [`USER_KEY`] so a session survives restarts.

mod error;

pub use error::SessionError;

use crate::api::ApiError;
use crate::auth::{bearer_header, is_token_valid, AuthAction, AuthReducer, AuthState};
use crate::core::{Clock, Store, SystemClock};
use crate::model::{AuthResponse, LoginCredentials, RegisterData, User};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user_data";

/// Remote side of authentication.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError>;

    async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError>;

    async fn profile(&self, token: &str) -> Result<User, ApiError>;
}

pub struct AuthSession<B, K> {
    backend: B,
    storage: K,
    clock: Arc<dyn Clock>,
    store: Store<AuthReducer>,
}

impl<B: AuthBackend, K: KeyValueStore> AuthSession<B, K> {
    /// Signed-out session. Call [`restore`](Self::restore) to pick up a
    /// stored one.
    pub fn new(backend: B, storage: K) -> Self {
        Self {
            backend,
            storage,
            clock: Arc::new(SystemClock),
            store: Store::new(AuthReducer),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &AuthState {
        self.store.state()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// `Authorization` header for the current token.
    pub fn auth_header(&self) -> Option<String> {
        self.state().token.as_deref().map(bearer_header)
    }

    /// Re-establish a stored session.
    ///
    /// An unexpired token is trusted as is. An expired one is checked
    /// against the backend and the whole stored session is dropped if the
    /// backend rejects it.
    pub async fn restore(&mut self) -> &AuthState {
        let (token, user) = match (self.stored_token(), self.stored_user()) {
            (Some(token), Some(user)) => (token, user),
            _ => {
                debug!("no stored session");
                return self.store.state();
            }
        };

        if is_token_valid(&token, self.clock.now()) {
            debug!(user = %user.id, "restored session");
            return self.store.dispatch(AuthAction::Succeeded { user, token });
        }

        match self.backend.profile(&token).await {
            Ok(user) => {
                self.save_user(&user);
                info!(user = %user.id, "revalidated expired session");
                self.store.dispatch(AuthAction::Succeeded { user, token })
            }
            Err(e) => {
                if e.is_rejection() {
                    warn!(error = %e, "stored session rejected");
                } else {
                    warn!(error = %e, "could not revalidate stored session");
                }
                self.clear_storage();
                self.store.state()
            }
        }
    }

    pub async fn login(&mut self, credentials: &LoginCredentials) -> Result<User, SessionError> {
        self.store.dispatch(AuthAction::Start);
        let result = self.backend.login(credentials).await;
        self.complete(result)
    }

    pub async fn register(&mut self, data: &RegisterData) -> Result<User, SessionError> {
        self.store.dispatch(AuthAction::Start);
        let result = self.backend.register(data).await;
        self.complete(result)
    }

    /// Reload the profile for the current token.
    ///
    /// Returns `None` when signed out or when the backend rejects the
    /// token; a rejected token also ends the session.
    pub async fn refresh_profile(&mut self) -> Option<User> {
        let token = self.state().token.clone()?;
        match self.backend.profile(&token).await {
            Ok(user) => {
                self.save_user(&user);
                self.store.dispatch(AuthAction::Succeeded {
                    user: user.clone(),
                    token,
                });
                Some(user)
            }
            Err(e) => {
                warn!(error = %e, "profile refresh failed");
                self.logout();
                None
            }
        }
    }

    pub fn logout(&mut self) {
        self.clear_storage();
        self.store.dispatch(AuthAction::Logout);
        info!("signed out");
    }

    pub fn clear_error(&mut self) {
        self.store.dispatch(AuthAction::ClearError);
    }

    fn complete(&mut self, result: Result<AuthResponse, ApiError>) -> Result<User, SessionError> {
        match result {
            Ok(AuthResponse { token, user }) => {
                if let Err(e) = self.storage.set(TOKEN_KEY, token.as_bytes()) {
                    warn!(error = %e, "failed to save token");
                }
                self.save_user(&user);
                info!(user = %user.id, "signed in");
                self.store.dispatch(AuthAction::Succeeded {
                    user: user.clone(),
                    token,
                });
                Ok(user)
            }
            Err(e) => {
                self.store.dispatch(AuthAction::Failed(e.to_string()));
                Err(e.into())
            }
        }
    }

    fn stored_token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(bytes) => bytes.and_then(|b| String::from_utf8(b).ok()),
            Err(e) => {
                warn!(error = %e, "failed to read token");
                None
            }
        }
    }

    fn stored_user(&self) -> Option<User> {
        let bytes = match self.storage.get(USER_KEY) {
            Ok(bytes) => bytes?,
            Err(e) => {
                warn!(error = %e, "failed to read user");
                return None;
            }
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| warn!(error = %e, "discarding unreadable user record"))
            .ok()
    }

    fn save_user(&self, user: &User) {
        let result = serde_json::to_vec(user)
            .map_err(SessionError::from)
            .and_then(|bytes| Ok(self.storage.set(USER_KEY, &bytes)?));
        if let Err(e) = result {
            warn!(error = %e, "failed to save user");
        }
    }

    fn clear_storage(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "failed to clear stored session");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::make_token;
    use crate::core::FixedClock;
    use crate::model::Role;
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            role: Role::User,
            is_active: Some(true),
            created_at: None,
            updated_at: None,
        }
    }

    #[derive(Default)]
    struct MockBackend {
        reject: bool,
        profile_calls: Mutex<u32>,
    }

    impl MockBackend {
        fn rejecting() -> Self {
            Self {
                reject: true,
                ..Self::default()
            }
        }

        fn respond(&self) -> Result<AuthResponse, ApiError> {
            if self.reject {
                Err(ApiError::GraphQl {
                    message: "Invalid credentials".to_string(),
                })
            } else {
                Ok(AuthResponse {
                    token: make_token(4_102_444_800),
                    user: user("u1"),
                })
            }
        }
    }

    #[async_trait]
    impl AuthBackend for MockBackend {
        async fn login(&self, _: &LoginCredentials) -> Result<AuthResponse, ApiError> {
            self.respond()
        }

        async fn register(&self, _: &RegisterData) -> Result<AuthResponse, ApiError> {
            self.respond()
        }

        async fn profile(&self, _: &str) -> Result<User, ApiError> {
            *self.profile_calls.lock() += 1;
            self.respond().map(|r| r.user)
        }
    }

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        ))
    }

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "u1@example.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    fn store_session(storage: &MemoryStore, token: &str) {
        storage.set(TOKEN_KEY, token.as_bytes()).unwrap();
        storage
            .set(USER_KEY, &serde_json::to_vec(&user("u1")).unwrap())
            .unwrap();
    }

    #[tokio::test]
    async fn login_saves_session() {
        let storage = MemoryStore::new();
        let mut session = AuthSession::new(MockBackend::default(), storage.clone());

        let user = session.login(&credentials()).await.unwrap();

        assert_eq!(user.id, "u1");
        assert!(session.state().is_authenticated);
        assert!(!session.state().is_loading);
        assert!(session.auth_header().unwrap().starts_with("Bearer "));
        assert!(storage.get(TOKEN_KEY).unwrap().is_some());
        assert!(storage.get(USER_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn failed_login_records_error() {
        let storage = MemoryStore::new();
        let mut session = AuthSession::new(MockBackend::rejecting(), storage.clone());

        let err = session.login(&credentials()).await.unwrap_err();

        assert!(matches!(err, SessionError::Api(_)));
        assert_eq!(session.state().error.as_deref(), Some("Invalid credentials"));
        assert!(!session.state().is_authenticated);
        assert!(storage.is_empty());

        session.clear_error();
        assert!(session.state().error.is_none());
    }

    #[tokio::test]
    async fn register_signs_in() {
        let mut session = AuthSession::new(MockBackend::default(), MemoryStore::new());
        let data = RegisterData {
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "u1@example.com".to_string(),
            password: "secret1".to_string(),
        };

        session.register(&data).await.unwrap();
        assert!(session.state().is_authenticated);
    }

    #[tokio::test]
    async fn restore_trusts_unexpired_token() {
        let storage = MemoryStore::new();
        store_session(&storage, &make_token(4_102_444_800));
        let backend = MockBackend::default();
        let mut session = AuthSession::new(backend, storage).with_clock(clock());

        let state = session.restore().await;

        assert!(state.is_authenticated);
        assert_eq!(*session.backend().profile_calls.lock(), 0);
    }

    #[tokio::test]
    async fn restore_revalidates_expired_token() {
        let storage = MemoryStore::new();
        store_session(&storage, &make_token(1_000_000_000));
        let mut session =
            AuthSession::new(MockBackend::default(), storage).with_clock(clock());

        assert!(session.restore().await.is_authenticated);
        assert_eq!(*session.backend().profile_calls.lock(), 1);
    }

    #[tokio::test]
    async fn restore_drops_rejected_session() {
        let storage = MemoryStore::new();
        store_session(&storage, &make_token(1_000_000_000));
        let mut session =
            AuthSession::new(MockBackend::rejecting(), storage.clone()).with_clock(clock());

        assert!(!session.restore().await.is_authenticated);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn restore_needs_token_and_user() {
        let storage = MemoryStore::new();
        storage
            .set(TOKEN_KEY, make_token(4_102_444_800).as_bytes())
            .unwrap();
        let mut session = AuthSession::new(MockBackend::default(), storage);

        assert!(!session.restore().await.is_authenticated);
    }

    #[tokio::test]
    async fn refresh_failure_signs_out() {
        let storage = MemoryStore::new();
        store_session(&storage, &make_token(4_102_444_800));
        let mut session =
            AuthSession::new(MockBackend::rejecting(), storage.clone()).with_clock(clock());
        session.restore().await;
        assert!(session.state().is_authenticated);

        assert!(session.refresh_profile().await.is_none());
        assert!(!session.state().is_authenticated);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn refresh_without_session_is_none() {
        let mut session = AuthSession::new(MockBackend::default(), MemoryStore::new());
        assert!(session.refresh_profile().await.is_none());
        assert_eq!(*session.backend().profile_calls.lock(), 0);
    }

    #[tokio::test]
    async fn logout_clears_everything() {
        let storage = MemoryStore::new();
        let mut session = AuthSession::new(MockBackend::default(), storage.clone());
        session.login(&credentials()).await.unwrap();

        session.logout();

        assert_eq!(session.state(), &AuthState::default());
        assert!(session.auth_header().is_none());
        assert!(storage.is_empty());
    }
}
