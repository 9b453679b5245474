//! Account operations.

use super::{queries, ApiError, GraphQlClient};
use crate::model::{AuthResponse, LoginCredentials, ProfileUpdate, RegisterData, User};
use crate::session::AuthBackend;
use async_trait::async_trait;
use serde_json::json;

impl GraphQlClient {
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.query_field(queries::LOGIN, json!({ "input": credentials }), None, "login")
            .await
    }

    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        self.query_field(queries::REGISTER, json!({ "input": data }), None, "register")
            .await
    }

    pub async fn profile(&self, token: &str) -> Result<User, ApiError> {
        self.query_field(queries::PROFILE, json!({}), Some(token), "profile")
            .await
    }

    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
        token: &str,
    ) -> Result<User, ApiError> {
        self.query_field(
            queries::UPDATE_PROFILE,
            json!({ "input": update }),
            Some(token),
            "updateProfile",
        )
        .await
    }

    /// Sign-out is client-side only: the server keeps no session to end.
    pub async fn logout(&self) -> Result<bool, ApiError> {
        Ok(true)
    }
}

#[async_trait]
impl AuthBackend for GraphQlClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        GraphQlClient::login(self, credentials).await
    }

    async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        GraphQlClient::register(self, data).await
    }

    async fn profile(&self, token: &str) -> Result<User, ApiError> {
        GraphQlClient::profile(self, token).await
    }
}
