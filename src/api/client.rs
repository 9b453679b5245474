//! GraphQL over HTTP.

use super::ApiError;
use crate::auth::bearer_header;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error};

/// API gateway used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Client for the storefront's GraphQL gateway.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone, Debug)]
pub struct GraphQlClient {
    http: Client,
    base_url: String,
    endpoint: String,
}

impl GraphQlClient {
    /// Client for the gateway at `base_url`; queries go to `<base_url>/graphql`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(Client::new(), base_url)
    }

    pub fn with_http(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let endpoint = format!("{base_url}/graphql");
        Self {
            http,
            base_url,
            endpoint,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one operation and return its `data` object.
    pub async fn request(
        &self,
        query: &str,
        variables: Value,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, bearer_header(token));
        }

        let response = request.send().await.map_err(|e| {
            error!(endpoint = %self.endpoint, error = %e, "request failed");
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "HTTP error");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let mut envelope: Value = response.json().await?;

        if let Some(errors) = envelope
            .get("errors")
            .and_then(Value::as_array)
            .filter(|errors| !errors.is_empty())
        {
            let message = errors[0]
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .unwrap_or("GraphQL error")
                .to_string();
            error!(count = errors.len(), message = %message, "GraphQL errors");
            return Err(ApiError::GraphQl { message });
        }

        match envelope.get_mut("data").map(Value::take) {
            Some(data) if !data.is_null() => {
                debug!(endpoint = %self.endpoint, "request succeeded");
                Ok(data)
            }
            _ => Err(ApiError::MissingData("data".to_string())),
        }
    }

    /// Send one operation and decode the top-level `field` of its data.
    pub async fn query_field<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        token: Option<&str>,
        field: &str,
    ) -> Result<T, ApiError> {
        let mut data = self.request(query, variables, token).await?;
        let value = data
            .get_mut(field)
            .map(Value::take)
            .ok_or_else(|| ApiError::MissingData(field.to_string()))?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for GraphQlClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_derived_from_base_url() {
        let client = GraphQlClient::new("https://shop.example.com/");
        assert_eq!(client.base_url(), "https://shop.example.com");
        assert_eq!(client.endpoint(), "https://shop.example.com/graphql");
    }

    #[test]
    fn default_points_at_local_gateway() {
        assert_eq!(
            GraphQlClient::default().endpoint(),
            "http://localhost:4000/graphql"
        );
    }
}
