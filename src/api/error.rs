//! API error types.

use thiserror::Error;

/// Errors surfaced by the GraphQL client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a non-success status
    #[error("HTTP error! status: {status}. {body}")]
    Http { status: u16, body: String },

    /// The endpoint answered, but reported GraphQL errors
    #[error("{message}")]
    GraphQl { message: String },

    /// The response had no value where one was expected
    #[error("Response carried no '{0}'")]
    MissingData(String),

    /// The request never completed
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the server refused the request itself, as opposed to the
    /// network or the response format failing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::GraphQl { .. })
    }
}
