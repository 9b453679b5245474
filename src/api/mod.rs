//! GraphQL API client.
//!
//! Every operation is a POST of `{"query", "variables"}` to the gateway's
//! `/graphql` endpoint, optionally carrying a bearer token. Failures are
//! logged and returned to the caller; nothing is retried.

mod auth;
mod catalog;
mod client;
mod error;
mod favorites;
mod format;
mod queries;

pub use catalog::DEFAULT_FEATURED_LIMIT;
pub use client::{GraphQlClient, DEFAULT_API_URL};
pub use error::ApiError;
pub use favorites::Favorites;
pub use format::{discount_percent, format_price};
