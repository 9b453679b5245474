//! Operations that need a signed-in user.

use super::{queries, ApiError, GraphQlClient};
use crate::model::Product;
use serde_json::json;

/// A client bound to a bearer token.
#[derive(Clone, Debug)]
pub struct Favorites<'a> {
    client: &'a GraphQlClient,
    token: String,
}

impl GraphQlClient {
    pub fn favorites(&self, token: impl Into<String>) -> Favorites<'_> {
        Favorites {
            client: self,
            token: token.into(),
        }
    }
}

impl Favorites<'_> {
    pub async fn add(&self, product_id: &str) -> Result<bool, ApiError> {
        self.client
            .query_field(
                queries::ADD_FAVORITE,
                json!({ "productId": product_id }),
                Some(self.token.as_str()),
                "addToFavorites",
            )
            .await
    }

    pub async fn remove(&self, product_id: &str) -> Result<bool, ApiError> {
        self.client
            .query_field(
                queries::REMOVE_FAVORITE,
                json!({ "productId": product_id }),
                Some(self.token.as_str()),
                "removeFromFavorites",
            )
            .await
    }

    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.client
            .query_field(queries::FAVORITES, json!({}), Some(self.token.as_str()), "favorites")
            .await
    }
}
