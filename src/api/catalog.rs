//! Product and category queries.

use super::{queries, ApiError, GraphQlClient};
use crate::model::{Category, Product, ProductFilters, ProductsPage};
use serde_json::json;

/// Featured products returned when no limit is given.
pub const DEFAULT_FEATURED_LIMIT: u32 = 8;

impl GraphQlClient {
    pub async fn products(&self, filters: &ProductFilters) -> Result<ProductsPage, ApiError> {
        self.query_field(queries::PRODUCTS, json!({ "filters": filters }), None, "products")
            .await
    }

    /// `None` when no product has this id.
    pub async fn product(&self, id: &str) -> Result<Option<Product>, ApiError> {
        self.query_field(queries::PRODUCT, json!({ "id": id }), None, "product")
            .await
    }

    /// Catalog query with `filters.search` replaced by `term`.
    pub async fn search(
        &self,
        term: &str,
        filters: &ProductFilters,
    ) -> Result<ProductsPage, ApiError> {
        let filters = ProductFilters {
            search: Some(term.to_string()),
            ..filters.clone()
        };
        self.products(&filters).await
    }

    pub async fn featured(&self, limit: Option<u32>) -> Result<Vec<Product>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_FEATURED_LIMIT);
        self.query_field(
            queries::FEATURED_PRODUCTS,
            json!({ "limit": limit }),
            None,
            "featuredProducts",
        )
        .await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.query_field(queries::CATEGORIES, json!({}), None, "categories")
            .await
    }

    pub async fn category(&self, id: &str) -> Result<Option<Category>, ApiError> {
        self.query_field(queries::CATEGORY, json!({ "id": id }), None, "category")
            .await
    }
}
