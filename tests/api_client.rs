//! GraphQL client against an in-process gateway.

use axum::extract::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use storefront::api::{ApiError, GraphQlClient};
use storefront::model::{LoginCredentials, ProductFilters, ProfileUpdate};
use tokio::net::TcpListener;

const TOKEN: &str = "header.payload.signature";

fn product(id: &str, price: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "description": "",
        "price": price,
        "originalPrice": null,
        "image": format!("{id}.jpg"),
        "category": "Home",
        "categoryId": "c1",
        "stock": 5,
        "rating": 4.5,
        "reviews": 12,
        "featured": true,
        "active": true,
        "createdAt": "2026-01-01T00:00:00Z",
        "updatedAt": "2026-01-02T00:00:00Z"
    })
}

fn user() -> Value {
    json!({ "id": "u1", "email": "ana@example.com", "firstName": "Ana", "lastName": "Gómez", "role": "USER" })
}

async fn graphql(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let query = body["query"].as_str().unwrap_or_default();
    let variables = &body["variables"];
    let expected = format!("Bearer {TOKEN}");
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());

    let data = if query.contains("mutation Login") {
        if variables["input"]["password"] == "secret1" {
            json!({ "login": { "token": TOKEN, "user": user() } })
        } else {
            return Json(json!({ "data": null, "errors": [{ "message": "Invalid credentials" }] }))
                .into_response();
        }
    } else if query.contains("query GetProfile") {
        if !authorized {
            return Json(json!({ "errors": [{ "message": "Not authenticated" }] })).into_response();
        }
        json!({ "profile": user() })
    } else if query.contains("mutation UpdateProfile") {
        if !authorized {
            return Json(json!({ "errors": [{ "message": "Not authenticated" }] })).into_response();
        }
        let input = variables["input"].as_object().cloned().unwrap_or_default();
        let mut keys: Vec<&str> = input.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut updated = user();
        for (key, value) in &input {
            updated[key] = value.clone();
        }
        json!({ "updateProfile": updated, "inputKeys": keys })
    } else if query.contains("query GetProducts") {
        let search = variables["filters"]["search"].as_str().unwrap_or("");
        let products: Vec<Value> = [product("p1", 89_900.0), product("p2", 15_000.0)]
            .into_iter()
            .filter(|p| search.is_empty() || p["id"] == search)
            .collect();
        json!({ "products": {
            "total": products.len(),
            "products": products,
            "page": variables["filters"]["page"].as_u64().unwrap_or(1),
            "totalPages": 1,
            "hasMore": false
        }})
    } else if query.contains("query GetProduct(") {
        match variables["id"].as_str() {
            Some("p1") => json!({ "product": product("p1", 89_900.0) }),
            _ => json!({ "product": null }),
        }
    } else if query.contains("query GetFeaturedProducts") {
        let limit = variables["limit"].as_u64().unwrap_or(0) as usize;
        let products: Vec<Value> = (0..20).map(|i| product(&format!("f{i}"), 1000.0)).take(limit).collect();
        json!({ "featuredProducts": products })
    } else if query.contains("query GetCategories") {
        json!({ "categories": [{ "id": "c1", "name": "Home", "productsCount": 2, "active": true }] })
    } else if query.contains("mutation AddToFavorites") {
        if !authorized {
            return (StatusCode::UNAUTHORIZED, "missing token").into_response();
        }
        json!({ "addToFavorites": true })
    } else if query.contains("query GetFavorites") {
        json!({ "favorites": [product("p2", 15_000.0)] })
    } else if query.contains("boom") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "kaput").into_response();
    } else {
        json!({})
    };

    Json(json!({ "data": data })).into_response()
}

async fn serve() -> GraphQlClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/graphql", post(graphql));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    GraphQlClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let client = serve().await;
    let credentials = LoginCredentials {
        email: "ana@example.com".to_string(),
        password: "secret1".to_string(),
    };

    let response = client.login(&credentials).await.unwrap();

    assert_eq!(response.token, TOKEN);
    assert_eq!(response.user.full_name(), "Ana Gómez");
}

#[tokio::test]
async fn graphql_errors_surface_first_message() {
    let client = serve().await;
    let credentials = LoginCredentials {
        email: "ana@example.com".to_string(),
        password: "wrong!".to_string(),
    };

    let err = client.login(&credentials).await.unwrap_err();

    assert!(matches!(&err, ApiError::GraphQl { message } if message == "Invalid credentials"));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn profile_sends_bearer_token() {
    let client = serve().await;
    assert_eq!(client.profile(TOKEN).await.unwrap().id, "u1");
    assert!(client.profile("stale").await.is_err());
}

#[tokio::test]
async fn update_profile_sends_only_changed_fields() {
    let client = serve().await;
    let update = ProfileUpdate {
        last_name: Some("Ruiz".to_string()),
        ..ProfileUpdate::default()
    };

    let user = client.update_profile(&update, TOKEN).await.unwrap();
    assert_eq!(user.last_name, "Ruiz");
    assert_eq!(user.first_name, "Ana");

    let data = client
        .request(
            "mutation UpdateProfile($input: UpdateProfileInput!) { updateProfile(input: $input) { id } }",
            json!({ "input": update }),
            Some(TOKEN),
        )
        .await
        .unwrap();
    assert_eq!(data["inputKeys"], json!(["lastName"]));

    let err = client.update_profile(&update, "stale").await.unwrap_err();
    assert!(err.is_rejection());
}

#[tokio::test]
async fn logout_is_client_side() {
    let client = serve().await;
    assert!(client.logout().await.unwrap());
}

#[tokio::test]
async fn products_and_search() {
    let client = serve().await;

    let page = client
        .products(&ProductFilters {
            page: Some(2),
            ..ProductFilters::default()
        })
        .await
        .unwrap();
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.products[0].created_at.as_deref(), Some("2026-01-01T00:00:00Z"));

    let found = client
        .search("p2", &ProductFilters::default())
        .await
        .unwrap();
    assert_eq!(found.total, 1);
    assert_eq!(found.products[0].id, "p2");
}

#[tokio::test]
async fn missing_product_is_none() {
    let client = serve().await;
    assert_eq!(client.product("p1").await.unwrap().unwrap().price, 89_900.0);
    assert!(client.product("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn featured_defaults_to_eight() {
    let client = serve().await;
    assert_eq!(client.featured(None).await.unwrap().len(), 8);
    assert_eq!(client.featured(Some(3)).await.unwrap().len(), 3);
}

#[tokio::test]
async fn categories_decode() {
    let client = serve().await;
    let categories = client.categories().await.unwrap();
    assert_eq!(categories[0].products_count, 2);
}

#[tokio::test]
async fn favorites_are_token_bound() {
    let client = serve().await;

    assert!(client.favorites(TOKEN).add("p2").await.unwrap());
    assert_eq!(client.favorites(TOKEN).list().await.unwrap()[0].id, "p2");

    let err = client.favorites("bad").add("p2").await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 401, .. }));
}

#[tokio::test]
async fn http_failures_keep_status_and_body() {
    let client = serve().await;
    let err = client.request("query boom { x }", json!({}), None).await.unwrap_err();
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "kaput");
        }
        other => panic!("Expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn absent_field_is_missing_data() {
    let client = serve().await;
    let err = client.category("c1").await.unwrap_err();
    assert!(matches!(err, ApiError::MissingData(field) if field == "category"));
}

#[tokio::test]
async fn unreachable_gateway_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GraphQlClient::new(format!("http://{addr}"));
    let err = client.categories().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!err.is_rejection());
}
