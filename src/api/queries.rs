//! GraphQL operation documents.

pub const LOGIN: &str = r#"
mutation Login($input: LoginInput!) {
  login(input: $input) {
    token
    user { id email firstName lastName role }
  }
}"#;

pub const REGISTER: &str = r#"
mutation Register($input: RegisterInput!) {
  register(input: $input) {
    token
    user { id email firstName lastName role }
  }
}"#;

pub const PROFILE: &str = r#"
query GetProfile {
  profile { id email firstName lastName role isActive createdAt updatedAt }
}"#;

pub const UPDATE_PROFILE: &str = r#"
mutation UpdateProfile($input: UpdateProfileInput!) {
  updateProfile(input: $input) { id email firstName lastName role isActive createdAt updatedAt }
}"#;

pub const PRODUCTS: &str = r#"
query GetProducts($filters: ProductFiltersInput) {
  products(filters: $filters) {
    products {
      id name description price originalPrice discount image images
      category categoryId stock rating reviews featured active createdAt updatedAt
    }
    total page totalPages hasMore
  }
}"#;

pub const PRODUCT: &str = r#"
query GetProduct($id: ID!) {
  product(id: $id) {
    id name description price originalPrice discount image images
    category categoryId stock rating reviews featured active createdAt updatedAt
  }
}"#;

pub const FEATURED_PRODUCTS: &str = r#"
query GetFeaturedProducts($limit: Int) {
  featuredProducts(limit: $limit) {
    id name description price originalPrice discount image category rating reviews featured
  }
}"#;

pub const CATEGORIES: &str = r#"
query GetCategories {
  categories { id name description icon image productsCount active }
}"#;

pub const CATEGORY: &str = r#"
query GetCategory($id: ID!) {
  category(id: $id) { id name description icon image productsCount active }
}"#;

pub const ADD_FAVORITE: &str = r#"
mutation AddToFavorites($productId: ID!) {
  addToFavorites(productId: $productId)
}"#;

pub const REMOVE_FAVORITE: &str = r#"
mutation RemoveFromFavorites($productId: ID!) {
  removeFromFavorites(productId: $productId)
}"#;

pub const FAVORITES: &str = r#"
query GetFavorites {
  favorites { id name description price originalPrice discount image category rating reviews }
}"#;
