//! Storefront: client-side state for an e-commerce shop
//!
//! The shopping cart and the signed-in session are plain data driven by pure
//! reducers. Everything that touches the outside world (the key-value store
//! that keeps state across restarts, the GraphQL gateway) sits in a thin shell
//! around them.
//!
//! # Core Concepts
//!
//! - **Reducer**: pure `(state, action) -> state` function, see [`core::Reducer`]
//! - **Store**: single owner of the current state, see [`core::Store`]
//! - **Hydration**: restoring a reducer's state from a stored snapshot, see
//!   [`persist::PersistentStore`]
//!
//! # Example
//!
//! ```rust
//! use storefront::cart::{CartStore, CartReducer};
//! use storefront::model::Product;
//! use storefront::persist::SnapshotFormat;
//! use storefront::storage::MemoryStore;
//!
//! let storage = MemoryStore::new();
//! let mut cart = CartStore::open_cart(CartReducer::new(), storage.clone(), SnapshotFormat::Json);
//!
//! cart.add_item(Product::new("p1", "Lamp", 10.0), 2);
//! cart.add_item(Product::new("p1", "Lamp", 10.0), 1);
//! assert_eq!(cart.total_items(), 3);
//! assert_eq!(cart.total_price(), 30.0);
//!
//! // A second store over the same storage picks the cart back up.
//! let reopened = CartStore::open_cart(CartReducer::new(), storage, SnapshotFormat::Json);
//! assert_eq!(reopened.item_quantity("p1"), 3);
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod config;
pub mod core;
pub mod model;
pub mod persist;
pub mod session;
pub mod storage;
pub mod telemetry;
pub mod validation;

// Re-export commonly used types
pub use crate::api::{ApiError, GraphQlClient};
pub use crate::cart::{Cart, CartAction, CartItem, CartReducer, CartStore};
pub use crate::config::StorefrontConfig;
pub use crate::core::{Reducer, State, Store};
pub use crate::persist::{PersistentStore, SnapshotFormat};
pub use crate::session::AuthSession;
