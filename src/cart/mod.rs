//! Shopping cart state.
//!
//! The cart is an immutable value. Every change goes through
//! [`CartReducer`], which produces a new cart from the current one and a
//! [`CartAction`]. `total_items` and `total_price` are caches of values
//! derivable from the items; every constructor keeps them in sync.
//!
//! # Example
//!
//! ```rust
//! use storefront::cart::{CartAction, CartReducer, SequentialItemIds};
//! use storefront::core::Reducer;
//! use storefront::model::Product;
//!
//! let reducer = CartReducer::new().with_ids(SequentialItemIds::new());
//! let lamp = Product::new("lamp", "Desk lamp", 10.0);
//!
//! let cart = reducer.reduce(&reducer.initial(), CartAction::add(lamp.clone(), 2));
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price(), 20.0);
//!
//! let cart = reducer.reduce(&cart, CartAction::add(lamp, 1));
//! assert_eq!(cart.items().len(), 1);
//! assert_eq!(cart.total_price(), 30.0);
//!
//! let cart = reducer.reduce(&cart, CartAction::remove("lamp"));
//! assert!(cart.is_empty());
//! ```

mod action;
mod ids;
mod item;
mod reducer;
mod store;
mod summary;

pub use action::CartAction;
pub use ids::{ItemIdGenerator, SequentialItemIds, UuidItemIds};
pub use item::CartItem;
pub use reducer::CartReducer;
pub use store::CartStore;
pub use summary::{CartSummary, TAX_RATE};

use crate::core::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage key the cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "ecommerce_cart";

/// Client-side aggregate of selected purchase items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    total_items: u32,
    total_price: f64,
    updated_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty(DateTime::<Utc>::default())
    }
}

impl Cart {
    /// Create an empty cart stamped at `at`.
    pub fn empty(at: DateTime<Utc>) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: 0.0,
            updated_at: at,
        }
    }

    /// Build a cart from lines, computing the aggregates.
    ///
    /// Lines are taken as given; see [`Cart::normalized`] for repairing
    /// untrusted input.
    pub fn from_items(items: Vec<CartItem>, at: DateTime<Utc>) -> Self {
        let total_items = items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.quantity()));
        let total_price = items.iter().map(CartItem::total_price).sum();
        Self {
            items,
            total_items,
            total_price,
            updated_at: at,
        }
    }

    /// Repair a cart that did not come from the reducer.
    ///
    /// Drops zero-quantity lines, merges lines sharing a product id into the
    /// first one, recomputes line totals and aggregates. The timestamp is kept.
    pub fn normalized(self) -> Self {
        let mut items: Vec<CartItem> = Vec::with_capacity(self.items.len());
        for item in self.items {
            if item.quantity() == 0 {
                continue;
            }
            match items
                .iter()
                .position(|existing| existing.product_id() == item.product_id())
            {
                Some(pos) => {
                    let quantity = items[pos].quantity().saturating_add(item.quantity());
                    items[pos].set_quantity(quantity);
                }
                None => items.push(item.recomputed()),
            }
        }
        Self::from_items(items, self.updated_at)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of line quantities
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Sum of line totals
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|item| item.product_id() == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.item(product_id).is_some()
    }

    /// Quantity of `product_id` in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.item(product_id).map_or(0, CartItem::quantity)
    }

    /// Check that the cached aggregates and line totals match the lines and
    /// that no product appears twice.
    pub fn is_consistent(&self) -> bool {
        let recomputed = Self::from_items(self.items.clone(), self.updated_at);
        let lines_ok = self.items.iter().all(|item| {
            approx_eq(item.total_price(), f64::from(item.quantity()) * item.price())
        });
        let unique = self.items.iter().enumerate().all(|(i, item)| {
            self.items[..i]
                .iter()
                .all(|earlier| earlier.product_id() != item.product_id())
        });

        lines_ok
            && unique
            && recomputed.total_items == self.total_items
            && approx_eq(recomputed.total_price, self.total_price)
    }
}

impl State for Cart {
    fn name(&self) -> &str {
        if self.items.is_empty() {
            "Empty"
        } else {
            "Filled"
        }
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
