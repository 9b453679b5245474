//! The cart container handed to UI consumers.

use super::{Cart, CartAction, CartItem, CartReducer, CartSummary, CART_STORAGE_KEY};
use crate::model::Product;
use crate::persist::{PersistentStore, SnapshotFormat};
use crate::storage::KeyValueStore;

/// Persistent cart: read and update functions over a stored cart.
pub type CartStore<K> = PersistentStore<CartReducer, K>;

impl<K: KeyValueStore> PersistentStore<CartReducer, K> {
    /// Open the cart stored under [`CART_STORAGE_KEY`].
    pub fn open_cart(reducer: CartReducer, storage: K, format: SnapshotFormat) -> Self {
        Self::open(reducer, storage, CART_STORAGE_KEY, format)
    }

    pub fn cart(&self) -> &Cart {
        self.state()
    }

    pub fn items(&self) -> &[CartItem] {
        self.state().items()
    }

    pub fn add_item(&mut self, product: Product, quantity: u32) -> &Cart {
        self.dispatch(CartAction::add(product, quantity))
    }

    pub fn remove_item(&mut self, product_id: &str) -> &Cart {
        self.dispatch(CartAction::remove(product_id))
    }

    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> &Cart {
        self.dispatch(CartAction::set_quantity(product_id, quantity))
    }

    pub fn clear(&mut self) -> &Cart {
        self.dispatch(CartAction::Clear)
    }

    pub fn total_items(&self) -> u32 {
        self.state().total_items()
    }

    pub fn total_price(&self) -> f64 {
        self.state().total_price()
    }

    pub fn is_in_cart(&self, product_id: &str) -> bool {
        self.state().contains(product_id)
    }

    pub fn item_quantity(&self, product_id: &str) -> u32 {
        self.state().quantity_of(product_id)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_cart(self.state())
    }
}
