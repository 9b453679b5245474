//! The cart state-transition table.

use super::{Cart, CartAction, CartItem, ItemIdGenerator, UuidItemIds};
use crate::core::{Clock, Hydrate, Reducer, SystemClock};
use crate::model::Product;
use std::sync::Arc;

/// Pure cart reducer.
///
/// Carries the id generator for new lines and the clock used to stamp
/// `updated_at`. Cloning shares both.
#[derive(Clone)]
pub struct CartReducer {
    ids: Arc<dyn ItemIdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CartReducer {
    /// Reducer with UUID line ids and the system clock.
    pub fn new() -> Self {
        Self {
            ids: Arc::new(UuidItemIds),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_ids(mut self, ids: impl ItemIdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    fn add(&self, state: &Cart, product: Product, quantity: u32) -> Cart {
        let quantity = quantity.max(1);
        let mut items = state.items().to_vec();

        match items
            .iter()
            .position(|item| item.product_id() == product.id)
        {
            Some(pos) => {
                let merged = items[pos].quantity().saturating_add(quantity);
                items[pos].set_quantity(merged);
            }
            None => {
                let id = self.ids.next_id(&product);
                items.push(CartItem::new(id, product, quantity));
            }
        }

        Cart::from_items(items, self.clock.now())
    }

    fn remove(&self, state: &Cart, product_id: &str) -> Cart {
        let items = state
            .items()
            .iter()
            .filter(|item| item.product_id() != product_id)
            .cloned()
            .collect();
        Cart::from_items(items, self.clock.now())
    }

    fn set_quantity(&self, state: &Cart, product_id: &str, quantity: u32) -> Cart {
        if quantity == 0 {
            return self.remove(state, product_id);
        }

        let items = state
            .items()
            .iter()
            .cloned()
            .map(|mut item| {
                if item.product_id() == product_id {
                    item.set_quantity(quantity);
                }
                item
            })
            .collect();
        Cart::from_items(items, self.clock.now())
    }
}

impl Default for CartReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartReducer").finish_non_exhaustive()
    }
}

impl Reducer for CartReducer {
    type State = Cart;
    type Action = CartAction;

    fn initial(&self) -> Cart {
        Cart::empty(self.clock.now())
    }

    fn reduce(&self, state: &Cart, action: CartAction) -> Cart {
        match action {
            CartAction::Add { product, quantity } => self.add(state, product, quantity),
            CartAction::Remove { product_id } => self.remove(state, &product_id),
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(state, &product_id, quantity),
            CartAction::Clear => Cart::empty(self.clock.now()),
            CartAction::Load(snapshot) => snapshot.normalized(),
        }
    }
}

impl Hydrate for CartReducer {
    fn hydrate(snapshot: Cart) -> CartAction {
        CartAction::Load(snapshot)
    }
}
