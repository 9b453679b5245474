//! Checkout totals shown next to the cart.

use super::Cart;
use serde::Serialize;

/// Sales tax applied on top of the cart subtotal.
pub const TAX_RATE: f64 = 0.19;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: f64,
    /// Shipping is free for every order.
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl CartSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.total_price();
        let shipping = 0.0;
        let tax = subtotal * TAX_RATE;
        Self {
            item_count: cart.total_items(),
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping == 0.0
    }
}
