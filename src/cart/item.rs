//! Cart lines.

use crate::model::Product;
use serde::{Deserialize, Serialize};

/// One line of the cart: a product snapshot and how many of it.
///
/// The unit price is copied from the product when the line is created and
/// stays fixed afterwards. `total_price` is always `quantity * price`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    id: String,
    product_id: String,
    product: Product,
    quantity: u32,
    price: f64,
    total_price: f64,
}

impl CartItem {
    pub fn new(id: impl Into<String>, product: Product, quantity: u32) -> Self {
        let price = product.price;
        Self {
            id: id.into(),
            product_id: product.id.clone(),
            product,
            quantity,
            price,
            total_price: line_total(quantity, price),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price at the time the line was added
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = line_total(quantity, self.price);
    }

    /// Same line with `total_price` recomputed from quantity and price.
    pub(crate) fn recomputed(mut self) -> Self {
        self.total_price = line_total(self.quantity, self.price);
        self
    }
}

fn line_total(quantity: u32, price: f64) -> f64 {
    f64::from(quantity) * price
}
