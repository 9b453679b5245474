use super::Cart;
use crate::core::Action;
use crate::model::Product;

/// Changes a [`CartReducer`](super::CartReducer) understands.
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    /// Add `quantity` units of `product`, merging with an existing line.
    /// A quantity of 0 counts as 1.
    Add { product: Product, quantity: u32 },

    /// Drop the line for `product_id`.
    Remove { product_id: String },

    /// Overwrite the quantity of the line for `product_id`. 0 removes it.
    SetQuantity { product_id: String, quantity: u32 },

    /// Empty the cart.
    Clear,

    /// Replace the whole cart, used when hydrating from storage.
    Load(Cart),
}

impl CartAction {
    pub fn add(product: Product, quantity: u32) -> Self {
        Self::Add { product, quantity }
    }

    pub fn remove(product_id: impl Into<String>) -> Self {
        Self::Remove {
            product_id: product_id.into(),
        }
    }

    pub fn set_quantity(product_id: impl Into<String>, quantity: u32) -> Self {
        Self::SetQuantity {
            product_id: product_id.into(),
            quantity,
        }
    }
}

impl Action for CartAction {
    fn name(&self) -> &str {
        match self {
            Self::Add { .. } => "add_item",
            Self::Remove { .. } => "remove_item",
            Self::SetQuantity { .. } => "update_quantity",
            Self::Clear => "clear_cart",
            Self::Load(_) => "load_cart",
        }
    }
}
