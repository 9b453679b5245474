//! Cart line id generation.
//!
//! Line ids are produced by a generator handed to the reducer, never by
//! module-level counters.

use crate::model::Product;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces a fresh, unique id for a new cart line.
pub trait ItemIdGenerator: Send + Sync {
    fn next_id(&self, product: &Product) -> String;
}

/// Random v4 UUIDs. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidItemIds;

impl ItemIdGenerator for UuidItemIds {
    fn next_id(&self, _product: &Product) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `<product id>-<n>` ids with `n` counting up from 1 per generator.
///
/// # Example
///
/// ```rust
/// use storefront::cart::{ItemIdGenerator, SequentialItemIds};
/// use storefront::model::Product;
///
/// let ids = SequentialItemIds::new();
/// let mug = Product::new("mug", "Mug", 8.0);
/// assert_eq!(ids.next_id(&mug), "mug-1");
/// assert_eq!(ids.next_id(&mug), "mug-2");
/// ```
#[derive(Debug)]
pub struct SequentialItemIds {
    next: AtomicU64,
}

impl SequentialItemIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialItemIds {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemIdGenerator for SequentialItemIds {
    fn next_id(&self, product: &Product) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", product.id, n)
    }
}
