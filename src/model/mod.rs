//! Storefront domain data: catalog, accounts and orders.

mod order;
mod product;
mod user;

pub use order::{Address, Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
pub use product::{Category, Product, ProductFilters, ProductsPage, SortBy, SortOrder};
pub use user::{AuthResponse, LoginCredentials, ProfileUpdate, RegisterData, Role, User};

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the field's default.
///
/// Binary snapshots never encode a null, so non-self-describing formats
/// decode the plain value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    if deserializer.is_human_readable() {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    } else {
        T::deserialize(deserializer)
    }
}
