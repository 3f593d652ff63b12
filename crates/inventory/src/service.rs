use std::sync::Arc;

use tuxmart_core::{DomainResult, Quantity};
use tuxmart_products::Product;

/// Keeps stock levels per product.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait InventoryService: Send + Sync {
    /// Deduct `quantity` of `product` from stock.
    ///
    /// Returns the resulting stock level. What counts as a failure (unknown
    /// product, insufficient stock) is up to the implementation.
    fn deduct_stock(&self, product: &Product, quantity: Quantity) -> DomainResult<Quantity>;
}

impl<S> InventoryService for Arc<S>
where
    S: InventoryService + ?Sized,
{
    fn deduct_stock(&self, product: &Product, quantity: Quantity) -> DomainResult<Quantity> {
        (**self).deduct_stock(product, quantity)
    }
}
