use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;
use tuxmart_core::{DomainError, DomainResult, Quantity, Sku};
use tuxmart_products::Product;

use crate::service::InventoryService;

/// In-memory on-hand quantities keyed by SKU.
///
/// Intended for tests/dev. Stock never goes negative: a deduction that would
/// overdraw a SKU is rejected and leaves the level unchanged.
#[derive(Debug, Default)]
pub struct InMemoryStockBook {
    levels: RwLock<HashMap<Sku, Quantity>>,
}

impl InMemoryStockBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add received stock for a SKU, registering it if unknown.
    ///
    /// Returns the new on-hand level.
    pub fn receive(&self, sku: Sku, quantity: Quantity) -> DomainResult<Quantity> {
        if quantity <= Quantity::ZERO {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let mut levels = self
            .levels
            .write()
            .map_err(|_| DomainError::unavailable("stock book lock poisoned"))?;

        let level = levels.entry(sku).or_insert(Quantity::ZERO);
        *level = level
            .checked_add(quantity)
            .ok_or_else(|| DomainError::validation("stock level overflows"))?;
        Ok(*level)
    }

    /// Current on-hand level; `None` for SKUs never received.
    pub fn on_hand(&self, sku: &Sku) -> Option<Quantity> {
        self.levels.read().ok()?.get(sku).copied()
    }
}

impl InventoryService for InMemoryStockBook {
    fn deduct_stock(&self, product: &Product, quantity: Quantity) -> DomainResult<Quantity> {
        if quantity <= Quantity::ZERO {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let mut levels = self
            .levels
            .write()
            .map_err(|_| DomainError::unavailable("stock book lock poisoned"))?;

        let level = levels
            .get_mut(product.sku())
            .ok_or_else(DomainError::not_found)?;

        let remaining = *level - quantity;
        if remaining < Quantity::ZERO {
            return Err(DomainError::invariant("stock cannot go negative"));
        }

        *level = remaining;
        debug!(sku = %product.sku(), %quantity, %remaining, "stock deducted");
        Ok(remaining)
    }
}
