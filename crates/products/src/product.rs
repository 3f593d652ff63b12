use serde::{Deserialize, Serialize};

use tuxmart_core::{DomainResult, Entity, Sku};

/// A sellable item: SKU plus a human-readable description.
///
/// Immutable once built. Line items share a product through `Arc<Product>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    description: String,
}

impl Product {
    pub fn new(sku: Sku, description: impl Into<String>) -> Self {
        Self {
            sku,
            description: description.into(),
        }
    }

    /// Build a product from a raw SKU string, validating the SKU.
    pub fn parse(sku: &str, description: impl Into<String>) -> DomainResult<Self> {
        Ok(Self::new(sku.parse()?, description))
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.sku, self.description)
    }
}
