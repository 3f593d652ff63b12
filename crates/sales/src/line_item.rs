use std::sync::Arc;

use serde::{Deserialize, Serialize};

use tuxmart_core::{Amount, DomainError, DomainResult, Quantity, Sku, ValueObject};
use tuxmart_products::Product;

/// One line of an order: a product, how many, and at what price.
///
/// `extended_price` is always `unit_price * quantity`. It is computed by
/// [`LineItem::new`]; any externally supplied value is checked against the
/// computed one. Quantities and prices are otherwise unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LineItemRecord")]
pub struct LineItem {
    product: Arc<Product>,
    quantity: Quantity,
    unit_price: Amount,
    extended_price: Amount,
}

/// Wire shape of a line item before the extended price is checked.
#[derive(Deserialize)]
struct LineItemRecord {
    product: Arc<Product>,
    quantity: Quantity,
    unit_price: Amount,
    extended_price: Option<Amount>,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = DomainError;

    fn try_from(record: LineItemRecord) -> Result<Self, Self::Error> {
        match record.extended_price {
            Some(extended_price) => Self::with_extended_price(
                record.product,
                record.quantity,
                record.unit_price,
                extended_price,
            ),
            None => Self::new(record.product, record.quantity, record.unit_price),
        }
    }
}

impl LineItem {
    /// Build a line item, computing its extended price.
    ///
    /// Fails only if `unit_price * quantity` overflows.
    pub fn new(product: Arc<Product>, quantity: Quantity, unit_price: Amount) -> DomainResult<Self> {
        let extended_price = unit_price
            .checked_mul(quantity)
            .ok_or_else(|| DomainError::validation("extended price overflows"))?;

        Ok(Self {
            product,
            quantity,
            unit_price,
            extended_price,
        })
    }

    /// Build a line item from a precomputed extended price.
    ///
    /// The supplied value must equal `unit_price * quantity` (by value, so
    /// `20` and `20.00` agree).
    pub fn with_extended_price(
        product: Arc<Product>,
        quantity: Quantity,
        unit_price: Amount,
        extended_price: Amount,
    ) -> DomainResult<Self> {
        let line = Self::new(product, quantity, unit_price)?;
        if line.extended_price != extended_price {
            return Err(DomainError::invariant(format!(
                "extended price {extended_price} does not equal unit price {unit_price} x quantity {quantity}"
            )));
        }
        Ok(line)
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Shared handle to the product (cheap clone).
    pub fn product_arc(&self) -> Arc<Product> {
        Arc::clone(&self.product)
    }

    pub fn sku(&self) -> &Sku {
        self.product.sku()
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    pub fn extended_price(&self) -> Amount {
        self.extended_price
    }
}

impl ValueObject for LineItem {}
