use serde::{Deserialize, Serialize};

use tuxmart_core::{Amount, DomainError, DomainResult, OrderNumber};
use tuxmart_parties::Party;

use crate::line_item::LineItem;

/// A customer order: who buys, who sells, and the ordered line items.
///
/// The line-item list is append-only. `grand_total` is derived: it is kept
/// equal to the sum of the line items' extended prices and is never accepted
/// from outside (deserialization recomputes it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    order_number: OrderNumber,
    buyer: Party,
    seller: Party,
    line_items: Vec<LineItem>,
    grand_total: Amount,
}

#[derive(Deserialize)]
struct OrderRecord {
    order_number: OrderNumber,
    buyer: Party,
    seller: Party,
    #[serde(default)]
    line_items: Vec<LineItem>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = DomainError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let mut order = Order::new(record.order_number, record.buyer, record.seller);
        for line in record.line_items {
            order.add_line_item(line)?;
        }
        Ok(order)
    }
}

impl Order {
    /// Create an order with no line items.
    pub fn new(order_number: OrderNumber, buyer: Party, seller: Party) -> Self {
        Self {
            order_number,
            buyer,
            seller,
            line_items: Vec::new(),
            grand_total: Amount::ZERO,
        }
    }

    /// Append a line item, keeping the grand total in step.
    ///
    /// Fails (leaving the order untouched) only if the total would overflow.
    pub fn add_line_item(&mut self, item: LineItem) -> DomainResult<()> {
        let grand_total = self
            .grand_total
            .checked_add(item.extended_price())
            .ok_or_else(|| DomainError::validation("grand total overflows"))?;

        self.line_items.push(item);
        self.grand_total = grand_total;
        Ok(())
    }

    /// Builder-style variant of [`Order::add_line_item`].
    pub fn with_line_item(mut self, item: LineItem) -> DomainResult<Self> {
        self.add_line_item(item)?;
        Ok(self)
    }

    pub fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    pub fn buyer(&self) -> &Party {
        &self.buyer
    }

    pub fn seller(&self) -> &Party {
        &self.seller
    }

    /// Line items in the order they were added.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Sum of the line items' extended prices.
    pub fn grand_total(&self) -> Amount {
        self.grand_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tuxmart_core::Quantity;
    use tuxmart_products::Product;

    fn test_order() -> Order {
        Order::new(
            "ORD-0001".parse().unwrap(),
            Party::parse("C-001", "Maria").unwrap(),
            Party::parse("S-001", "TuxMart").unwrap(),
        )
    }

    fn line(sku: &str, description: &str, unit_price: Amount, quantity: Quantity) -> LineItem {
        let product = Arc::new(Product::parse(sku, description).unwrap());
        LineItem::new(product, quantity, unit_price).unwrap()
    }

    #[test]
    fn new_order_is_empty_with_zero_total() {
        let order = test_order();
        assert!(order.is_empty());
        assert_eq!(order.grand_total(), dec!(0));
        assert_eq!(order.order_number().as_str(), "ORD-0001");
        assert_eq!(order.buyer().name(), "Maria");
        assert_eq!(order.seller().name(), "TuxMart");
    }

    #[test]
    fn grand_total_sums_extended_prices() {
        let order = test_order()
            .with_line_item(line("La", "A note to follow \"So\"", dec!(5), dec!(4)))
            .unwrap()
            .with_line_item(line("Ti", "A drink with jam and bread", dec!(11), dec!(2)))
            .unwrap();

        assert_eq!(order.grand_total(), dec!(42));
    }

    #[test]
    fn line_items_keep_insertion_order() {
        let mut order = test_order();
        for sku in ["Do", "Re", "Mi", "Fa"] {
            order.add_line_item(line(sku, sku, dec!(1), dec!(1))).unwrap();
        }

        let skus: Vec<&str> = order.line_items().iter().map(|l| l.sku().as_str()).collect();
        assert_eq!(skus, vec!["Do", "Re", "Mi", "Fa"]);
    }

    #[test]
    fn overflowing_line_leaves_order_untouched() {
        let mut order = test_order();
        order.add_line_item(line("La", "La", Amount::MAX, dec!(1))).unwrap();

        let err = order.add_line_item(line("Ti", "Ti", dec!(1), dec!(1))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(order.line_items().len(), 1);
        assert_eq!(order.grand_total(), Amount::MAX);
    }

    #[test]
    fn deserialization_recomputes_grand_total() {
        let json = r#"{
            "order_number": "ORD-0002",
            "buyer": {"id": "C-001", "name": "Maria"},
            "seller": {"id": "S-001", "name": "TuxMart"},
            "grand_total": "1000",
            "line_items": [
                {
                    "product": {"sku": "La", "description": "A note to follow So"},
                    "quantity": "4",
                    "unit_price": "5"
                },
                {
                    "product": {"sku": "Ti", "description": "A drink with jam and bread"},
                    "quantity": "2",
                    "unit_price": "11",
                    "extended_price": "22"
                }
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.grand_total(), dec!(42));
        assert_eq!(order.line_items().len(), 2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: grand total equals the sum of unit price x quantity.
            #[test]
            fn grand_total_is_sum_of_lines(
                lines in prop::collection::vec((0i64..100_000, 0i64..1_000), 0..20)
            ) {
                let mut order = test_order();
                let mut expected = Amount::ZERO;

                for (idx, (cents, quantity)) in lines.iter().enumerate() {
                    let unit_price = Amount::new(*cents, 2);
                    let quantity = Quantity::from(*quantity);
                    expected += unit_price * quantity;
                    order
                        .add_line_item(line(&format!("SKU-{idx}"), "generated", unit_price, quantity))
                        .unwrap();
                }

                prop_assert_eq!(order.grand_total(), expected);
                prop_assert_eq!(order.line_items().len(), lines.len());
            }
        }
    }
}
