//! Sale workflow (application-level orchestration).
//!
//! ```text
//! make_sale(order)
//!   ↓
//! 1. PaymentService::secure_payment(grand_total)   -- false: stop, PaymentDeclined
//!   ↓
//! 2. FinancialService::create_order(order)
//!   ↓
//! 3. InventoryService::deduct_stock(product, quantity), once per line, in order
//! ```
//!
//! Collaborators are injected at construction and cannot be swapped later.
//! Tests substitute doubles by constructing the processor with them.
//!
//! There is no compensation: if step 2 or 3 fails, the error is returned as
//! is and whatever already happened stays happened (payment taken, order
//! recorded, earlier lines deducted).

use tracing::{debug, info, instrument};

use tuxmart_accounting::FinancialService;
use tuxmart_core::DomainResult;
use tuxmart_inventory::InventoryService;
use tuxmart_payments::PaymentService;
use tuxmart_sales::Order;

/// Result of a sale attempt that did not fail.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleOutcome {
    /// Payment secured, order recorded, stock deducted for every line.
    Completed,
    /// Payment was not secured; nothing else was attempted.
    PaymentDeclined,
}

impl SaleOutcome {
    pub fn is_completed(self) -> bool {
        matches!(self, SaleOutcome::Completed)
    }
}

/// The store: executes sales against injected collaborators.
///
/// ## Generic Parameters
///
/// - `P`: payment collaborator
/// - `I`: inventory collaborator
/// - `F`: financial collaborator
///
/// Each may be a concrete type, an `Arc<T>` (to keep a handle for
/// inspection), or an `Arc<dyn Trait>`.
///
/// The processor holds no state of its own; calls are independent and not
/// deduplicated. Selling the same order twice charges, records and deducts
/// twice.
#[derive(Debug)]
pub struct SaleProcessor<P, I, F> {
    payments: P,
    inventory: I,
    financial: F,
}

impl<P, I, F> SaleProcessor<P, I, F> {
    pub fn new(payments: P, inventory: I, financial: F) -> Self {
        Self {
            payments,
            inventory,
            financial,
        }
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    pub fn financial(&self) -> &F {
        &self.financial
    }

    pub fn into_parts(self) -> (P, I, F) {
        (self.payments, self.inventory, self.financial)
    }
}

impl<P, I, F> SaleProcessor<P, I, F>
where
    P: PaymentService,
    I: InventoryService,
    F: FinancialService,
{
    /// Conduct a sale.
    ///
    /// 1. Secure payment for the order's grand total. If that fails the sale
    ///    is silently abandoned: `Ok(SaleOutcome::PaymentDeclined)`.
    /// 2. Record the order with the financial collaborator.
    /// 3. Deduct stock for each line item, in order.
    ///
    /// Errors from steps 2 and 3 are returned unchanged and stop the workflow.
    /// The order is only read.
    #[instrument(
        skip_all,
        fields(
            order_number = %order.order_number(),
            grand_total = %order.grand_total()
        ),
        err
    )]
    pub fn make_sale(&self, order: &Order) -> DomainResult<SaleOutcome> {
        if !self.payments.secure_payment(order.grand_total()) {
            info!("payment declined; sale abandoned");
            return Ok(SaleOutcome::PaymentDeclined);
        }
        debug!("payment secured");

        self.financial.create_order(order)?;
        debug!("order recorded");

        for line in order.line_items() {
            let remaining = self.inventory.deduct_stock(line.product(), line.quantity())?;
            debug!(
                sku = %line.sku(),
                quantity = %line.quantity(),
                %remaining,
                "stock deducted"
            );
        }

        info!(lines = order.line_items().len(), "sale completed");
        Ok(SaleOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tuxmart_accounting::MockFinancialService;
    use tuxmart_core::{Amount, DomainError, Quantity};
    use tuxmart_inventory::MockInventoryService;
    use tuxmart_parties::Party;
    use tuxmart_payments::MockPaymentService;
    use tuxmart_products::Product;
    use tuxmart_sales::LineItem;

    fn make_line_item(
        sku: &str,
        description: &str,
        unit_price: Amount,
        quantity: Quantity,
    ) -> LineItem {
        let product = Arc::new(Product::parse(sku, description).unwrap());
        LineItem::new(product, quantity, unit_price).unwrap()
    }

    /// Two lines: 4 @ 5 and 2 @ 11, grand total 42.
    fn test_order() -> Order {
        Order::new(
            "ORD-0042".parse().unwrap(),
            Party::parse("C-001", "Maria").unwrap(),
            Party::parse("S-001", "TuxMart").unwrap(),
        )
        .with_line_item(make_line_item("La", "A note to follow \"So\"", dec!(5), dec!(4)))
        .unwrap()
        .with_line_item(make_line_item("Ti", "A drink with jam and bread", dec!(11), dec!(2)))
        .unwrap()
    }

    fn approving_payments(times: usize) -> MockPaymentService {
        let mut payments = MockPaymentService::new();
        payments
            .expect_secure_payment()
            .with(eq(dec!(42)))
            .times(times)
            .return_const(true);
        payments
    }

    #[test]
    fn completed_sale_records_order_then_deducts_each_line_in_order() {
        let order = test_order();
        assert_eq!(order.grand_total(), dec!(42));

        let mut seq = Sequence::new();

        let mut payments = MockPaymentService::new();
        payments
            .expect_secure_payment()
            .with(eq(dec!(42)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(true);

        let mut financial = MockFinancialService::new();
        financial
            .expect_create_order()
            .with(eq(order.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut inventory = MockInventoryService::new();
        for line in order.line_items() {
            inventory
                .expect_deduct_stock()
                .with(eq(line.product().clone()), eq(line.quantity()))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(Quantity::ZERO));
        }

        let processor = SaleProcessor::new(payments, inventory, financial);
        let outcome = processor.make_sale(&order).unwrap();
        assert_eq!(outcome, SaleOutcome::Completed);
        assert!(outcome.is_completed());

        let (mut payments, mut inventory, mut financial) = processor.into_parts();
        payments.checkpoint();
        inventory.checkpoint();
        financial.checkpoint();
    }

    #[test]
    fn declined_payment_touches_nothing_else() {
        let order = test_order();

        let mut payments = MockPaymentService::new();
        payments
            .expect_secure_payment()
            .with(eq(dec!(42)))
            .times(1)
            .return_const(false);

        let mut financial = MockFinancialService::new();
        financial.expect_create_order().never();

        let mut inventory = MockInventoryService::new();
        inventory.expect_deduct_stock().never();

        let processor = SaleProcessor::new(payments, inventory, financial);
        let outcome = processor.make_sale(&order).unwrap();
        assert_eq!(outcome, SaleOutcome::PaymentDeclined);
        assert!(!outcome.is_completed());
    }

    #[test]
    fn failed_deduction_propagates_after_order_was_recorded() {
        let order = test_order();
        let lines = order.line_items();

        let mut financial = MockFinancialService::new();
        financial
            .expect_create_order()
            .with(eq(order.clone()))
            .times(1)
            .returning(|_| Ok(()));

        let mut inventory = MockInventoryService::new();
        inventory
            .expect_deduct_stock()
            .with(eq(lines[0].product().clone()), eq(dec!(4)))
            .times(1)
            .returning(|_, _| Ok(dec!(6)));
        inventory
            .expect_deduct_stock()
            .with(eq(lines[1].product().clone()), eq(dec!(2)))
            .times(1)
            .returning(|_, _| Err(DomainError::unavailable("warehouse offline")));

        let processor = SaleProcessor::new(approving_payments(1), inventory, financial);
        let err = processor.make_sale(&order).unwrap_err();
        assert_eq!(err, DomainError::unavailable("warehouse offline"));
    }

    #[test]
    fn failed_recording_stops_before_any_deduction() {
        let order = test_order();

        let mut financial = MockFinancialService::new();
        financial
            .expect_create_order()
            .times(1)
            .returning(|_| Err(DomainError::unavailable("books closed")));

        let mut inventory = MockInventoryService::new();
        inventory.expect_deduct_stock().never();

        let processor = SaleProcessor::new(approving_payments(1), inventory, financial);
        let err = processor.make_sale(&order).unwrap_err();
        assert_eq!(err, DomainError::unavailable("books closed"));
    }

    #[test]
    fn selling_the_same_order_twice_repeats_every_call() {
        let order = test_order();

        let mut financial = MockFinancialService::new();
        financial
            .expect_create_order()
            .with(eq(order.clone()))
            .times(2)
            .returning(|_| Ok(()));

        let mut inventory = MockInventoryService::new();
        inventory
            .expect_deduct_stock()
            .times(4)
            .returning(|_, _| Ok(Quantity::ZERO));

        let processor = SaleProcessor::new(approving_payments(2), inventory, financial);
        assert_eq!(processor.make_sale(&order).unwrap(), SaleOutcome::Completed);
        assert_eq!(processor.make_sale(&order).unwrap(), SaleOutcome::Completed);
    }

    #[test]
    fn order_without_lines_still_secures_payment_and_records() {
        let order = Order::new(
            "ORD-EMPTY".parse().unwrap(),
            Party::parse("C-001", "Maria").unwrap(),
            Party::parse("S-001", "TuxMart").unwrap(),
        );

        let mut payments = MockPaymentService::new();
        payments
            .expect_secure_payment()
            .with(eq(Amount::ZERO))
            .times(1)
            .return_const(true);

        let mut financial = MockFinancialService::new();
        financial.expect_create_order().times(1).returning(|_| Ok(()));

        let mut inventory = MockInventoryService::new();
        inventory.expect_deduct_stock().never();

        let processor = SaleProcessor::new(payments, inventory, financial);
        assert_eq!(processor.make_sale(&order).unwrap(), SaleOutcome::Completed);
    }
}
