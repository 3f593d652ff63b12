//! In-memory store used by the `tuxmart` binary and the integration tests.

use std::sync::Arc;

use tuxmart_accounting::InMemoryLedger;
use tracing::warn;

use tuxmart_core::{Amount, DomainError, DomainResult, Quantity};
use tuxmart_inventory::InMemoryStockBook;
use tuxmart_parties::Party;
use tuxmart_payments::PrepaidAccount;
use tuxmart_products::Product;
use tuxmart_sales::{LineItem, Order};

use crate::config::StoreConfig;
use crate::processor::{SaleOutcome, SaleProcessor};

/// A processor wired to the in-memory reference collaborators.
pub type InMemoryProcessor =
    SaleProcessor<Arc<PrepaidAccount>, Arc<InMemoryStockBook>, Arc<InMemoryLedger>>;

/// Why a repeated demo run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEnd {
    /// The buyer could no longer pay for the next order.
    PaymentDeclined,
    /// A sale failed after payment was taken; nothing was rolled back.
    Failed(DomainError),
    /// The requested number of sales completed.
    LimitReached,
}

/// Summary of [`DemoStore::sell_until_exhausted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRun {
    pub completed: usize,
    pub end: RunEnd,
}

/// In-memory collaborators plus a processor sharing them.
///
/// The `Arc` handles stay inspectable after sales have run.
#[derive(Debug)]
pub struct DemoStore {
    pub account: Arc<PrepaidAccount>,
    pub stock: Arc<InMemoryStockBook>,
    pub ledger: Arc<InMemoryLedger>,
    pub processor: InMemoryProcessor,
}

impl DemoStore {
    /// Open a store whose buyer holds `config.opening_balance` and whose
    /// shelves hold `config.opening_stock` of every catalog product.
    pub fn open(config: &StoreConfig, catalog: &[Arc<Product>]) -> DomainResult<Self> {
        let account = Arc::new(PrepaidAccount::new(config.opening_balance));
        let stock = Arc::new(InMemoryStockBook::new());
        let ledger = Arc::new(InMemoryLedger::new());

        for product in catalog {
            stock.receive(product.sku().clone(), config.opening_stock)?;
        }

        let processor = SaleProcessor::new(
            Arc::clone(&account),
            Arc::clone(&stock),
            Arc::clone(&ledger),
        );

        Ok(Self {
            account,
            stock,
            ledger,
            processor,
        })
    }

    /// Sell the demo order over and over (`ORD-0001`, `ORD-0002`, ...) until
    /// a payment is declined, a sale fails, or `max_sales` sales complete.
    ///
    /// A failed sale ends the run instead of the call; only an order that
    /// cannot be built is returned as an error.
    pub fn sell_until_exhausted(
        &self,
        catalog: &[Arc<Product>],
        max_sales: usize,
    ) -> DomainResult<DemoRun> {
        for n in 1..=max_sales {
            let order = demo_order(&format!("ORD-{n:04}"), catalog)?;
            let end = match self.processor.make_sale(&order) {
                Ok(SaleOutcome::Completed) => continue,
                Ok(SaleOutcome::PaymentDeclined) => RunEnd::PaymentDeclined,
                Err(err) => {
                    warn!(
                        order_number = %order.order_number(),
                        error = %err,
                        "demo sale failed"
                    );
                    RunEnd::Failed(err)
                }
            };
            return Ok(DemoRun {
                completed: n - 1,
                end,
            });
        }

        Ok(DemoRun {
            completed: max_sales,
            end: RunEnd::LimitReached,
        })
    }
}

/// The demo catalog: two products.
pub fn demo_catalog() -> DomainResult<Vec<Arc<Product>>> {
    Ok(vec![
        Arc::new(Product::parse("La", "A note to follow \"So\"")?),
        Arc::new(Product::parse("Ti", "A drink with jam and bread")?),
    ])
}

/// An order buying 4 of the first catalog product at 5 and 2 of the second
/// at 11 (grand total 42).
pub fn demo_order(order_number: &str, catalog: &[Arc<Product>]) -> DomainResult<Order> {
    let prices = [
        (Quantity::from(4), Amount::from(5)),
        (Quantity::from(2), Amount::from(11)),
    ];

    let mut order = Order::new(
        order_number.parse()?,
        Party::parse("C-001", "Maria")?,
        Party::parse("S-001", "TuxMart")?,
    );
    for (product, (quantity, unit_price)) in catalog.iter().zip(prices) {
        order.add_line_item(LineItem::new(Arc::clone(product), quantity, unit_price)?)?;
    }
    Ok(order)
}
