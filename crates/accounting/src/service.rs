use std::sync::Arc;

use tuxmart_core::DomainResult;
use tuxmart_sales::Order;

/// Records orders in the financial system.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait FinancialService: Send + Sync {
    /// Record `order` as a financial transaction.
    fn create_order(&self, order: &Order) -> DomainResult<()>;
}

impl<S> FinancialService for Arc<S>
where
    S: FinancialService + ?Sized,
{
    fn create_order(&self, order: &Order) -> DomainResult<()> {
        (**self).create_order(order)
    }
}
