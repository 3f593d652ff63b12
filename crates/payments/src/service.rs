use std::sync::Arc;

use tuxmart_core::Amount;

/// Secures payment from a buyer.
///
/// No representation is made about the payment type (card, cash, credit).
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait PaymentService: Send + Sync {
    /// Returns `true` iff payment was secured for exactly `amount`.
    fn secure_payment(&self, amount: Amount) -> bool;
}

impl<S> PaymentService for Arc<S>
where
    S: PaymentService + ?Sized,
{
    fn secure_payment(&self, amount: Amount) -> bool {
        (**self).secure_payment(amount)
    }
}
