use std::sync::Mutex;

use tracing::{debug, warn};
use tuxmart_core::{Amount, DomainError, DomainResult};

use crate::service::PaymentService;

#[derive(Debug, Default)]
struct Account {
    balance: Amount,
    captured: Vec<Amount>,
}

/// In-memory prepaid account.
///
/// Approves a payment when `0 < amount <= balance`, debiting the balance.
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct PrepaidAccount {
    inner: Mutex<Account>,
}

impl PrepaidAccount {
    pub fn new(opening_balance: Amount) -> Self {
        Self {
            inner: Mutex::new(Account {
                balance: opening_balance,
                captured: Vec::new(),
            }),
        }
    }

    /// Remaining balance.
    pub fn balance(&self) -> DomainResult<Amount> {
        self.inner
            .lock()
            .map(|account| account.balance)
            .map_err(|_| DomainError::unavailable("prepaid account lock poisoned"))
    }

    /// Amounts captured so far, oldest first.
    pub fn captured(&self) -> DomainResult<Vec<Amount>> {
        self.inner
            .lock()
            .map(|account| account.captured.clone())
            .map_err(|_| DomainError::unavailable("prepaid account lock poisoned"))
    }
}

impl PaymentService for PrepaidAccount {
    fn secure_payment(&self, amount: Amount) -> bool {
        if amount <= Amount::ZERO {
            debug!(%amount, "declining non-positive payment");
            return false;
        }

        let Ok(mut account) = self.inner.lock() else {
            warn!(%amount, "prepaid account lock poisoned; declining payment");
            return false;
        };

        if amount > account.balance {
            debug!(%amount, balance = %account.balance, "insufficient funds");
            return false;
        }

        account.balance -= amount;
        account.captured.push(amount);
        debug!(%amount, balance = %account.balance, "payment secured");
        true
    }
}
