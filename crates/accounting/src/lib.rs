//! Financial collaborator: the capability the store uses to record a
//! completed order, plus an in-memory double-entry ledger.

pub mod ledger;
pub mod service;

pub use ledger::{
    Account, AccountKind, InMemoryLedger, JournalEntry, JournalEntryLine, ACCOUNTS_RECEIVABLE,
    SALES_REVENUE,
};
pub use service::FinancialService;

#[cfg(any(test, feature = "mocks"))]
pub use service::MockFinancialService;
