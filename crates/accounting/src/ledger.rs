use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use tuxmart_core::{Amount, DomainError, DomainResult, OrderNumber};
use tuxmart_sales::Order;

use crate::service::FinancialService;

/// Account code debited when an order is recorded.
pub const ACCOUNTS_RECEIVABLE: &str = "1100";

/// Account code credited when an order is recorded.
pub const SALES_REVENUE: &str = "4000";

/// High-level account kind (determines normal balance side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Asset,
    Revenue,
}

/// Account identifier + metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub code: String, // e.g. "1100"
    pub name: String, // e.g. "Accounts Receivable"
    pub kind: AccountKind,
}

impl Account {
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn accounts_receivable() -> Self {
        Self::new(ACCOUNTS_RECEIVABLE, "Accounts Receivable", AccountKind::Asset)
    }

    pub fn sales_revenue() -> Self {
        Self::new(SALES_REVENUE, "Sales Revenue", AccountKind::Revenue)
    }
}

/// One side of a journal entry (immutable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryLine {
    pub account: Account,
    /// Positive amount.
    pub amount: Amount,
    /// true = debit, false = credit.
    pub is_debit: bool,
}

/// A posted, balanced journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub entry_id: Uuid,
    pub order_number: OrderNumber,
    pub lines: Vec<JournalEntryLine>,
    pub description: Option<String>,
    pub posted_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Sales entry for an order: debit receivables, credit revenue, both for
    /// the order's grand total.
    pub fn for_order(order: &Order, posted_at: DateTime<Utc>) -> Self {
        let total = order.grand_total();
        Self {
            entry_id: Uuid::now_v7(),
            order_number: order.order_number().clone(),
            lines: vec![
                JournalEntryLine {
                    account: Account::accounts_receivable(),
                    amount: total,
                    is_debit: true,
                },
                JournalEntryLine {
                    account: Account::sales_revenue(),
                    amount: total,
                    is_debit: false,
                },
            ],
            description: Some(format!(
                "order {} sold by {} to {}",
                order.order_number(),
                order.seller(),
                order.buyer()
            )),
            posted_at,
        }
    }
}

/// In-memory, append-only double-entry journal.
///
/// Intended for tests/dev. Every posted entry is balanced; balances are
/// derived from the journal on demand. Orders are not deduplicated.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: RwLock<Vec<JournalEntry>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a journal entry.
    pub fn post(&self, entry: JournalEntry) -> DomainResult<()> {
        validate_entry(&entry)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|_| DomainError::unavailable("ledger lock poisoned"))?;

        debug!(
            entry_id = %entry.entry_id,
            order_number = %entry.order_number,
            "journal entry posted"
        );
        entries.push(entry);
        Ok(())
    }

    /// Posted entries, oldest first.
    pub fn entries(&self) -> DomainResult<Vec<JournalEntry>> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .map_err(|_| DomainError::unavailable("ledger lock poisoned"))
    }

    /// Debits minus credits for an account code across all entries.
    ///
    /// Fails with `Validation` when the running balance leaves the decimal
    /// range.
    pub fn balance(&self, account_code: &str) -> DomainResult<Amount> {
        let entries = self
            .entries
            .read()
            .map_err(|_| DomainError::unavailable("ledger lock poisoned"))?;

        entries
            .iter()
            .flat_map(|entry| entry.lines.iter())
            .filter(|line| line.account.code == account_code)
            .try_fold(Amount::ZERO, |total, line| {
                let next = if line.is_debit {
                    total.checked_add(line.amount)
                } else {
                    total.checked_sub(line.amount)
                };
                next.ok_or_else(|| {
                    DomainError::validation(format!("balance of account {account_code} overflows"))
                })
            })
    }
}

impl FinancialService for InMemoryLedger {
    fn create_order(&self, order: &Order) -> DomainResult<()> {
        self.post(JournalEntry::for_order(order, Utc::now()))
    }
}

fn validate_entry(entry: &JournalEntry) -> DomainResult<()> {
    if entry.lines.is_empty() {
        return Err(DomainError::validation("journal entry must have lines"));
    }

    let mut debit_total = Amount::ZERO;
    let mut credit_total = Amount::ZERO;

    for line in &entry.lines {
        if line.amount <= Amount::ZERO {
            return Err(DomainError::validation("amount must be positive"));
        }
        let side = if line.is_debit {
            &mut debit_total
        } else {
            &mut credit_total
        };
        *side = side
            .checked_add(line.amount)
            .ok_or_else(|| DomainError::validation("journal entry total overflows"))?;
    }

    if debit_total != credit_total {
        return Err(DomainError::invariant("debits must equal credits"));
    }

    Ok(())
}
