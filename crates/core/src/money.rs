//! Exact decimal types for prices, totals and stock quantities.
//!
//! Monetary arithmetic must not lose precision, so both amounts and
//! quantities are backed by `rust_decimal::Decimal` (quantities may be
//! fractional, e.g. weighed goods).

pub use rust_decimal::Decimal;

/// A monetary amount (unit price, extended price, grand total).
pub type Amount = Decimal;

/// A quantity of product (ordered, on hand, deducted).
pub type Quantity = Decimal;
