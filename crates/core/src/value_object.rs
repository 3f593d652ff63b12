//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. A line item (product, quantity, prices) is the canonical
//! example in this workspace.

/// Marker trait for value objects.
///
/// Value objects are **immutable** once built and **compared by value**. To
/// "change" one, build a new one. Two line items selling the same product at
/// the same price and quantity are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price {
///     amount: Amount,
///     currency: String,
/// }
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
