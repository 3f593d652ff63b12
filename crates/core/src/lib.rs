//! `tuxmart-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the store and its
//! collaborators: identifiers, decimal money types, and the domain error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderNumber, PartyId, Sku};
pub use money::{Amount, Quantity};
pub use value_object::ValueObject;
