//! Products domain module.
//!
//! A product is the sellable item a line item refers to. Products are built
//! by the catalog and only ever read by the sale workflow.

pub mod product;

pub use product::Product;
