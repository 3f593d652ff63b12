//! Sales domain module: orders and their line items.
//!
//! Orders are built by the caller (an order-building collaborator) and handed,
//! fully populated, to the sale workflow, which only reads them.

pub mod line_item;
pub mod order;

pub use line_item::LineItem;
pub use order::Order;
