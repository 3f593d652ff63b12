//! Inventory collaborator: the capability the store uses to deduct sold
//! stock, plus an in-memory stock book for tests and demos.

pub mod service;
pub mod stock_book;

pub use service::InventoryService;
pub use stock_book::InMemoryStockBook;

#[cfg(any(test, feature = "mocks"))]
pub use service::MockInventoryService;
