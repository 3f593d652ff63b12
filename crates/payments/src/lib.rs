//! Payment collaborator: the capability the store uses to secure payment
//! from a buyer, plus an in-memory prepaid account for tests and demos.

pub mod prepaid;
pub mod service;

pub use prepaid::PrepaidAccount;
pub use service::PaymentService;

#[cfg(any(test, feature = "mocks"))]
pub use service::MockPaymentService;
