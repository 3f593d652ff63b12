//! `tuxmart-store`: the store's sale workflow.
//!
//! [`SaleProcessor`] runs a sale against three injected collaborators
//! (payment, financial, inventory). The rest of the crate wires the in-memory
//! reference collaborators together for the `tuxmart` demo binary.

pub mod config;
pub mod demo;
pub mod processor;

pub use config::{ConfigError, StoreConfig};
pub use demo::{DemoRun, DemoStore, InMemoryProcessor, RunEnd};
pub use processor::{SaleOutcome, SaleProcessor};
