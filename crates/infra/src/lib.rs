//! Infrastructure layer: store adapters behind the suppliers storage port.

pub mod supplier_store;

pub use supplier_store::{InMemorySupplierStore, PostgresSupplierStore};
