//! Adapters implementing [`cadastro_suppliers::SupplierStore`].

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemorySupplierStore;
pub use postgres::PostgresSupplierStore;
