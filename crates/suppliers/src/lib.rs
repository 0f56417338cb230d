//! Suppliers domain module (CNPJ validation + CRUD orchestration).
//!
//! This crate contains the business rules for supplier records, implemented
//! purely as deterministic domain logic plus a storage port (no HTTP, no
//! database driver).

pub mod cnpj;
pub mod service;
pub mod store;
pub mod supplier;

pub use cnpj::{is_valid_cnpj, is_valid_cnpj_str};
pub use service::{ServiceError, SupplierService};
pub use store::{StoreError, SupplierStore};
pub use supplier::{Contact, Supplier, SupplierId};
