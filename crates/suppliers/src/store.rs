//! Storage port for supplier records.
//!
//! The service only sees this trait; adapters (in-memory, Postgres) live in
//! the infra crate.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::supplier::{Supplier, SupplierId};

/// Store-level failure, opaque to the service (no retry, no recovery here).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A query or write against the backing storage failed.
    #[error("store query failed: {0}")]
    Query(String),
}

/// Persistence abstraction over supplier records.
#[async_trait]
pub trait SupplierStore: Send + Sync {
    /// Persist a record. Assigns an id when `supplier.id` is `None`,
    /// overwrites the existing record otherwise. Returns the stored record.
    async fn save(&self, supplier: Supplier) -> Result<Supplier, StoreError>;

    /// All records, in store-defined order.
    async fn find_all(&self) -> Result<Vec<Supplier>, StoreError>;

    /// Lookup by id; absence is not an error.
    async fn find_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError>;

    /// Remove by id. A missing id is a no-op; existence gating is the
    /// service's job.
    async fn delete_by_id(&self, id: SupplierId) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> SupplierStore for Arc<S>
where
    S: SupplierStore + ?Sized,
{
    async fn save(&self, supplier: Supplier) -> Result<Supplier, StoreError> {
        (**self).save(supplier).await
    }

    async fn find_all(&self) -> Result<Vec<Supplier>, StoreError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn delete_by_id(&self, id: SupplierId) -> Result<(), StoreError> {
        (**self).delete_by_id(id).await
    }
}
