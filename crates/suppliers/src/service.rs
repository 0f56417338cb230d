//! CRUD orchestration over the supplier store.
//!
//! The service owns business-rule gating (CNPJ validation, existence checks);
//! the store owns physical lifetime. Each operation performs one lookup and
//! at most one write, with no retries.

use thiserror::Error;
use tracing::debug;

use crate::cnpj;
use crate::store::{StoreError, SupplierStore};
use crate::supplier::{Supplier, SupplierId};

/// Service-level failure surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The supplied tax identifier failed CNPJ validation.
    #[error("Invalid CNPJ")]
    InvalidCnpj,

    /// Update or delete targeted a non-existent record.
    #[error("Supplier not found with id {0}")]
    NotFound(SupplierId),

    /// Opaque store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD operations over supplier records, gated by CNPJ validation.
#[derive(Debug, Clone)]
pub struct SupplierService<S> {
    store: S,
}

impl<S: SupplierStore> SupplierService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate and persist a new record. The store assigns the id.
    pub async fn create_supplier(&self, candidate: Supplier) -> Result<Supplier, ServiceError> {
        if !cnpj::is_valid_cnpj_str(&candidate.cnpj) {
            return Err(ServiceError::InvalidCnpj);
        }

        let stored = self.store.save(candidate).await?;
        debug!(id = ?stored.id, "supplier created");
        Ok(stored)
    }

    /// Full listing, unfiltered, in store-defined order.
    pub async fn get_all_suppliers(&self) -> Result<Vec<Supplier>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Lookup by id; absence is a normal empty result, not a failure.
    pub async fn get_supplier_by_id(
        &self,
        id: SupplierId,
    ) -> Result<Option<Supplier>, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Overwrite an existing record's mutable fields with `details`.
    ///
    /// Identity is preserved from the existing record, never taken from
    /// `details`. The new CNPJ is re-validated before anything is written.
    pub async fn update_supplier(
        &self,
        id: SupplierId,
        details: Supplier,
    ) -> Result<Supplier, ServiceError> {
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        if !cnpj::is_valid_cnpj_str(&details.cnpj) {
            return Err(ServiceError::InvalidCnpj);
        }

        let updated = Supplier {
            id: existing.id,
            name: details.name,
            cnpj: details.cnpj,
            contact: details.contact,
        };

        let stored = self.store.save(updated).await?;
        debug!(%id, "supplier updated");
        Ok(stored)
    }

    /// Remove an existing record. Returns `true` on success.
    pub async fn delete_supplier(&self, id: SupplierId) -> Result<bool, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        self.store.delete_by_id(id).await?;
        debug!(%id, "supplier deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::supplier::Contact;

    const VALID_CNPJ: &str = "12345678000195";
    const OTHER_VALID_CNPJ: &str = "11222333000181";

    /// Recording store: counts calls and serves canned lookup results.
    #[derive(Default)]
    struct MockStore {
        existing: Option<Supplier>,
        saves: Mutex<Vec<Supplier>>,
        deletes: Mutex<Vec<SupplierId>>,
        find_by_id_calls: Mutex<usize>,
    }

    impl MockStore {
        fn with_existing(supplier: Supplier) -> Self {
            Self {
                existing: Some(supplier),
                ..Self::default()
            }
        }

        fn saved(&self) -> Vec<Supplier> {
            self.saves.lock().unwrap().clone()
        }

        fn deleted(&self) -> Vec<SupplierId> {
            self.deletes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SupplierStore for MockStore {
        async fn save(&self, supplier: Supplier) -> Result<Supplier, StoreError> {
            let stored = match supplier.id {
                Some(_) => supplier,
                None => supplier.with_id(SupplierId::new(1)),
            };
            self.saves.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn find_all(&self) -> Result<Vec<Supplier>, StoreError> {
            Ok(self.existing.clone().into_iter().collect())
        }

        async fn find_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
            *self.find_by_id_calls.lock().unwrap() += 1;
            Ok(self
                .existing
                .clone()
                .filter(|s| s.id == Some(id)))
        }

        async fn delete_by_id(&self, id: SupplierId) -> Result<(), StoreError> {
            self.deletes.lock().unwrap().push(id);
            Ok(())
        }
    }

    fn sample_supplier() -> Supplier {
        Supplier::new(
            "Supplier A",
            VALID_CNPJ,
            Contact {
                name: "Contact A".to_string(),
                email: "contactA@example.com".to_string(),
                phone: "123456789".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn create_saves_once_when_cnpj_is_valid() {
        let service = SupplierService::new(MockStore::default());

        let created = service.create_supplier(sample_supplier()).await.unwrap();

        assert_eq!(created.id, Some(SupplierId::new(1)));
        assert_eq!(created.name, "Supplier A");
        assert_eq!(service.store.saved().len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_cnpj_without_touching_store() {
        let service = SupplierService::new(MockStore::default());

        let mut candidate = sample_supplier();
        candidate.cnpj = "invalidCNPJ".to_string();
        let err = service.create_supplier(candidate).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCnpj));
        assert_eq!(err.to_string(), "Invalid CNPJ");
        assert!(service.store.saved().is_empty());
    }

    #[tokio::test]
    async fn get_all_returns_store_listing() {
        let existing = sample_supplier().with_id(SupplierId::new(1));
        let service = SupplierService::new(MockStore::with_existing(existing.clone()));

        let all = service.get_all_suppliers().await.unwrap();

        assert_eq!(all, vec![existing]);
    }

    #[tokio::test]
    async fn get_by_id_returns_record_when_present() {
        let existing = sample_supplier().with_id(SupplierId::new(1));
        let service = SupplierService::new(MockStore::with_existing(existing.clone()));

        let found = service.get_supplier_by_id(SupplierId::new(1)).await.unwrap();

        assert_eq!(found, Some(existing));
    }

    #[tokio::test]
    async fn get_by_id_returns_none_when_absent() {
        let service = SupplierService::new(MockStore::default());

        let found = service.get_supplier_by_id(SupplierId::new(1)).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_preserves_id() {
        let existing = sample_supplier().with_id(SupplierId::new(1));
        let service = SupplierService::new(MockStore::with_existing(existing));

        let details = Supplier::new(
            "Updated Supplier",
            OTHER_VALID_CNPJ,
            Contact {
                name: "Updated Contact".to_string(),
                email: "updated@example.com".to_string(),
                phone: "987654321".to_string(),
            },
        );
        let updated = service
            .update_supplier(SupplierId::new(1), details)
            .await
            .unwrap();

        assert_eq!(updated.id, Some(SupplierId::new(1)));
        assert_eq!(updated.name, "Updated Supplier");
        assert_eq!(updated.cnpj, OTHER_VALID_CNPJ);
        assert_eq!(updated.contact.name, "Updated Contact");
        assert_eq!(updated.contact.email, "updated@example.com");
        assert_eq!(updated.contact.phone, "987654321");
        assert_eq!(service.store.saved().len(), 1);
    }

    #[tokio::test]
    async fn update_fails_with_not_found_when_id_is_missing() {
        let service = SupplierService::new(MockStore::default());

        let err = service
            .update_supplier(SupplierId::new(1), sample_supplier())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Supplier not found with id 1");
        assert!(service.store.saved().is_empty());
    }

    #[tokio::test]
    async fn update_rejects_invalid_cnpj_without_saving() {
        let existing = sample_supplier().with_id(SupplierId::new(1));
        let service = SupplierService::new(MockStore::with_existing(existing));

        let mut details = sample_supplier();
        details.cnpj = "not-a-cnpj".to_string();
        let err = service
            .update_supplier(SupplierId::new(1), details)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCnpj));
        assert!(service.store.saved().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_existing_record_exactly_once() {
        let existing = sample_supplier().with_id(SupplierId::new(1));
        let service = SupplierService::new(MockStore::with_existing(existing));

        let deleted = service.delete_supplier(SupplierId::new(1)).await.unwrap();

        assert!(deleted);
        assert_eq!(service.store.deleted(), vec![SupplierId::new(1)]);
    }

    #[tokio::test]
    async fn delete_fails_with_not_found_without_calling_delete() {
        let service = SupplierService::new(MockStore::default());

        let err = service.delete_supplier(SupplierId::new(1)).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Supplier not found with id 1");
        assert!(service.store.deleted().is_empty());
    }
}
