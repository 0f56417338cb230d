use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use cadastro_suppliers::{StoreError, Supplier, SupplierId, SupplierStore};

/// In-memory supplier store for tests/dev.
///
/// Ids are assigned from a process-local sequence starting at 1; `find_all`
/// lists records in id order.
#[derive(Debug)]
pub struct InMemorySupplierStore {
    records: RwLock<BTreeMap<SupplierId, Supplier>>,
    next_id: AtomicI64,
}

impl InMemorySupplierStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemorySupplierStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SupplierStore for InMemorySupplierStore {
    async fn save(&self, supplier: Supplier) -> Result<Supplier, StoreError> {
        let stored = match supplier.id {
            Some(_) => supplier,
            None => supplier.with_id(SupplierId::new(self.next_id.fetch_add(1, Ordering::Relaxed))),
        };

        // stored.id is always Some past this point.
        let id = stored
            .id
            .ok_or_else(|| StoreError::Query("record left without an id".to_string()))?;

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        records.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Supplier>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(records.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: SupplierId) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        records.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_suppliers::Contact;

    fn sample(name: &str) -> Supplier {
        Supplier::new(
            name,
            "12345678000195",
            Contact {
                name: "Contact".to_string(),
                email: "contact@example.com".to_string(),
                phone: "123456789".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let store = InMemorySupplierStore::new();

        let first = store.save(sample("Supplier A")).await.unwrap();
        let second = store.save(sample("Supplier B")).await.unwrap();

        assert_eq!(first.id, Some(SupplierId::new(1)));
        assert_eq!(second.id, Some(SupplierId::new(2)));
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites() {
        let store = InMemorySupplierStore::new();

        let stored = store.save(sample("Supplier A")).await.unwrap();
        let id = stored.id.unwrap();

        let mut renamed = stored;
        renamed.name = "Supplier A (renamed)".to_string();
        store.save(renamed).await.unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Supplier A (renamed)");
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_all_lists_in_id_order() {
        let store = InMemorySupplierStore::new();
        store.save(sample("Supplier A")).await.unwrap();
        store.save(sample("Supplier B")).await.unwrap();

        let all = store.find_all().await.unwrap();

        let names: Vec<_> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Supplier A", "Supplier B"]);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let store = InMemorySupplierStore::new();

        assert_eq!(store.find_by_id(SupplierId::new(42)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = InMemorySupplierStore::new();
        let stored = store.save(sample("Supplier A")).await.unwrap();
        let id = stored.id.unwrap();

        store.delete_by_id(id).await.unwrap();

        assert_eq!(store.find_by_id(id).await.unwrap(), None);
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_a_noop() {
        let store = InMemorySupplierStore::new();

        store.delete_by_id(SupplierId::new(7)).await.unwrap();
    }
}
