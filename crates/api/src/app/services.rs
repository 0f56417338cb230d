use std::sync::Arc;

use cadastro_infra::{InMemorySupplierStore, PostgresSupplierStore};
use cadastro_suppliers::{SupplierService, SupplierStore};

/// Services shared by all handlers via `Extension`.
pub struct AppServices {
    pub suppliers: SupplierService<Arc<dyn SupplierStore>>,
}

impl AppServices {
    pub fn new(store: Arc<dyn SupplierStore>) -> Self {
        Self {
            suppliers: SupplierService::new(store),
        }
    }

    /// In-memory wiring (tests/dev).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySupplierStore::new()))
    }
}

/// Pick the store from the environment: `DATABASE_URL` selects Postgres,
/// otherwise everything stays in memory.
pub async fn build_services() -> AppServices {
    match std::env::var("DATABASE_URL") {
        Ok(url) => match PostgresSupplierStore::connect(&url).await {
            Ok(store) => {
                if let Err(e) = store.ensure_schema().await {
                    tracing::error!(error = %e, "failed to ensure suppliers schema");
                }
                tracing::info!("using Postgres supplier store");
                AppServices::new(Arc::new(store))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to connect to DATABASE_URL; falling back to in-memory store");
                AppServices::in_memory()
            }
        },
        Err(_) => {
            tracing::info!("DATABASE_URL not set; using in-memory supplier store");
            AppServices::in_memory()
        }
    }
}
