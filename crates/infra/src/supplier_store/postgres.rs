//! Postgres-backed supplier store.
//!
//! Persists supplier records in a single `suppliers` table through a sqlx
//! connection pool. `save` splits on the record's identity: inserts return
//! the assigned id via `RETURNING`, updates overwrite the existing row.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::instrument;

use cadastro_suppliers::{Contact, StoreError, Supplier, SupplierId, SupplierStore};

/// Postgres adapter for [`SupplierStore`].
///
/// The pool handles connection management and is safe to share across tasks.
#[derive(Debug, Clone)]
pub struct PostgresSupplierStore {
    pool: PgPool,
}

#[derive(Debug)]
struct SupplierRow {
    id: i64,
    name: String,
    cnpj: String,
    contact_name: String,
    contact_email: String,
    contact_phone: String,
}

impl<'r> sqlx::FromRow<'r, PgRow> for SupplierRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(SupplierRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            cnpj: row.try_get("cnpj")?,
            contact_name: row.try_get("contact_name")?,
            contact_email: row.try_get("contact_email")?,
            contact_phone: row.try_get("contact_phone")?,
        })
    }
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Supplier {
            id: Some(SupplierId::new(row.id)),
            name: row.name,
            cnpj: row.cnpj,
            contact: Contact {
                name: row.contact_name,
                email: row.contact_email,
                phone: row.contact_phone,
            },
        }
    }
}

impl PostgresSupplierStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the given database URL with a small pool.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self::new(pool))
    }

    /// Create the `suppliers` table if it does not exist yet.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS suppliers (
                id            BIGSERIAL PRIMARY KEY,
                name          TEXT NOT NULL,
                cnpj          TEXT NOT NULL,
                contact_name  TEXT NOT NULL,
                contact_email TEXT NOT NULL,
                contact_phone TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }
}

#[async_trait]
impl SupplierStore for PostgresSupplierStore {
    #[instrument(skip(self, supplier), fields(id = ?supplier.id), err)]
    async fn save(&self, supplier: Supplier) -> Result<Supplier, StoreError> {
        match supplier.id {
            None => {
                let row = sqlx::query(
                    r#"
                    INSERT INTO suppliers (name, cnpj, contact_name, contact_email, contact_phone)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(&supplier.name)
                .bind(&supplier.cnpj)
                .bind(&supplier.contact.name)
                .bind(&supplier.contact.email)
                .bind(&supplier.contact.phone)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("insert", e))?;

                let id: i64 = row
                    .try_get("id")
                    .map_err(|e| map_sqlx_error("insert", e))?;
                Ok(supplier.with_id(SupplierId::new(id)))
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE suppliers
                    SET name = $2,
                        cnpj = $3,
                        contact_name = $4,
                        contact_email = $5,
                        contact_phone = $6
                    WHERE id = $1
                    "#,
                )
                .bind(id.as_i64())
                .bind(&supplier.name)
                .bind(&supplier.cnpj)
                .bind(&supplier.contact.name)
                .bind(&supplier.contact.email)
                .bind(&supplier.contact.phone)
                .execute(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("update", e))?;
                Ok(supplier)
            }
        }
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Supplier>, StoreError> {
        let rows = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT id, name, cnpj, contact_name, contact_email, contact_phone
            FROM suppliers
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_all", e))?;

        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn find_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT id, name, cnpj, contact_name, contact_email, contact_phone
            FROM suppliers
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id", e))?;

        Ok(row.map(Supplier::from))
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn delete_by_id(&self, id: SupplierId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;
        Ok(())
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            StoreError::Unavailable(format!("{operation}: {err}"))
        }
        other => StoreError::Query(format!("{operation}: {other}")),
    }
}
