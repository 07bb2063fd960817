//! # Supplier Repository
//!
//! Database operations for supplier master data. Suppliers are read-only to
//! the running system; inserts exist for seed tooling and tests.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use apotek_core::{Supplier, SupplierRef};

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Lists all suppliers as id+name pairs, ordered by name ascending.
    ///
    /// The listing endpoint only needs the dropdown projection, so the full
    /// row is never materialized.
    pub async fn list(&self) -> DbResult<Vec<SupplierRef>> {
        let suppliers =
            sqlx::query_as::<_, SupplierRef>("SELECT id, name FROM suppliers ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        debug!(count = suppliers.len(), "Listed suppliers");
        Ok(suppliers)
    }

    /// Inserts a new supplier (seed tooling and tests).
    pub async fn insert(&self, supplier: &Supplier) -> DbResult<()> {
        debug!(id = %supplier.id, name = %supplier.name, "Inserting supplier");

        sqlx::query("INSERT INTO suppliers (id, name, created_at) VALUES (?1, ?2, ?3)")
            .bind(&supplier.id)
            .bind(&supplier.name)
            .bind(supplier.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts suppliers (seed tooling, diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suppliers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new supplier ID.
pub fn generate_supplier_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;

    fn sample(name: &str) -> Supplier {
        Supplier {
            id: generate_supplier_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_orders_by_name_and_projects_id_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.suppliers();

        repo.insert(&sample("PT Kimia Farma")).await.unwrap();
        repo.insert(&sample("PT Enseval Putera")).await.unwrap();
        repo.insert(&sample("PT Bina San Prima")).await.unwrap();

        let listed = repo.list().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["PT Bina San Prima", "PT Enseval Putera", "PT Kimia Farma"]
        );
    }

    #[tokio::test]
    async fn empty_table_lists_empty() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.suppliers().list().await.unwrap().is_empty());
    }
}
