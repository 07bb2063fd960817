//! # Medicine Repository
//!
//! Database operations for the medicine master catalogue.
//!
//! ## Key Operations
//! - Full listing ordered by name (dropdowns in input & billing screens)
//! - Point lookup by id (purchase-order processing)
//! - Stock + selling-price update (the only mutation this system performs
//!   on a medicine)

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use apotek_core::Medicine;

/// Repository for medicine database operations.
#[derive(Debug, Clone)]
pub struct MedicineRepository {
    pool: SqlitePool,
}

impl MedicineRepository {
    /// Creates a new MedicineRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MedicineRepository { pool }
    }

    /// Lists all medicines ordered by name ascending.
    pub async fn list(&self) -> DbResult<Vec<Medicine>> {
        let medicines = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT
                id, name, hna_price, margin_percentage,
                selling_price, stock, created_at, updated_at
            FROM medicines
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = medicines.len(), "Listed medicines");
        Ok(medicines)
    }

    /// Gets a medicine by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Medicine))` - found
    /// * `Ok(None)` - no such medicine
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Medicine>> {
        let medicine = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT
                id, name, hna_price, margin_percentage,
                selling_price, stock, created_at, updated_at
            FROM medicines
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(medicine)
    }

    /// Inserts a new medicine (seed tooling and tests; the API itself never
    /// creates medicines).
    pub async fn insert(&self, medicine: &Medicine) -> DbResult<()> {
        debug!(id = %medicine.id, name = %medicine.name, "Inserting medicine");

        sqlx::query(
            r#"
            INSERT INTO medicines (
                id, name, hna_price, margin_percentage,
                selling_price, stock, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&medicine.id)
        .bind(&medicine.name)
        .bind(medicine.hna_price)
        .bind(medicine.margin_percentage)
        .bind(medicine.selling_price)
        .bind(medicine.stock)
        .bind(medicine.created_at)
        .bind(medicine.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Writes the recomputed stock level and selling price for a medicine.
    ///
    /// ## Absolute, Not Delta
    /// The purchase-order processor reads the row first, computes
    /// `new_stock = current + qty` and the new selling price, then writes
    /// both absolutely. Two concurrent submissions touching the same
    /// medicine can therefore lose an update; the processor relies on
    /// strictly sequential per-request processing.
    pub async fn update_stock_and_price(
        &self,
        id: &str,
        stock: i64,
        selling_price: i64,
    ) -> DbResult<()> {
        debug!(id = %id, stock, selling_price, "Updating medicine stock and price");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE medicines
            SET stock = ?2, selling_price = ?3, updated_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(stock)
        .bind(selling_price)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Medicine", id));
        }

        Ok(())
    }

    /// Counts medicines (seed tooling, diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM medicines")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new medicine ID.
pub fn generate_medicine_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn sample(name: &str, hna: f64, margin: f64, stock: i64) -> Medicine {
        let now = Utc::now();
        Medicine {
            id: generate_medicine_id(),
            name: name.to_string(),
            hna_price: hna,
            margin_percentage: margin,
            selling_price: 0,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn list_orders_by_name_ascending() {
        let db = test_db().await;
        let repo = db.medicines();

        repo.insert(&sample("Paracetamol 500mg", 1000.0, 10.0, 50))
            .await
            .unwrap();
        repo.insert(&sample("Amoxicillin 500mg", 1500.0, 15.0, 20))
            .await
            .unwrap();
        repo.insert(&sample("OBH Combi Sirup", 9000.0, 12.0, 10))
            .await
            .unwrap();

        let listed = repo.list().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Amoxicillin 500mg", "OBH Combi Sirup", "Paracetamol 500mg"]
        );
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let db = test_db().await;
        let repo = db.medicines();

        repo.insert(&sample("Cetirizine 10mg", 800.0, 20.0, 30))
            .await
            .unwrap();
        repo.insert(&sample("Antasida Doen", 500.0, 25.0, 40))
            .await
            .unwrap();

        let first = repo.list().await.unwrap();
        let second = repo.list().await.unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.stock, b.stock);
            assert_eq!(a.selling_price, b.selling_price);
        }
    }

    #[tokio::test]
    async fn update_writes_absolute_stock_and_price() {
        let db = test_db().await;
        let repo = db.medicines();

        let med = sample("Vitamin C 500mg", 400.0, 30.0, 12);
        repo.insert(&med).await.unwrap();

        repo.update_stock_and_price(&med.id, 20, 577).await.unwrap();

        let reread = repo.get_by_id(&med.id).await.unwrap().unwrap();
        assert_eq!(reread.stock, 20);
        assert_eq!(reread.selling_price, 577);
        // HNA and margin untouched
        assert_eq!(reread.hna_price, 400.0);
        assert_eq!(reread.margin_percentage, 30.0);
    }

    #[tokio::test]
    async fn update_unknown_medicine_is_not_found() {
        let db = test_db().await;
        let err = db
            .medicines()
            .update_stock_and_price("no-such-id", 1, 1)
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn get_by_id_misses_return_none() {
        let db = test_db().await;
        assert!(db.medicines().get_by_id("missing").await.unwrap().is_none());
    }
}
