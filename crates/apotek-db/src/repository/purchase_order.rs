//! # Purchase Order Repository
//!
//! Database operations for purchase-order headers, detail rows, and the
//! verification join.
//!
//! ## Intake Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Purchase Order Intake                               │
//! │                                                                         │
//! │  1. CREATE HEADER                                                      │
//! │     └── create() → PurchaseOrder { status: COMPLETED, order_date: now } │
//! │                                                                         │
//! │  2. PER LINE ITEM (driven by the processor in apps/api)                │
//! │     └── add_detail() → PurchaseOrderDetail { buy_price: HNA snapshot } │
//! │                                                                         │
//! │  3. VERIFICATION (billing)                                             │
//! │     └── find_by_number() + details_for_check()                         │
//! │         └── joins medicines LIVE for name + current selling price     │
//! │                                                                         │
//! │  Each call is its own unit of work - no transaction spans the intake.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use apotek_core::{PoCheckDetail, PoCheckMedicine, PoStatus, PurchaseOrder, PurchaseOrderDetail};

/// Repository for purchase-order database operations.
#[derive(Debug, Clone)]
pub struct PurchaseOrderRepository {
    pool: SqlitePool,
}

/// Flat row shape of the verification join.
#[derive(Debug, sqlx::FromRow)]
struct CheckRow {
    qty_ordered: i64,
    buy_price: f64,
    name: String,
    selling_price: i64,
}

impl PurchaseOrderRepository {
    /// Creates a new PurchaseOrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseOrderRepository { pool }
    }

    /// Creates a purchase-order header.
    ///
    /// Status is fixed to `COMPLETED` and `order_date` to now: the current
    /// intake flow records orders that have already happened. Fails with a
    /// foreign-key violation when the supplier does not exist.
    pub async fn create(&self, supplier_id: &str, po_number: &str) -> DbResult<PurchaseOrder> {
        let po = PurchaseOrder {
            id: Uuid::new_v4().to_string(),
            po_number: po_number.to_string(),
            supplier_id: supplier_id.to_string(),
            status: PoStatus::Completed,
            order_date: Utc::now(),
        };

        debug!(id = %po.id, po_number = %po.po_number, "Creating purchase order");

        sqlx::query(
            r#"
            INSERT INTO purchase_orders (id, po_number, supplier_id, status, order_date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&po.id)
        .bind(&po.po_number)
        .bind(&po.supplier_id)
        .bind(po.status)
        .bind(po.order_date)
        .execute(&self.pool)
        .await?;

        Ok(po)
    }

    /// Records a line item.
    ///
    /// ## Snapshot Pattern
    /// `buy_price` is the medicine's HNA as read by the processor before
    /// this insert. It is copied onto the detail row so order history stays
    /// intact when the master price changes later.
    pub async fn add_detail(
        &self,
        po_id: &str,
        medicine_id: &str,
        qty_ordered: i64,
        buy_price: f64,
    ) -> DbResult<PurchaseOrderDetail> {
        let detail = PurchaseOrderDetail {
            id: Uuid::new_v4().to_string(),
            po_id: po_id.to_string(),
            medicine_id: medicine_id.to_string(),
            qty_ordered,
            buy_price,
        };

        debug!(po_id = %detail.po_id, medicine_id = %detail.medicine_id, "Adding PO detail");

        sqlx::query(
            r#"
            INSERT INTO purchase_order_details (id, po_id, medicine_id, qty_ordered, buy_price)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&detail.id)
        .bind(&detail.po_id)
        .bind(&detail.medicine_id)
        .bind(detail.qty_ordered)
        .bind(detail.buy_price)
        .execute(&self.pool)
        .await?;

        Ok(detail)
    }

    /// Finds the purchase order with the given order number, requiring the
    /// match to be unique.
    ///
    /// ## Returns
    /// * `Ok(Some(po))` - exactly one order carries this number
    /// * `Ok(None)` - no match, or the number is ambiguous (several orders
    ///   share it; uniqueness is only a business-process expectation)
    pub async fn find_by_number(&self, po_number: &str) -> DbResult<Option<PurchaseOrder>> {
        let mut matches = sqlx::query_as::<_, PurchaseOrder>(
            r#"
            SELECT id, po_number, supplier_id, status, order_date
            FROM purchase_orders
            WHERE po_number = ?1
            "#,
        )
        .bind(po_number)
        .fetch_all(&self.pool)
        .await?;

        if matches.len() == 1 {
            Ok(matches.pop())
        } else {
            debug!(po_number, count = matches.len(), "PO number not uniquely resolved");
            Ok(None)
        }
    }

    /// Fetches all detail rows of an order joined with their medicines, in
    /// insertion order.
    ///
    /// The join reads the medicine's CURRENT selling price (a "reprice"
    /// view), while `buy_price` stays the historical snapshot.
    pub async fn details_for_check(&self, po_id: &str) -> DbResult<Vec<PoCheckDetail>> {
        let rows = sqlx::query_as::<_, CheckRow>(
            r#"
            SELECT d.qty_ordered, d.buy_price, m.name, m.selling_price
            FROM purchase_order_details d
            INNER JOIN medicines m ON m.id = d.medicine_id
            WHERE d.po_id = ?1
            ORDER BY d.rowid
            "#,
        )
        .bind(po_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PoCheckDetail {
                qty_ordered: row.qty_ordered,
                buy_price: row.buy_price,
                medicines: PoCheckMedicine {
                    name: row.name,
                    selling_price: row.selling_price,
                },
            })
            .collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use apotek_core::{Medicine, Supplier};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_supplier(db: &Database, name: &str) -> Supplier {
        let supplier = Supplier {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        db.suppliers().insert(&supplier).await.unwrap();
        supplier
    }

    async fn seed_medicine(db: &Database, name: &str, hna: f64) -> Medicine {
        let now = Utc::now();
        let medicine = Medicine {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            hna_price: hna,
            margin_percentage: 10.0,
            selling_price: 0,
            stock: 0,
            created_at: now,
            updated_at: now,
        };
        db.medicines().insert(&medicine).await.unwrap();
        medicine
    }

    #[tokio::test]
    async fn create_records_completed_header() {
        let db = test_db().await;
        let supplier = seed_supplier(&db, "PT Kimia Farma").await;

        let po = db
            .purchase_orders()
            .create(&supplier.id, "PO-001")
            .await
            .unwrap();

        assert_eq!(po.status, PoStatus::Completed);

        let found = db
            .purchase_orders()
            .find_by_number("PO-001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, po.id);
        assert_eq!(found.supplier_id, supplier.id);
    }

    #[tokio::test]
    async fn create_rejects_unknown_supplier() {
        let db = test_db().await;
        let err = db
            .purchase_orders()
            .create("no-such-supplier", "PO-002")
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn find_by_number_misses_return_none() {
        let db = test_db().await;
        assert!(db
            .purchase_orders()
            .find_by_number("NO-SUCH-PO")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn ambiguous_po_number_is_treated_as_missing() {
        let db = test_db().await;
        let supplier = seed_supplier(&db, "PT Enseval").await;

        db.purchase_orders()
            .create(&supplier.id, "PO-DUP")
            .await
            .unwrap();
        db.purchase_orders()
            .create(&supplier.id, "PO-DUP")
            .await
            .unwrap();

        assert!(db
            .purchase_orders()
            .find_by_number("PO-DUP")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn check_join_reads_live_price_and_snapshot() {
        let db = test_db().await;
        let supplier = seed_supplier(&db, "PT Bina San Prima").await;
        let medicine = seed_medicine(&db, "Paracetamol 500mg", 1000.0).await;

        let po = db
            .purchase_orders()
            .create(&supplier.id, "PO-100")
            .await
            .unwrap();
        db.purchase_orders()
            .add_detail(&po.id, &medicine.id, 5, medicine.hna_price)
            .await
            .unwrap();

        // Price moves after the order was recorded
        db.medicines()
            .update_stock_and_price(&medicine.id, 5, 1221)
            .await
            .unwrap();

        let details = db.purchase_orders().details_for_check(&po.id).await.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].qty_ordered, 5);
        assert_eq!(details[0].buy_price, 1000.0); // snapshot
        assert_eq!(details[0].medicines.name, "Paracetamol 500mg");
        assert_eq!(details[0].medicines.selling_price, 1221); // live
    }
}
