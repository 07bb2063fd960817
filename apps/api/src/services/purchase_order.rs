//! # Purchase Order Service
//!
//! The processor behind `POST /api/purchase-orders/full` and the verifier
//! behind `GET /api/purchase-orders/check/{po_number}`.
//!
//! ## Processing Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Purchase Order Processing                             │
//! │                                                                         │
//! │  1. INSERT purchase_orders header (status COMPLETED, now)              │
//! │     └── failure here aborts everything - no items were touched         │
//! │                                                                         │
//! │  2. FOR EACH item, strictly in input order:                            │
//! │     a. SELECT medicine by id        (missing → abort remaining)        │
//! │     b. new selling price = pricing::selling_price(HNA, margin)         │
//! │     c. new stock = current stock + qty                                 │
//! │     d. UPDATE medicine stock + selling price                           │
//! │     e. INSERT detail row, buy_price = HNA read in (a)                  │
//! │                                                                         │
//! │  3. Success → confirmation message                                     │
//! │                                                                         │
//! │  NOT ATOMIC: each step is its own unit of work. A failure at item N    │
//! │  leaves items 1..N-1 fully applied and the header inserted. Items for  │
//! │  the same medicine must therefore apply cumulatively in order, which   │
//! │  is why the loop is sequential and never fanned out.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Deserialize;
use tracing::{debug, info};

use apotek_core::{coerce, pricing, PoCheck};
use apotek_db::{Database, DbError, DbResult};

// =============================================================================
// Request DTOs
// =============================================================================

/// Body of `POST /api/purchase-orders/full`.
#[derive(Debug, Deserialize)]
pub struct SubmitPoRequest {
    pub supplier_id: String,
    pub po_number: String,
    #[serde(default)]
    pub items: Vec<PoItem>,
}

/// One line item of an intake request.
///
/// `qty` is leniently coerced: frontends send numbers, numeric strings, or
/// junk, and junk defaults to 0 instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct PoItem {
    pub medicine_id: String,
    #[serde(default, deserialize_with = "coerce::lenient_quantity")]
    pub qty: i64,
}

// =============================================================================
// Service
// =============================================================================

/// Orchestrates purchase-order intake and verification.
#[derive(Debug, Clone)]
pub struct PurchaseOrderService {
    db: Database,
}

impl PurchaseOrderService {
    /// Creates a new service over the given database handle.
    pub fn new(db: Database) -> Self {
        PurchaseOrderService { db }
    }

    /// Processes a full purchase order: header, then per-item pricing,
    /// stock update, and detail row.
    ///
    /// ## Failure Contract
    /// * Header insert fails → error, nothing applied.
    /// * Item N fails (missing medicine or store fault) → error; items
    ///   before N stay applied, items after N are never processed. There is
    ///   no compensating rollback.
    pub async fn submit(&self, request: &SubmitPoRequest) -> DbResult<()> {
        let po = self
            .db
            .purchase_orders()
            .create(&request.supplier_id, &request.po_number)
            .await?;

        info!(
            po_id = %po.id,
            po_number = %po.po_number,
            items = request.items.len(),
            "Processing purchase order"
        );

        for item in &request.items {
            let medicine = self
                .db
                .medicines()
                .get_by_id(&item.medicine_id)
                .await?
                .ok_or_else(|| DbError::not_found("Medicine", item.medicine_id.clone()))?;

            // Recompute the selling price from the CURRENT master data,
            // even when HNA or margin is zero
            let new_price = pricing::selling_price(medicine.hna_price, medicine.margin_percentage);
            let new_stock = medicine.stock + item.qty;

            self.db
                .medicines()
                .update_stock_and_price(&medicine.id, new_stock, new_price)
                .await?;

            // buy_price snapshots the HNA read above, not a live reference
            self.db
                .purchase_orders()
                .add_detail(&po.id, &medicine.id, item.qty, medicine.hna_price)
                .await?;

            debug!(
                medicine_id = %medicine.id,
                qty = item.qty,
                new_stock,
                new_price,
                "Line item applied"
            );
        }

        Ok(())
    }

    /// Looks up a purchase order by order number for verification.
    ///
    /// ## Returns
    /// * `Ok(Some(check))` - order found; details joined live with medicines
    /// * `Ok(None)` - no unique match (treated as not-found by the handler)
    pub async fn check(&self, po_number: &str) -> DbResult<Option<PoCheck>> {
        let Some(po) = self.db.purchase_orders().find_by_number(po_number).await? else {
            return Ok(None);
        };

        let details = self.db.purchase_orders().details_for_check(&po.id).await?;

        Ok(Some(PoCheck {
            id: po.id,
            po_number: po.po_number,
            order_date: po.order_date,
            purchase_order_details: details,
        }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
