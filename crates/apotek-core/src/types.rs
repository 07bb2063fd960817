//! # Domain Types
//!
//! Core domain types for the pharmacy inventory backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌──────────────────────┐ │
//! │  │    Medicine     │   │  PurchaseOrder   │   │ PurchaseOrderDetail  │ │
//! │  │  ─────────────  │   │  ──────────────  │   │  ──────────────────  │ │
//! │  │  id (UUID)      │   │  id (UUID)       │   │  id (UUID)           │ │
//! │  │  name           │   │  po_number       │   │  po_id (FK)          │ │
//! │  │  hna_price      │   │  supplier_id(FK) │   │  medicine_id (FK)    │ │
//! │  │  margin_pct     │   │  status          │   │  qty_ordered         │ │
//! │  │  selling_price  │   │  order_date      │   │  buy_price (snapshot)│ │
//! │  │  stock          │   └──────────────────┘   └──────────────────────┘ │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐    │
//! │  │    Supplier     │   │  PoCheck / PoCheckDetail                 │    │
//! │  │  id, name       │   │  verification view (live-join pricing)   │    │
//! │  └─────────────────┘   └──────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot vs. Live Price
//! A detail row's `buy_price` is the medicine's HNA at the moment the line
//! item was processed - a historical snapshot. The verification view joins
//! back to `medicines` for `selling_price`, so it shows TODAY'S price, which
//! may differ from anything recorded at order time. Both are intentional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Purchase Order Status
// =============================================================================

/// Status of a purchase order.
///
/// Current intake flow writes orders as `COMPLETED` at creation time; the
/// enum leaves room for a draft/receiving lifecycle later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
pub enum PoStatus {
    /// Order recorded with stock and prices already applied.
    #[default]
    Completed,
}

impl std::fmt::Display for PoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

// =============================================================================
// Medicine
// =============================================================================

/// A medicine in the master catalogue.
///
/// Mutated only by the purchase-order processor (stock and selling price);
/// read-only everywhere else in this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Medicine {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name (e.g. "Paracetamol 500mg Tab").
    pub name: String,

    /// HNA - acquisition/cost price. Base of the pricing formula.
    pub hna_price: f64,

    /// Markup percentage applied to HNA before PPN.
    pub margin_percentage: f64,

    /// Tax-inclusive selling price, recomputed on every received line item.
    pub selling_price: i64,

    /// Stock on hand. Non-negative by convention, not enforced here.
    pub stock: i64,

    /// When the row was created.
    pub created_at: DateTime<Utc>,

    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier medicines are procured from. Read-only to this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Supplier display name.
    pub name: String,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

/// The id+name projection returned by the supplier listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SupplierRef {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Purchase Order
// =============================================================================

/// A purchase-order header. Created once per intake request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseOrder {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-readable order number. Expected unique per business process,
    /// not enforced at this layer.
    pub po_number: String,

    /// Supplier the order was placed with.
    pub supplier_id: String,

    /// Fixed to [`PoStatus::Completed`] in the current intake flow.
    pub status: PoStatus,

    /// When the order was recorded.
    pub order_date: DateTime<Utc>,
}

/// A single line item of a purchase order. Immutable after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseOrderDetail {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning purchase order.
    pub po_id: String,

    /// Medicine this line item received.
    pub medicine_id: String,

    /// Quantity ordered (leniently coerced at the request boundary).
    pub qty_ordered: i64,

    /// HNA snapshot taken when the item was processed.
    pub buy_price: f64,
}

// =============================================================================
// Verification View
// =============================================================================

/// Result of a purchase-order check by order number.
///
/// Serializes to the `data` object of the check endpoint:
/// `{id, po_number, order_date, purchase_order_details: [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoCheck {
    pub id: String,
    pub po_number: String,
    pub order_date: DateTime<Utc>,
    pub purchase_order_details: Vec<PoCheckDetail>,
}

/// One detail row of the verification view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoCheckDetail {
    pub qty_ordered: i64,
    /// Historical HNA snapshot recorded at order time.
    pub buy_price: f64,
    /// Referenced medicine, joined live. Field named `medicines` to keep
    /// the wire shape of the original relational-join response.
    pub medicines: PoCheckMedicine,
}

/// The medicine columns exposed by the verification join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoCheckMedicine {
    pub name: String,
    /// CURRENT selling price - "what would this cost today", not the price
    /// at order time.
    pub selling_price: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn po_status_serializes_uppercase() {
        let s = serde_json::to_string(&PoStatus::Completed).unwrap();
        assert_eq!(s, r#""COMPLETED""#);
        assert_eq!(PoStatus::Completed.to_string(), "COMPLETED");
    }

    #[test]
    fn po_status_default_is_completed() {
        assert_eq!(PoStatus::default(), PoStatus::Completed);
    }

    #[test]
    fn check_view_keeps_wire_field_names() {
        let check = PoCheck {
            id: "po-1".into(),
            po_number: "PO-100".into(),
            order_date: Utc::now(),
            purchase_order_details: vec![PoCheckDetail {
                qty_ordered: 5,
                buy_price: 1000.0,
                medicines: PoCheckMedicine {
                    name: "Paracetamol 500mg".into(),
                    selling_price: 1221,
                },
            }],
        };

        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["purchase_order_details"][0]["qty_ordered"], 5);
        assert_eq!(
            json["purchase_order_details"][0]["medicines"]["selling_price"],
            1221
        );
    }
}
