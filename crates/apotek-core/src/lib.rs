//! # apotek-core: Pure Business Logic for the Pharmacy Backend
//!
//! This crate is the **heart** of the system. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Apotek Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Clients (Billing UI)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum handlers)                     │   │
//! │  │    list_medicines, submit_purchase_order, check_po, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ apotek-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐     ┌───────────┐     ┌──────────────────┐     │   │
//! │  │   │   types   │     │  pricing  │     │     coerce       │     │   │
//! │  │   │ Medicine  │     │ HNA+marg. │     │ number-or-string │     │   │
//! │  │   │ PO/Detail │     │ +PPN 11%  │     │ lenient parsing  │     │   │
//! │  │   └───────────┘     └───────────┘     └──────────────────┘     │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apotek-db (SQLite)                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Rules
//! 1. No I/O of any kind (no db, no network, no filesystem)
//! 2. Every function is deterministic given its inputs
//! 3. Malformed numeric input degrades to zero, never panics

pub mod coerce;
pub mod pricing;
pub mod types;

// Re-export the most commonly used items
pub use pricing::{selling_price, PPN_FACTOR};
pub use types::{
    Medicine, PoCheck, PoCheckDetail, PoCheckMedicine, PoStatus, PurchaseOrder,
    PurchaseOrderDetail, Supplier, SupplierRef,
};
