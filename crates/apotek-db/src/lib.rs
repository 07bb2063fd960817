//! # apotek-db: Database Layer for the Pharmacy Backend
//!
//! SQLite storage behind a repository API. Everything the rest of the system
//! knows about persistence lives here.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (medicine, supplier, purchase order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apotek_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./apotek.db")).await?;
//!
//! let medicines = db.medicines().list().await?;
//! let po = db.purchase_orders().create(&supplier_id, "PO-100").await?;
//! ```
//!
//! ## No Transaction Spanning the Order Loop
//! Each header insert, medicine read, stock/price update, and detail insert
//! is its own independent unit of work. A failure mid-order leaves earlier
//! items applied. That mirrors the hosted-store deployment this system
//! replaces and is pinned by tests; wrapping the loop in `pool.begin()` is
//! the known hardening path.

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::medicine::MedicineRepository;
pub use repository::purchase_order::PurchaseOrderRepository;
pub use repository::supplier::SupplierRepository;
