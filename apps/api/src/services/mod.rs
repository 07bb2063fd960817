//! # Service Layer
//!
//! Orchestration between the HTTP handlers and the repositories. The only
//! non-trivial service is purchase-order processing; master-data reads go
//! straight from handler to repository.

pub mod purchase_order;

pub use purchase_order::{PoItem, PurchaseOrderService, SubmitPoRequest};
