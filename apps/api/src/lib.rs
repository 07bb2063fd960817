//! # Apotek API
//!
//! REST server for pharmacy master data, purchase-order intake, and
//! purchase-order verification.
//!
//! ## Endpoints
//! ```text
//! GET  /api/health                              liveness probe
//! GET  /api/medicines                           medicine catalogue, by name
//! GET  /api/suppliers                           supplier dropdown, by name
//! POST /api/purchase-orders/full                PO intake + stock/price update
//! GET  /api/purchase-orders/check/{po_number}   PO verification (billing)
//! ```
//!
//! The library target exists so tests can build the router against an
//! in-memory database; the binary wires it to a real file and a TCP socket.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

use apotek_db::Database;

pub use routes::router;

/// Shared application state, cloned into every handler.
///
/// The database handle is constructed once at startup and injected here -
/// never a module-level singleton - so tests can swap in isolated in-memory
/// databases.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}
