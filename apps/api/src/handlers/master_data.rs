//! # Master Data Handlers
//!
//! Read-only listings backing the input and billing dropdowns. Pure reads:
//! the only failure mode is surfacing the store's error as a 500.

use axum::extract::State;
use axum::Json;

use apotek_core::{Medicine, SupplierRef};

use crate::error::ApiResult;
use crate::AppState;

/// `GET /api/medicines` - all medicines ordered by name.
pub async fn list_medicines(State(state): State<AppState>) -> ApiResult<Json<Vec<Medicine>>> {
    let medicines = state.db.medicines().list().await?;
    Ok(Json(medicines))
}

/// `GET /api/suppliers` - id+name of all suppliers ordered by name.
pub async fn list_suppliers(State(state): State<AppState>) -> ApiResult<Json<Vec<SupplierRef>>> {
    let suppliers = state.db.suppliers().list().await?;
    Ok(Json(suppliers))
}
