//! # Purchase Order Handlers
//!
//! Intake and verification endpoints. The handlers stay thin; the processing
//! and lookup contracts live in [`crate::services::purchase_order`].

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::services::{PurchaseOrderService, SubmitPoRequest};
use crate::AppState;

/// Confirmation message returned on a fully processed order.
const SUBMIT_OK_MESSAGE: &str = "Stok dan Harga Berhasil Diperbarui";

/// `POST /api/purchase-orders/full`
///
/// Body: `{supplier_id, po_number, items: [{medicine_id, qty}, ...]}`.
/// Success: `{"success": true, "message": ...}`. Any failure surfaces as a
/// 500 with the underlying store message; earlier line items may already be
/// applied (non-atomic intake, see the service docs).
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitPoRequest>,
) -> ApiResult<Json<Value>> {
    let service = PurchaseOrderService::new(state.db.clone());
    service.submit(&request).await?;

    Ok(Json(json!({
        "success": true,
        "message": SUBMIT_OK_MESSAGE,
    })))
}

/// `GET /api/purchase-orders/check/{po_number}`
///
/// Success: `{"success": true, "data": {...}}` with details joined live to
/// medicines. No unique match: 404 with the fixed not-found message.
pub async fn check(
    State(state): State<AppState>,
    Path(po_number): Path<String>,
) -> ApiResult<Json<Value>> {
    let service = PurchaseOrderService::new(state.db.clone());
    let check = service
        .check(&po_number)
        .await?
        .ok_or(ApiError::PoNotFound)?;

    Ok(Json(json!({
        "success": true,
        "data": check,
    })))
}
