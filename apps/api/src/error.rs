//! Error types for the API surface.
//!
//! ## Propagation Policy
//! ```text
//! DbError (apotek-db)
//!      │
//!      ▼
//! ApiError (this module)
//!      │
//!      ▼
//! JSON payload with a fixed status family:
//!   404  {"success": false, "message": "PO Tidak Ditemukan"}
//!   500  {"success": false, "error": "<underlying message>"}
//! ```
//!
//! Nothing is retried; a fault mid-way through purchase-order processing
//! surfaces exactly like any other store fault even though earlier line
//! items already took effect. The caller cannot tell the difference - a
//! documented limitation of the non-transactional intake, not hidden here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use apotek_db::DbError;

/// API request errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No purchase order uniquely matches the requested order number.
    /// A client-facing outcome, not a server fault.
    #[error("PO Tidak Ditemukan")]
    PoNotFound,

    /// Any data-store failure (connectivity, constraint violation, missing
    /// referenced row).
    #[error(transparent)]
    Store(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::PoNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "message": "PO Tidak Ditemukan",
                })),
            )
                .into_response(),

            ApiError::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": err.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

/// Result type for handler functions.
pub type ApiResult<T> = Result<T, ApiError>;
