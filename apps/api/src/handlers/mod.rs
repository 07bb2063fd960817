//! # HTTP Handlers
//!
//! Thin axum handlers: deserialize, delegate to a repository or service,
//! serialize. No business logic lives here.

pub mod master_data;
pub mod purchase_orders;

use axum::Json;
use serde_json::{json, Value};

/// `GET /api/health` - liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
