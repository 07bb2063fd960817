//! # Router Assembly
//!
//! Builds the axum router with middleware. CORS is wide open (the billing
//! frontend is served from a different origin) and every request is traced.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/medicines", get(handlers::master_data::list_medicines))
        .route("/api/suppliers", get(handlers::master_data::list_suppliers))
        .route(
            "/api/purchase-orders/full",
            post(handlers::purchase_orders::submit),
        )
        .route(
            "/api/purchase-orders/check/{po_number}",
            get(handlers::purchase_orders::check),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use apotek_db::{Database, DbConfig};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn test_app() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let app = router(AppState { db: db.clone() });
        (app, db)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn medicines_listing_is_json_array() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(Request::get("/api/medicines").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await.is_array());
    }

    #[tokio::test]
    async fn unknown_po_check_is_404_with_fixed_message() {
        let (app, _db) = test_app().await;
        let response = app
            .oneshot(
                Request::get("/api/purchase-orders/check/NO-SUCH-PO")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "PO Tidak Ditemukan");
    }

    #[tokio::test]
    async fn full_submit_then_check_round_trips() {
        let (app, db) = test_app().await;

        let supplier = apotek_core::Supplier {
            id: "sup-1".into(),
            name: "PT Kimia Farma".into(),
            created_at: Utc::now(),
        };
        db.suppliers().insert(&supplier).await.unwrap();

        let now = Utc::now();
        let medicine = apotek_core::Medicine {
            id: "med-1".into(),
            name: "Paracetamol 500mg".into(),
            hna_price: 1000.0,
            margin_percentage: 10.0,
            selling_price: 0,
            stock: 0,
            created_at: now,
            updated_at: now,
        };
        db.medicines().insert(&medicine).await.unwrap();

        let submit_body = serde_json::json!({
            "supplier_id": "sup-1",
            "po_number": "PO-100",
            "items": [{"medicine_id": "med-1", "qty": 5}],
        });
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/purchase-orders/full")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(submit_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Stok dan Harga Berhasil Diperbarui");

        let response = app
            .oneshot(
                Request::get("/api/purchase-orders/check/PO-100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["po_number"], "PO-100");
        let details = &body["data"]["purchase_order_details"];
        assert_eq!(details[0]["qty_ordered"], 5);
        assert_eq!(details[0]["medicines"]["name"], "Paracetamol 500mg");
        assert_eq!(details[0]["medicines"]["selling_price"], 1221);
    }

    #[tokio::test]
    async fn submit_failure_is_500_with_error_payload() {
        let (app, _db) = test_app().await;

        let submit_body = serde_json::json!({
            "supplier_id": "ghost-supplier",
            "po_number": "PO-ERR",
            "items": [],
        });
        let response = app
            .oneshot(
                Request::post("/api/purchase-orders/full")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(submit_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }
}
