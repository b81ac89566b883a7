//! # Veloce API
//!
//! HTTP server for the Veloce premium car-rental platform.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Veloce API                                 │
//! │                                                                     │
//! │  Visitor ──► axum router ──► handlers ──► veloce-core (pricing,     │
//! │                                  │         validation)              │
//! │                                  ├──────► veloce-db (catalog,       │
//! │                                  │         settings)                │
//! │                                  └──────► services (dispatcher,     │
//! │                                            admin gate, concierge)   │
//! │                                                  │                  │
//! │                                                  ▼                  │
//! │                                    chat channel / LM endpoint       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the application router with every route and middleware layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/vehicles", get(handlers::catalog::list_vehicles))
        .route("/api/vehicles/:id", get(handlers::catalog::get_vehicle))
        .route("/api/bookings", post(handlers::booking::submit_booking))
        .route("/api/callbacks", post(handlers::callback::submit_callback))
        .route(
            "/api/admin/vehicles",
            get(handlers::admin::list_vehicles_admin).post(handlers::admin::mutate_vehicle),
        )
        .route("/api/admin/settings", post(handlers::admin::update_settings))
        .route("/api/concierge", post(handlers::concierge::chat))
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
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use veloce_core::{Vehicle, VehicleCategory};
    use veloce_db::{Database, DbConfig};

    use crate::services::concierge::testing::CannedChatModel;
    use crate::services::notifier::testing::RecordingTransport;
    use crate::services::notifier::NotificationDispatcher;

    struct Harness {
        router: Router,
        db: Database,
        transport: Arc<RecordingTransport>,
    }

    async fn harness() -> Harness {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let transport = RecordingTransport::new();
        let dispatcher = NotificationDispatcher::new(
            db.settings(),
            transport.clone(),
            Some("test-token".to_string()),
            Some("test-chat".to_string()),
        );
        let concierge = Arc::new(CannedChatModel {
            reply: "Welcome to Veloce".to_string(),
        });
        let state = AppState::new(db.clone(), dispatcher, concierge);

        Harness {
            router: build_router(state),
            db,
            transport,
        }
    }

    async fn seed_vehicle(db: &Database) -> Vehicle {
        let vehicle = Vehicle {
            id: String::new(),
            name: "Huracán Evo".to_string(),
            name_ar: None,
            category: VehicleCategory::Sport,
            price_per_day: 1000,
            horsepower: 640,
            acceleration: 2.9,
            top_speed: 325,
            image_url: None,
            is_available: true,
            available_today: true,
            description: None,
            description_ar: None,
            discount_rules: vec![],
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        db.vehicles().insert(&vehicle).await.unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_public_catalog_lists_seeded_vehicle() {
        let h = harness().await;
        seed_vehicle(&h.db).await;

        let response = h
            .router
            .oneshot(Request::get("/api/vehicles").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["name"], "Huracán Evo");
        assert_eq!(json[0]["pricePerDay"], 1000);
    }

    #[tokio::test]
    async fn test_booking_happy_path_dispatches_once() {
        let h = harness().await;
        let vehicle = seed_vehicle(&h.db).await;

        let response = h
            .router
            .oneshot(post_json(
                "/api/bookings",
                serde_json::json!({
                    "vehicleId": vehicle.id,
                    "name": "Omar",
                    "phone": "+971500000000",
                    "startDate": "2026-05-01",
                    "endDate": "2026-05-16",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["breakdown"]["dayCount"], 16);
        assert_eq!(json["breakdown"]["discountPercent"], 20);
        assert_eq!(json["breakdown"]["finalTotal"], 12800);

        assert_eq!(h.transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_booking_never_reaches_the_network() {
        let h = harness().await;
        let vehicle = seed_vehicle(&h.db).await;

        // Inverted date range
        let response = h
            .router
            .clone()
            .oneshot(post_json(
                "/api/bookings",
                serde_json::json!({
                    "vehicleId": vehicle.id,
                    "name": "Omar",
                    "phone": "+971500000000",
                    "startDate": "2026-05-16",
                    "endDate": "2026-05-01",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Missing name
        let response = h
            .router
            .oneshot(post_json(
                "/api/bookings",
                serde_json::json!({
                    "vehicleId": vehicle.id,
                    "name": "  ",
                    "phone": "+971500000000",
                    "startDate": "2026-05-01",
                    "endDate": "2026-05-04",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(h.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_booking_unknown_vehicle_is_404() {
        let h = harness().await;

        let response = h
            .router
            .oneshot(post_json(
                "/api/bookings",
                serde_json::json!({
                    "vehicleId": "no-such-vehicle",
                    "name": "Omar",
                    "phone": "+971",
                    "startDate": "2026-05-01",
                    "endDate": "2026-05-04",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(h.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_wrong_admin_password_performs_zero_writes() {
        let h = harness().await;

        let response = h
            .router
            .oneshot(post_json(
                "/api/admin/vehicles",
                serde_json::json!({
                    "password": "wrong",
                    "action": "save",
                    "vehicle": {
                        "id": "",
                        "name": "Urus",
                        "nameAr": null,
                        "category": "suv",
                        "pricePerDay": 800,
                        "horsepower": 650,
                        "acceleration": 3.6,
                        "topSpeed": 305,
                        "imageUrl": null,
                        "isAvailable": true,
                        "availableToday": true,
                        "description": null,
                        "descriptionAr": null,
                        "discountRules": [],
                        "createdAt": "2026-01-01T00:00:00Z",
                        "updatedAt": "2026-01-01T00:00:00Z"
                    }
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(h.db.vehicles().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_admin_save_and_delete_round_trip() {
        let h = harness().await;

        let response = h
            .router
            .clone()
            .oneshot(post_json(
                "/api/admin/vehicles",
                serde_json::json!({
                    "password": "veloce2024",
                    "action": "save",
                    "vehicle": {
                        "id": "",
                        "name": "Urus",
                        "nameAr": null,
                        "category": "suv",
                        "pricePerDay": 800,
                        "horsepower": 650,
                        "acceleration": 3.6,
                        "topSpeed": 305,
                        "imageUrl": null,
                        "isAvailable": true,
                        "availableToday": true,
                        "description": null,
                        "descriptionAr": null,
                        "discountRules": [{"days": 5, "percent": 15}],
                        "createdAt": "2026-01-01T00:00:00Z",
                        "updatedAt": "2026-01-01T00:00:00Z"
                    }
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let id = json["vehicle"]["id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 36);
        assert_eq!(h.db.vehicles().count().await.unwrap(), 1);

        let response = h
            .router
            .oneshot(post_json(
                "/api/admin/vehicles",
                serde_json::json!({
                    "password": "veloce2024",
                    "action": "delete",
                    "id": id,
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(h.db.vehicles().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_admin_list_requires_password_header() {
        let h = harness().await;

        let denied = h
            .router
            .clone()
            .oneshot(
                Request::get("/api/admin/vehicles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let allowed = h
            .router
            .oneshot(
                Request::get("/api/admin/vehicles")
                    .header("x-admin-password", "veloce2024")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(allowed.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_settings_rejects_blank_credentials() {
        let h = harness().await;

        let response = h
            .router
            .clone()
            .oneshot(post_json(
                "/api/admin/settings",
                serde_json::json!({
                    "password": "veloce2024",
                    "botToken": "   ",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = h
            .router
            .oneshot(post_json(
                "/api/admin/settings",
                serde_json::json!({
                    "password": "veloce2024",
                    "botToken": "tok-456",
                    "chatId": "-200",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let settings = h.db.settings();
        assert_eq!(
            settings.get("telegram_bot_token").await.unwrap().as_deref(),
            Some("tok-456")
        );
        assert_eq!(
            settings.get("telegram_chat_id").await.unwrap().as_deref(),
            Some("-200")
        );
    }

    #[tokio::test]
    async fn test_unconfigured_dispatch_maps_to_503() {
        // Harness without fallback credentials
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let transport = RecordingTransport::new();
        let dispatcher =
            NotificationDispatcher::new(db.settings(), transport.clone(), None, None);
        let state = AppState::new(
            db.clone(),
            dispatcher,
            Arc::new(CannedChatModel {
                reply: String::new(),
            }),
        );
        let router = build_router(state);
        let vehicle = seed_vehicle(&db).await;

        let response = router
            .oneshot(post_json(
                "/api/bookings",
                serde_json::json!({
                    "vehicleId": vehicle.id,
                    "name": "Omar",
                    "phone": "+971",
                    "startDate": "2026-05-01",
                    "endDate": "2026-05-04",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_concierge_round_trip() {
        let h = harness().await;

        let response = h
            .router
            .oneshot(post_json(
                "/api/concierge",
                serde_json::json!({
                    "messages": [{"role": "user", "content": "Which SUV do you have?"}]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["reply"], "Welcome to Veloce");
    }

    #[tokio::test]
    async fn test_health() {
        let h = harness().await;

        let response = h
            .router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }
}
