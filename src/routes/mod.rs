//! Rutas HTTP
//! 
//! Cada recurso expone su propio router; `create_router` los monta bajo
//! `/api` y añade las capas de trazas, compresión, timeout y CORS.

pub mod customer_routes;
pub mod dashboard_routes;
pub mod maintenance_routes;
pub mod reservation_routes;
pub mod vehicle_routes;

use std::time::Duration;

use axum::{extract::rejection::JsonRejection, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{
    compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

/// Router principal de la aplicación
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/reservations", reservation_routes::create_reservation_router())
        .nest("/api/maintenance", maintenance_routes::create_maintenance_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-rental",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Convierte el rechazo del extractor JSON en un error de cliente propio
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
