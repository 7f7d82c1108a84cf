use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::json_body;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::dto::ApiResponse;
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/available", get(list_available_vehicles))
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Vehicle>>), AppError> {
    let request = json_body(payload)?;
    let controller = VehicleController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.list().await?))
}

async fn list_available_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    Ok(Json(controller.list_available().await?))
}
