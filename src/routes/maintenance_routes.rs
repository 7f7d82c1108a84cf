use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::json_body;
use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::CreateMaintenanceRequest;
use crate::dto::ApiResponse;
use crate::models::{MaintenanceDetails, MaintenanceRecord};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new().route("/", get(list_maintenance_records).post(create_maintenance_record))
}

async fn create_maintenance_record(
    State(state): State<AppState>,
    payload: Result<Json<CreateMaintenanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MaintenanceRecord>>), AppError> {
    let request = json_body(payload)?;
    let controller = MaintenanceController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_maintenance_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceDetails>>, AppError> {
    let controller = MaintenanceController::new(state.store.clone());
    Ok(Json(controller.list().await?))
}
