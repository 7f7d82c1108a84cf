use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::json_body;
use crate::controllers::reservation_controller::ReservationController;
use crate::dto::reservation_dto::CreateReservationRequest;
use crate::dto::ApiResponse;
use crate::models::{Reservation, ReservationDetails};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reservation_router() -> Router<AppState> {
    Router::new().route("/", get(list_reservations).post(create_reservation))
}

async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Reservation>>), AppError> {
    let request = json_body(payload)?;
    let controller = ReservationController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationDetails>>, AppError> {
    let controller = ReservationController::new(state.store.clone());
    Ok(Json(controller.list().await?))
}
