use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::json_body;
use crate::controllers::customer_controller::CustomerController;
use crate::dto::customer_dto::CreateCustomerRequest;
use crate::dto::ApiResponse;
use crate::models::Customer;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new().route("/", get(list_customers).post(create_customer))
}

async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Customer>>), AppError> {
    let request = json_body(payload)?;
    let controller = CustomerController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let controller = CustomerController::new(state.store.clone());
    Ok(Json(controller.list().await?))
}
