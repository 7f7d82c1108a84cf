use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    // Las fechas se guardan como hora local sin zona
    let now = chrono::Local::now().naive_local();
    let controller =
        DashboardController::new(state.store.clone(), state.config.dashboard_upcoming_limit);
    Ok(Json(controller.dashboard(now).await?))
}
