use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::dto::dashboard_dto::DashboardResponse;
use crate::repositories::RentalStore;
use crate::services::FleetService;
use crate::utils::errors::AppError;

pub struct DashboardController {
    fleet: FleetService,
}

impl DashboardController {
    pub fn new(store: Arc<dyn RentalStore>, upcoming_limit: i64) -> Self {
        Self {
            fleet: FleetService::new(store, upcoming_limit),
        }
    }

    pub async fn dashboard(&self, now: NaiveDateTime) -> Result<DashboardResponse, AppError> {
        let summary = self.fleet.summary(now).await?;
        Ok(DashboardResponse::new(summary, now))
    }
}
