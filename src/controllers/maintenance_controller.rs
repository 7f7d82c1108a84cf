use std::sync::Arc;

use validator::Validate;

use crate::dto::maintenance_dto::CreateMaintenanceRequest;
use crate::dto::ApiResponse;
use crate::models::{MaintenanceDetails, MaintenanceRecord};
use crate::repositories::RentalStore;
use crate::services::{MaintenanceRequest, MaintenanceService};
use crate::utils::errors::AppError;

pub struct MaintenanceController {
    store: Arc<dyn RentalStore>,
    scheduler: MaintenanceService,
}

impl MaintenanceController {
    pub fn new(store: Arc<dyn RentalStore>) -> Self {
        Self {
            scheduler: MaintenanceService::new(store.clone()),
            store,
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecord>, AppError> {
        request.validate()?;

        let record = self
            .scheduler
            .schedule(MaintenanceRequest::from(request))
            .await?;

        Ok(ApiResponse::success_with_message(
            record,
            "Maintenance record created successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceDetails>, AppError> {
        self.store.list_maintenance_records().await
    }
}
