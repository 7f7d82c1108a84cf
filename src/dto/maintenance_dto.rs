use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::services::MaintenanceRequest;
use crate::utils::validation::{
    deserialize_datetime, normalize_license_plate, validate_cost, validate_not_empty,
};

// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_plate: String,

    #[serde(deserialize_with = "deserialize_datetime")]
    pub service_date: NaiveDateTime,

    #[validate(length(max = 500), custom = "validate_not_empty")]
    pub description: String,

    #[validate(custom = "validate_cost")]
    pub cost: Decimal,
}

impl From<CreateMaintenanceRequest> for MaintenanceRequest {
    fn from(request: CreateMaintenanceRequest) -> Self {
        Self {
            vehicle_plate: normalize_license_plate(&request.vehicle_plate),
            service_date: request.service_date,
            description: request.description.trim().to_string(),
            cost: request.cost,
        }
    }
}
