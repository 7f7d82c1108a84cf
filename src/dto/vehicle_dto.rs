use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::{NewVehicle, VehicleStatus};
use crate::utils::validation::{normalize_license_plate, validate_daily_rate, validate_license_plate};

// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_license_plate")]
    pub license_plate: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(range(min = 0))]
    pub mileage: i32,

    #[validate(custom = "validate_daily_rate")]
    pub daily_rate: Decimal,

    /// Estado inicial; por defecto `Available`
    pub status: Option<VehicleStatus>,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(request: CreateVehicleRequest) -> Self {
        Self {
            license_plate: normalize_license_plate(&request.license_plate),
            make: request.make.trim().to_string(),
            model: request.model.trim().to_string(),
            year: request.year,
            mileage: request.mileage,
            daily_rate: request.daily_rate,
            status: request.status.unwrap_or_default(),
        }
    }
}
