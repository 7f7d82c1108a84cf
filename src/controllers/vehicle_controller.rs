use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::dto::ApiResponse;
use crate::models::{NewVehicle, Vehicle, VehicleStatus};
use crate::repositories::RentalStore;
use crate::utils::errors::AppError;

pub struct VehicleController {
    store: Arc<dyn RentalStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn RentalStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        let vehicle = self.store.create_vehicle(NewVehicle::from(request)).await?;
        info!("🚗 Vehículo {} registrado ({})", vehicle.license_plate, vehicle.status);

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle registered successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.store.list_vehicles().await
    }

    /// Vehículos ofrecidos en el formulario de reservas
    pub async fn list_available(&self) -> Result<Vec<Vehicle>, AppError> {
        self.store.list_vehicles_by_status(VehicleStatus::Available).await
    }
}
