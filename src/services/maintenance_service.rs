//! Planificador de mantenimiento
//!
//! Registra un evento de mantenimiento y pasa el vehículo a `Maintenance`.
//! No hay comprobación de fechas ni de solapamiento con reservas.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::info;

use crate::models::{MaintenanceRecord, NewMaintenanceRecord, VehicleStatus};
use crate::repositories::{RentalStore, UnitOfWork};
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct MaintenanceRequest {
    pub vehicle_plate: String,
    pub service_date: NaiveDateTime,
    pub description: String,
    pub cost: Decimal,
}

/// Crea el registro dentro de la unidad de trabajo recibida (sin commit).
/// Una matrícula inexistente falla con `UnknownVehicle` antes de escribir.
pub async fn create_maintenance_record(
    uow: &mut dyn UnitOfWork,
    request: &MaintenanceRequest,
) -> AppResult<MaintenanceRecord> {
    let vehicle = uow
        .find_vehicle_for_update(&request.vehicle_plate)
        .await?
        .ok_or_else(|| AppError::UnknownVehicle(request.vehicle_plate.clone()))?;

    let record = uow
        .insert_maintenance_record(NewMaintenanceRecord {
            vehicle_plate: vehicle.license_plate.clone(),
            service_date: request.service_date,
            description: request.description.clone(),
            cost: request.cost,
        })
        .await?;
    uow.set_vehicle_status(&vehicle.license_plate, VehicleStatus::Maintenance)
        .await?;

    Ok(record)
}

#[derive(Clone)]
pub struct MaintenanceService {
    store: Arc<dyn RentalStore>,
}

impl MaintenanceService {
    pub fn new(store: Arc<dyn RentalStore>) -> Self {
        Self { store }
    }

    pub async fn schedule(&self, request: MaintenanceRequest) -> AppResult<MaintenanceRecord> {
        let mut uow = self.store.begin().await?;
        let record = create_maintenance_record(uow.as_mut(), &request).await?;
        uow.commit().await?;

        info!(
            "🔧 Mantenimiento #{} registrado para {}: {}",
            record.maintenance_id, record.vehicle_plate, record.description
        );

        Ok(record)
    }
}
