//! Modelo de MaintenanceRecord
//! 
//! Mapea a la tabla maintenance.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MaintenanceRecord {
    pub maintenance_id: i64,
    pub vehicle_plate: String,
    pub service_date: NaiveDateTime,
    pub description: String,
    pub cost: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewMaintenanceRecord {
    pub vehicle_plate: String,
    pub service_date: NaiveDateTime,
    pub description: String,
    pub cost: Decimal,
}

/// Registro de mantenimiento con los datos de display del vehículo (JOIN)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MaintenanceDetails {
    pub maintenance_id: i64,
    pub vehicle_plate: String,
    pub service_date: NaiveDateTime,
    pub description: String,
    pub cost: Decimal,
    pub make: String,
    pub model: String,
}
