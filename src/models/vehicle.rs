//! Modelo de Vehicle
//! 
//! Este módulo contiene el struct Vehicle y su estado.
//! Mapea a la tabla vehicles con primary key 'license_plate'.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tarifa diaria máxima representable en `NUMERIC(10, 2)`: 99999999.99
pub const MAX_DAILY_RATE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Estado del vehículo - mapea al ENUM vehicle_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash, Default)]
#[sqlx(type_name = "vehicle_status")]
pub enum VehicleStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Available,
        VehicleStatus::Rented,
        VehicleStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::Rented => "Rented",
            VehicleStatus::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub daily_rate: Decimal,
    pub status: VehicleStatus,
}

/// Datos para registrar un vehículo en la flota
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i32,
    pub daily_rate: Decimal,
    pub status: VehicleStatus,
}

impl From<NewVehicle> for Vehicle {
    fn from(new: NewVehicle) -> Self {
        Self {
            license_plate: new.license_plate,
            make: new.make,
            model: new.model,
            year: new.year,
            mileage: new.mileage,
            daily_rate: new.daily_rate,
            status: new.status,
        }
    }
}
