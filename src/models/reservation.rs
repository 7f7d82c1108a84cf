//! Modelo de Reservation
//!
//! Una reserva ocupa el intervalo semiabierto `[start_date, end_date)` del vehículo.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Importe máximo representable en `NUMERIC(12, 2)` (coste total de una
/// reserva y coste de un mantenimiento): 9999999999.99
pub const MAX_COST: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Reservation {
    pub reservation_id: i64,
    pub vehicle_plate: String,
    pub customer_id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub total_cost: Decimal,
}

impl Reservation {
    /// Dos reservas se solapan salvo que una termine antes (o justo cuando)
    /// empiece la otra.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        !(self.end_date <= start || self.start_date >= end)
    }
}

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub vehicle_plate: String,
    pub customer_id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub total_cost: Decimal,
}

/// Reserva con datos de display del vehículo y del cliente (JOIN)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ReservationDetails {
    pub reservation_id: i64,
    pub vehicle_plate: String,
    pub customer_id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub total_cost: Decimal,
    pub make: String,
    pub model: String,
    pub customer_name: String,
}
