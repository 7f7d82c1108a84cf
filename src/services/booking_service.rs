//! Motor de reservas
//!
//! Valida y confirma una reserva nueva: orden de fechas, existencia de
//! vehículo y cliente, solapamiento, cálculo de coste y transición del
//! vehículo a `Rented`. Todas las validaciones ocurren antes de cualquier
//! escritura y todo corre dentro de una única unidad de trabajo.

use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::models::{NewReservation, Reservation, VehicleStatus, MAX_COST};
use crate::repositories::{RentalStore, UnitOfWork};
use crate::utils::errors::{AppError, AppResult};

/// Datos de entrada de una reserva
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub vehicle_plate: String,
    pub customer_id: i64,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// Días completos entre dos instantes (la fracción de día se trunca).
pub fn billable_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_days()
}

/// Coste total = días completos × tarifa diaria. Una reserva de menos
/// de 24 horas cuesta 0. Falla con `CostOutOfRange` si el resultado no
/// cabe en la columna `total_cost`.
pub fn compute_total_cost(
    start: NaiveDateTime,
    end: NaiveDateTime,
    daily_rate: Decimal,
) -> AppResult<Decimal> {
    Decimal::from(billable_days(start, end))
        .checked_mul(daily_rate)
        .filter(|cost| *cost <= MAX_COST)
        .ok_or(AppError::CostOutOfRange { max: MAX_COST })
}

/// Crea la reserva dentro de la unidad de trabajo recibida.
///
/// No confirma: el llamador decide el commit. Si devuelve error no se ha
/// escrito nada en `uow`.
pub async fn create_reservation(
    uow: &mut dyn UnitOfWork,
    request: &ReservationRequest,
) -> AppResult<Reservation> {
    if request.start_date >= request.end_date {
        return Err(AppError::InvalidDateRange);
    }

    let vehicle = uow
        .find_vehicle_for_update(&request.vehicle_plate)
        .await?
        .ok_or_else(|| AppError::UnknownVehicle(request.vehicle_plate.clone()))?;

    if uow.find_customer(request.customer_id).await?.is_none() {
        return Err(AppError::UnknownCustomer(request.customer_id));
    }

    let overlapping = uow
        .find_overlapping_reservations(&vehicle.license_plate, request.start_date, request.end_date)
        .await?;
    if let Some(existing) = overlapping.first() {
        warn!(
            "⚠️ Reserva rechazada: {} ya reservado ({} -> {}, reserva #{})",
            vehicle.license_plate, existing.start_date, existing.end_date, existing.reservation_id
        );
        return Err(AppError::OverlapConflict(vehicle.license_plate));
    }

    let total_cost = compute_total_cost(request.start_date, request.end_date, vehicle.daily_rate)?;

    let reservation = uow
        .insert_reservation(NewReservation {
            vehicle_plate: vehicle.license_plate.clone(),
            customer_id: request.customer_id,
            start_date: request.start_date,
            end_date: request.end_date,
            total_cost,
        })
        .await?;
    uow.set_vehicle_status(&vehicle.license_plate, VehicleStatus::Rented)
        .await?;

    Ok(reservation)
}

#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn RentalStore>,
}

impl BookingService {
    pub fn new(store: Arc<dyn RentalStore>) -> Self {
        Self { store }
    }

    /// Abre la unidad de trabajo, crea la reserva y confirma.
    pub async fn book(&self, request: ReservationRequest) -> AppResult<Reservation> {
        let mut uow = self.store.begin().await?;
        let reservation = create_reservation(uow.as_mut(), &request).await?;
        uow.commit().await?;

        info!(
            "✅ Reserva #{} creada: {} para cliente {} ({} -> {}), coste {}",
            reservation.reservation_id,
            reservation.vehicle_plate,
            reservation.customer_id,
            reservation.start_date,
            reservation.end_date,
            reservation.total_cost
        );

        Ok(reservation)
    }
}
