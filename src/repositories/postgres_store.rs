//! Store PostgreSQL
//!
//! Cada unidad de trabajo es una transacción SQLx (READ COMMITTED). El
//! bloqueo de fila del vehículo más la exclusion constraint de la tabla
//! reservations impiden admitir dos reservas solapadas.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use super::{
    customer_repository::CustomerRepository, maintenance_repository::MaintenanceRepository,
    reservation_repository::ReservationRepository, vehicle_repository::VehicleRepository,
    RentalStore, UnitOfWork,
};
use crate::models::{
    Customer, MaintenanceDetails, MaintenanceRecord, NewCustomer, NewMaintenanceRecord,
    NewReservation, NewVehicle, Reservation, ReservationDetails, Vehicle, VehicleStatus,
};
use crate::utils::errors::AppResult;

pub struct PgRentalStore {
    pool: PgPool,
    vehicles: VehicleRepository,
    customers: CustomerRepository,
    reservations: ReservationRepository,
    maintenance: MaintenanceRepository,
}

impl PgRentalStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            reservations: ReservationRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Unidad de trabajo respaldada por una transacción. Si se descarta sin
/// `commit`, SQLx hace rollback al soltar la transacción.
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn find_vehicle_for_update(&mut self, license_plate: &str) -> AppResult<Option<Vehicle>> {
        VehicleRepository::find_for_update(&mut *self.tx, license_plate).await
    }

    async fn find_customer(&mut self, customer_id: i64) -> AppResult<Option<Customer>> {
        CustomerRepository::find_by_id(&mut *self.tx, customer_id).await
    }

    async fn find_overlapping_reservations(
        &mut self,
        vehicle_plate: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>> {
        ReservationRepository::find_overlapping(&mut *self.tx, vehicle_plate, start, end).await
    }

    async fn insert_reservation(&mut self, new: NewReservation) -> AppResult<Reservation> {
        ReservationRepository::insert(&mut *self.tx, new).await
    }

    async fn insert_maintenance_record(
        &mut self,
        new: NewMaintenanceRecord,
    ) -> AppResult<MaintenanceRecord> {
        MaintenanceRepository::insert(&mut *self.tx, new).await
    }

    async fn set_vehicle_status(&mut self, license_plate: &str, status: VehicleStatus) -> AppResult<()> {
        VehicleRepository::update_status(&mut *self.tx, license_plate, status).await
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx.commit().await?;
        debug!("💾 Transacción confirmada");
        Ok(())
    }
}

#[async_trait]
impl RentalStore for PgRentalStore {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }

    async fn create_vehicle(&self, new: NewVehicle) -> AppResult<Vehicle> {
        self.vehicles.create(new).await
    }

    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        self.vehicles.find_all().await
    }

    async fn list_vehicles_by_status(&self, status: VehicleStatus) -> AppResult<Vec<Vehicle>> {
        self.vehicles.find_by_status(status).await
    }

    async fn create_customer(&self, new: NewCustomer) -> AppResult<Customer> {
        self.customers.create(new).await
    }

    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.customers.find_all().await
    }

    async fn list_reservations(&self) -> AppResult<Vec<ReservationDetails>> {
        self.reservations.find_all_with_details().await
    }

    async fn list_maintenance_records(&self) -> AppResult<Vec<MaintenanceDetails>> {
        self.maintenance.find_all_with_details().await
    }

    async fn count_vehicles_by_status(&self) -> AppResult<Vec<(VehicleStatus, i64)>> {
        self.vehicles.count_by_status().await
    }

    async fn upcoming_reservations(&self, after: NaiveDateTime, limit: i64) -> AppResult<Vec<Reservation>> {
        self.reservations.find_upcoming(after, limit).await
    }
}
