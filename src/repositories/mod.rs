//! Capa de persistencia
//! 
//! Define el contrato del store (`RentalStore`) y de la unidad de trabajo
//! (`UnitOfWork`) que reciben las operaciones de escritura del core.
//! Hay dos implementaciones: PostgreSQL vía SQLx y un store en memoria.

pub mod customer_repository;
pub mod maintenance_repository;
pub mod memory_store;
pub mod postgres_store;
pub mod reservation_repository;
pub mod vehicle_repository;

pub use memory_store::MemoryRentalStore;
pub use postgres_store::PgRentalStore;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::models::{
    Customer, MaintenanceDetails, MaintenanceRecord, NewCustomer, NewMaintenanceRecord,
    NewReservation, NewVehicle, Reservation, ReservationDetails, Vehicle, VehicleStatus,
};
use crate::utils::errors::AppResult;

/// Unidad de trabajo: agrupa las lecturas y escrituras de una operación
/// de reserva o mantenimiento. Nada se persiste hasta `commit`; si se
/// descarta sin confirmar, todas las escrituras se pierden.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Lee el vehículo y lo bloquea hasta el final de la unidad de trabajo.
    async fn find_vehicle_for_update(&mut self, license_plate: &str) -> AppResult<Option<Vehicle>>;

    async fn find_customer(&mut self, customer_id: i64) -> AppResult<Option<Customer>>;

    /// Reservas del vehículo cuyo intervalo intersecta `[start, end)`.
    async fn find_overlapping_reservations(
        &mut self,
        vehicle_plate: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>>;

    async fn insert_reservation(&mut self, new: NewReservation) -> AppResult<Reservation>;

    async fn insert_maintenance_record(
        &mut self,
        new: NewMaintenanceRecord,
    ) -> AppResult<MaintenanceRecord>;

    async fn set_vehicle_status(&mut self, license_plate: &str, status: VehicleStatus) -> AppResult<()>;

    async fn commit(self: Box<Self>) -> AppResult<()>;
}

/// Store compartido de la aplicación
#[async_trait]
pub trait RentalStore: Send + Sync {
    /// Abre una unidad de trabajo nueva
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>>;

    async fn create_vehicle(&self, new: NewVehicle) -> AppResult<Vehicle>;

    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>>;

    async fn list_vehicles_by_status(&self, status: VehicleStatus) -> AppResult<Vec<Vehicle>>;

    async fn create_customer(&self, new: NewCustomer) -> AppResult<Customer>;

    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    async fn list_reservations(&self) -> AppResult<Vec<ReservationDetails>>;

    async fn list_maintenance_records(&self) -> AppResult<Vec<MaintenanceDetails>>;

    /// Filas (estado, cantidad); los estados sin vehículos pueden faltar.
    async fn count_vehicles_by_status(&self) -> AppResult<Vec<(VehicleStatus, i64)>>;

    /// Reservas con `start_date > after`, ordenadas ascendentemente.
    async fn upcoming_reservations(&self, after: NaiveDateTime, limit: i64) -> AppResult<Vec<Reservation>>;
}
