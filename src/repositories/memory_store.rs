//! Store en memoria
//!
//! Modelo de un solo escritor: cada unidad de trabajo retiene el mutex de
//! las tablas durante toda la operación y trabaja sobre una copia que solo
//! reemplaza a las tablas en `commit`.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{RentalStore, UnitOfWork};
use crate::models::{
    Customer, MaintenanceDetails, MaintenanceRecord, NewCustomer, NewMaintenanceRecord,
    NewReservation, NewVehicle, Reservation, ReservationDetails, Vehicle, VehicleStatus,
};
use crate::utils::errors::{conflict_error, AppError, AppResult};

#[derive(Debug, Clone, Default)]
struct Tables {
    vehicles: BTreeMap<String, Vehicle>,
    customers: BTreeMap<i64, Customer>,
    reservations: BTreeMap<i64, Reservation>,
    maintenance: BTreeMap<i64, MaintenanceRecord>,
    next_customer_id: i64,
    next_reservation_id: i64,
    next_maintenance_id: i64,
}

impl Tables {
    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

#[derive(Clone, Default)]
pub struct MemoryRentalStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryRentalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Busca un vehículo fuera de cualquier unidad de trabajo
    pub async fn find_vehicle(&self, license_plate: &str) -> Option<Vehicle> {
        self.tables.lock().await.vehicles.get(license_plate).cloned()
    }

    pub async fn reservation_count(&self) -> usize {
        self.tables.lock().await.reservations.len()
    }

    pub async fn maintenance_count(&self) -> usize {
        self.tables.lock().await.maintenance.len()
    }
}

pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<Tables>,
    staged: Tables,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn find_vehicle_for_update(&mut self, license_plate: &str) -> AppResult<Option<Vehicle>> {
        Ok(self.staged.vehicles.get(license_plate).cloned())
    }

    async fn find_customer(&mut self, customer_id: i64) -> AppResult<Option<Customer>> {
        Ok(self.staged.customers.get(&customer_id).cloned())
    }

    async fn find_overlapping_reservations(
        &mut self,
        vehicle_plate: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>> {
        Ok(self
            .staged
            .reservations
            .values()
            .filter(|r| r.vehicle_plate == vehicle_plate && r.overlaps(start, end))
            .cloned()
            .collect())
    }

    async fn insert_reservation(&mut self, new: NewReservation) -> AppResult<Reservation> {
        if !self.staged.vehicles.contains_key(&new.vehicle_plate) {
            return Err(AppError::UnknownVehicle(new.vehicle_plate));
        }
        if !self.staged.customers.contains_key(&new.customer_id) {
            return Err(AppError::UnknownCustomer(new.customer_id));
        }
        if new.start_date >= new.end_date {
            return Err(AppError::InvalidDateRange);
        }
        // Equivalente a la exclusion constraint de PostgreSQL
        if self
            .staged
            .reservations
            .values()
            .any(|r| r.vehicle_plate == new.vehicle_plate && r.overlaps(new.start_date, new.end_date))
        {
            return Err(AppError::OverlapConflict(new.vehicle_plate));
        }

        let reservation = Reservation {
            reservation_id: Tables::next_id(&mut self.staged.next_reservation_id),
            vehicle_plate: new.vehicle_plate,
            customer_id: new.customer_id,
            start_date: new.start_date,
            end_date: new.end_date,
            total_cost: new.total_cost,
        };
        self.staged
            .reservations
            .insert(reservation.reservation_id, reservation.clone());

        Ok(reservation)
    }

    async fn insert_maintenance_record(
        &mut self,
        new: NewMaintenanceRecord,
    ) -> AppResult<MaintenanceRecord> {
        if !self.staged.vehicles.contains_key(&new.vehicle_plate) {
            return Err(AppError::UnknownVehicle(new.vehicle_plate));
        }

        let record = MaintenanceRecord {
            maintenance_id: Tables::next_id(&mut self.staged.next_maintenance_id),
            vehicle_plate: new.vehicle_plate,
            service_date: new.service_date,
            description: new.description,
            cost: new.cost,
        };
        self.staged
            .maintenance
            .insert(record.maintenance_id, record.clone());

        Ok(record)
    }

    async fn set_vehicle_status(&mut self, license_plate: &str, status: VehicleStatus) -> AppResult<()> {
        let vehicle = self
            .staged
            .vehicles
            .get_mut(license_plate)
            .ok_or_else(|| AppError::UnknownVehicle(license_plate.to_string()))?;
        vehicle.status = status;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MemoryUnitOfWork { mut guard, staged } = *self;
        *guard = staged;
        Ok(())
    }
}

#[async_trait]
impl RentalStore for MemoryRentalStore {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let guard = self.tables.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(MemoryUnitOfWork { guard, staged }))
    }

    async fn create_vehicle(&self, new: NewVehicle) -> AppResult<Vehicle> {
        let mut tables = self.tables.lock().await;
        if tables.vehicles.contains_key(&new.license_plate) {
            return Err(conflict_error("Vehicle", "license plate", &new.license_plate));
        }
        let vehicle = Vehicle::from(new);
        tables
            .vehicles
            .insert(vehicle.license_plate.clone(), vehicle.clone());
        Ok(vehicle)
    }

    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.tables.lock().await.vehicles.values().cloned().collect())
    }

    async fn list_vehicles_by_status(&self, status: VehicleStatus) -> AppResult<Vec<Vehicle>> {
        Ok(self
            .tables
            .lock()
            .await
            .vehicles
            .values()
            .filter(|v| v.status == status)
            .cloned()
            .collect())
    }

    async fn create_customer(&self, new: NewCustomer) -> AppResult<Customer> {
        let mut tables = self.tables.lock().await;
        let customer = Customer {
            customer_id: Tables::next_id(&mut tables.next_customer_id),
            name: new.name,
            contact_info: new.contact_info,
            license_number: new.license_number,
        };
        tables
            .customers
            .insert(customer.customer_id, customer.clone());
        Ok(customer)
    }

    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        Ok(self.tables.lock().await.customers.values().cloned().collect())
    }

    async fn list_reservations(&self) -> AppResult<Vec<ReservationDetails>> {
        let tables = self.tables.lock().await;
        let mut details: Vec<ReservationDetails> = tables
            .reservations
            .values()
            .filter_map(|r| {
                let vehicle = tables.vehicles.get(&r.vehicle_plate)?;
                let customer = tables.customers.get(&r.customer_id)?;
                Some(ReservationDetails {
                    reservation_id: r.reservation_id,
                    vehicle_plate: r.vehicle_plate.clone(),
                    customer_id: r.customer_id,
                    start_date: r.start_date,
                    end_date: r.end_date,
                    total_cost: r.total_cost,
                    make: vehicle.make.clone(),
                    model: vehicle.model.clone(),
                    customer_name: customer.name.clone(),
                })
            })
            .collect();
        details.sort_by_key(|d| (d.start_date, d.reservation_id));
        Ok(details)
    }

    async fn list_maintenance_records(&self) -> AppResult<Vec<MaintenanceDetails>> {
        let tables = self.tables.lock().await;
        let mut details: Vec<MaintenanceDetails> = tables
            .maintenance
            .values()
            .filter_map(|m| {
                let vehicle = tables.vehicles.get(&m.vehicle_plate)?;
                Some(MaintenanceDetails {
                    maintenance_id: m.maintenance_id,
                    vehicle_plate: m.vehicle_plate.clone(),
                    service_date: m.service_date,
                    description: m.description.clone(),
                    cost: m.cost,
                    make: vehicle.make.clone(),
                    model: vehicle.model.clone(),
                })
            })
            .collect();
        details.sort_by(|a, b| {
            b.service_date
                .cmp(&a.service_date)
                .then(b.maintenance_id.cmp(&a.maintenance_id))
        });
        Ok(details)
    }

    async fn count_vehicles_by_status(&self) -> AppResult<Vec<(VehicleStatus, i64)>> {
        let tables = self.tables.lock().await;
        Ok(VehicleStatus::ALL
            .iter()
            .map(|status| {
                let count = tables.vehicles.values().filter(|v| v.status == *status).count();
                (*status, count as i64)
            })
            .filter(|(_, count)| *count > 0)
            .collect())
    }

    async fn upcoming_reservations(&self, after: NaiveDateTime, limit: i64) -> AppResult<Vec<Reservation>> {
        let tables = self.tables.lock().await;
        let mut upcoming: Vec<Reservation> = tables
            .reservations
            .values()
            .filter(|r| r.start_date > after)
            .cloned()
            .collect();
        upcoming.sort_by_key(|r| (r.start_date, r.reservation_id));
        upcoming.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(upcoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    async fn seeded() -> MemoryRentalStore {
        let store = MemoryRentalStore::new();
        store
            .create_vehicle(NewVehicle {
                license_plate: "MH12AB1234".into(),
                make: "Hyundai".into(),
                model: "Creta".into(),
                year: 2022,
                mileage: 12000,
                daily_rate: Decimal::new(1500, 0),
                status: VehicleStatus::Available,
            })
            .await
            .unwrap();
        store
            .create_customer(NewCustomer {
                name: "Asha Rao".into(),
                contact_info: "+91 98200 00000".into(),
                license_number: "MH14XY5678".into(),
            })
            .await
            .unwrap();
        store
    }

    fn new_reservation(start: u32, end: u32) -> NewReservation {
        NewReservation {
            vehicle_plate: "MH12AB1234".into(),
            customer_id: 1,
            start_date: day(start),
            end_date: day(end),
            total_cost: Decimal::ZERO,
        }
    }

    #[tokio::test]
    async fn test_uncommitted_work_is_discarded() {
        let store = seeded().await;

        let mut uow = store.begin().await.unwrap();
        uow.insert_reservation(new_reservation(1, 3)).await.unwrap();
        uow.set_vehicle_status("MH12AB1234", VehicleStatus::Rented)
            .await
            .unwrap();
        drop(uow);

        assert_eq!(store.reservation_count().await, 0);
        let vehicle = store.find_vehicle("MH12AB1234").await.unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Available);
    }

    #[tokio::test]
    async fn test_commit_publishes_writes() {
        let store = seeded().await;

        let mut uow = store.begin().await.unwrap();
        let reservation = uow.insert_reservation(new_reservation(1, 3)).await.unwrap();
        uow.commit().await.unwrap();

        assert_eq!(reservation.reservation_id, 1);
        assert_eq!(store.reservation_count().await, 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_overlap_like_exclusion_constraint() {
        let store = seeded().await;

        let mut uow = store.begin().await.unwrap();
        uow.insert_reservation(new_reservation(1, 3)).await.unwrap();
        let err = uow.insert_reservation(new_reservation(2, 5)).await.unwrap_err();
        assert!(matches!(err, AppError::OverlapConflict(_)));
    }

    #[tokio::test]
    async fn test_duplicate_plate_is_conflict() {
        let store = seeded().await;
        let err = store
            .create_vehicle(NewVehicle {
                license_plate: "MH12AB1234".into(),
                make: "Tata".into(),
                model: "Nexon".into(),
                year: 2021,
                mileage: 100,
                daily_rate: Decimal::new(1000, 0),
                status: VehicleStatus::Available,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_joined_views_and_available_filter() {
        let store = seeded().await;

        let mut uow = store.begin().await.unwrap();
        uow.insert_reservation(new_reservation(1, 3)).await.unwrap();
        uow.insert_maintenance_record(NewMaintenanceRecord {
            vehicle_plate: "MH12AB1234".into(),
            service_date: day(10),
            description: "Tyre Rotation".into(),
            cost: Decimal::new(80000, 2),
        })
        .await
        .unwrap();
        uow.set_vehicle_status("MH12AB1234", VehicleStatus::Maintenance)
            .await
            .unwrap();
        uow.commit().await.unwrap();

        let reservations = store.list_reservations().await.unwrap();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].customer_name, "Asha Rao");
        assert_eq!(reservations[0].model, "Creta");

        let records = store.list_maintenance_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].make, "Hyundai");

        assert!(store
            .list_vehicles_by_status(VehicleStatus::Available)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_counts_omit_empty_statuses() {
        let store = seeded().await;
        let rows = store.count_vehicles_by_status().await.unwrap();
        assert_eq!(rows, vec![(VehicleStatus::Available, 1)]);
    }
}
