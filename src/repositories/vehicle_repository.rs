use sqlx::{PgConnection, PgPool};
use tracing::debug;

use crate::models::{NewVehicle, Vehicle, VehicleStatus};
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewVehicle) -> AppResult<Vehicle> {
        let plate = new.license_plate.clone();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (license_plate, make, model, year, mileage, daily_rate, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(new.license_plate)
        .bind(new.make)
        .bind(new.model)
        .bind(new.year)
        .bind(new.mileage)
        .bind(new.daily_rate)
        .bind(new.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return conflict_error("Vehicle", "license plate", &plate);
                }
            }
            AppError::Database(e)
        })?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY license_plate")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn find_by_status(&self, status: VehicleStatus) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE status = $1 ORDER BY license_plate",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn count_by_status(&self) -> AppResult<Vec<(VehicleStatus, i64)>> {
        let rows = sqlx::query_as::<_, (VehicleStatus, i64)>(
            "SELECT status, COUNT(*) FROM vehicles GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lee el vehículo con `FOR UPDATE`: las reservas concurrentes sobre la
    /// misma matrícula quedan serializadas hasta el commit/rollback.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        license_plate: &str,
    ) -> AppResult<Option<Vehicle>> {
        debug!("🔒 Bloqueando vehículo {}", license_plate);

        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE license_plate = $1 FOR UPDATE",
        )
        .bind(license_plate)
        .fetch_optional(conn)
        .await?;

        Ok(vehicle)
    }

    pub async fn update_status(
        conn: &mut PgConnection,
        license_plate: &str,
        status: VehicleStatus,
    ) -> AppResult<()> {
        let result = sqlx::query("UPDATE vehicles SET status = $2 WHERE license_plate = $1")
            .bind(license_plate)
            .bind(status)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::UnknownVehicle(license_plate.to_string()));
        }

        Ok(())
    }
}
