use sqlx::{PgConnection, PgPool};

use crate::models::{MaintenanceDetails, MaintenanceRecord, NewMaintenanceRecord};
use crate::utils::errors::AppResult;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado con make/model del vehículo
    pub async fn find_all_with_details(&self) -> AppResult<Vec<MaintenanceDetails>> {
        let records = sqlx::query_as::<_, MaintenanceDetails>(
            r#"
            SELECT m.maintenance_id, m.vehicle_plate, m.service_date, m.description, m.cost,
                   v.make, v.model
            FROM maintenance m
            JOIN vehicles v ON m.vehicle_plate = v.license_plate
            ORDER BY m.service_date DESC, m.maintenance_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn insert(
        conn: &mut PgConnection,
        new: NewMaintenanceRecord,
    ) -> AppResult<MaintenanceRecord> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance (vehicle_plate, service_date, description, cost)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.vehicle_plate)
        .bind(new.service_date)
        .bind(new.description)
        .bind(new.cost)
        .fetch_one(conn)
        .await?;

        Ok(record)
    }
}
