use chrono::NaiveDateTime;
use sqlx::{PgConnection, PgPool};

use crate::models::{NewReservation, Reservation, ReservationDetails};
use crate::utils::errors::{AppError, AppResult};

pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado con make/model del vehículo y nombre del cliente
    pub async fn find_all_with_details(&self) -> AppResult<Vec<ReservationDetails>> {
        let reservations = sqlx::query_as::<_, ReservationDetails>(
            r#"
            SELECT r.reservation_id, r.vehicle_plate, r.customer_id, r.start_date, r.end_date,
                   r.total_cost, v.make, v.model, c.name AS customer_name
            FROM reservations r
            JOIN vehicles v ON r.vehicle_plate = v.license_plate
            JOIN customers c ON r.customer_id = c.customer_id
            ORDER BY r.start_date, r.reservation_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    pub async fn find_upcoming(&self, after: NaiveDateTime, limit: i64) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE start_date > $1
            ORDER BY start_date ASC, reservation_id ASC
            LIMIT $2
            "#,
        )
        .bind(after)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    pub async fn find_overlapping(
        conn: &mut PgConnection,
        vehicle_plate: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE vehicle_plate = $1
              AND NOT (end_date <= $2 OR start_date >= $3)
            "#,
        )
        .bind(vehicle_plate)
        .bind(start)
        .bind(end)
        .fetch_all(conn)
        .await?;

        Ok(reservations)
    }

    pub async fn insert(conn: &mut PgConnection, new: NewReservation) -> AppResult<Reservation> {
        let plate = new.vehicle_plate.clone();

        sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (vehicle_plate, customer_id, start_date, end_date, total_cost)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new.vehicle_plate)
        .bind(new.customer_id)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(new.total_cost)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::from_reservation_insert(e, &plate))
    }
}
