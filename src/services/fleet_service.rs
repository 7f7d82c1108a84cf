//! Agregador de estado de flota para el dashboard

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::models::{FleetStatusCounts, FleetSummary};
use crate::repositories::RentalStore;
use crate::utils::errors::AppResult;

/// Número de próximas reservas mostradas en el dashboard
pub const DEFAULT_UPCOMING_LIMIT: i64 = 5;

/// Conteo por estado y las `limit` reservas con `start_date > now` más
/// cercanas. Sin efectos secundarios.
pub async fn fleet_summary(
    store: &dyn RentalStore,
    now: NaiveDateTime,
    limit: i64,
) -> AppResult<FleetSummary> {
    let counts = FleetStatusCounts::from_rows(store.count_vehicles_by_status().await?);
    let upcoming_reservations = store.upcoming_reservations(now, limit).await?;

    Ok(FleetSummary {
        counts,
        upcoming_reservations,
    })
}

#[derive(Clone)]
pub struct FleetService {
    store: Arc<dyn RentalStore>,
    upcoming_limit: i64,
}

impl FleetService {
    pub fn new(store: Arc<dyn RentalStore>, upcoming_limit: i64) -> Self {
        Self {
            store,
            upcoming_limit,
        }
    }

    pub async fn summary(&self, now: NaiveDateTime) -> AppResult<FleetSummary> {
        fleet_summary(self.store.as_ref(), now, self.upcoming_limit).await
    }
}
