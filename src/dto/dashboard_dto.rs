use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{FleetStatusCounts, FleetSummary, Reservation};

// Response del dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_vehicles: i64,
    pub available_vehicles: i64,
    pub rented_vehicles: i64,
    pub maintenance_vehicles: i64,
    pub upcoming_reservations: Vec<Reservation>,
    pub generated_at: NaiveDateTime,
}

impl DashboardResponse {
    pub fn new(summary: FleetSummary, generated_at: NaiveDateTime) -> Self {
        let FleetSummary {
            counts:
                FleetStatusCounts {
                    total,
                    available,
                    rented,
                    maintenance,
                },
            upcoming_reservations,
        } = summary;

        Self {
            total_vehicles: total,
            available_vehicles: available,
            rented_vehicles: rented,
            maintenance_vehicles: maintenance,
            upcoming_reservations,
            generated_at,
        }
    }
}
