//! Modelos del dashboard de flota

use serde::Serialize;

use super::{Reservation, VehicleStatus};

/// Conteo de vehículos por estado
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FleetStatusCounts {
    pub total: i64,
    pub available: i64,
    pub rented: i64,
    pub maintenance: i64,
}

impl FleetStatusCounts {
    /// Construye los conteos a partir de filas (estado, cantidad).
    /// Los estados ausentes quedan en 0.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (VehicleStatus, i64)>,
    {
        let mut counts = Self::default();
        for (status, count) in rows {
            match status {
                VehicleStatus::Available => counts.available += count,
                VehicleStatus::Rented => counts.rented += count,
                VehicleStatus::Maintenance => counts.maintenance += count,
            }
            counts.total += count;
        }
        counts
    }
}

/// Resumen de flota para el dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FleetSummary {
    pub counts: FleetStatusCounts,
    pub upcoming_reservations: Vec<Reservation>,
}
