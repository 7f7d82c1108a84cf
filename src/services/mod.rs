//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación: el motor de
//! reservas, el planificador de mantenimiento y el agregador del dashboard.

pub mod booking_service;
pub mod fleet_service;
pub mod maintenance_service;

pub use booking_service::{BookingService, ReservationRequest};
pub use fleet_service::{FleetService, DEFAULT_UPCOMING_LIMIT};
pub use maintenance_service::{MaintenanceRequest, MaintenanceService};
