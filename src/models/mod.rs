//! Modelos del sistema
//! 
//! Este módulo contiene todos los modelos de datos que mapean
//! al schema PostgreSQL (tablas vehicles, customers, reservations, maintenance).

pub mod customer;
pub mod dashboard;
pub mod maintenance;
pub mod reservation;
pub mod vehicle;

pub use customer::*;
pub use dashboard::*;
pub use maintenance::*;
pub use reservation::*;
pub use vehicle::*;
