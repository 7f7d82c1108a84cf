//! Backend de gestión de alquiler de vehículos
//! 
//! Registra vehículos, clientes, reservas y mantenimientos. El núcleo es el
//! motor de reservas (sin doble reserva, transición de estado, coste) y el
//! agregado de estado de flota del dashboard.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
