//! Controladores
//! 
//! Capa intermedia entre las rutas HTTP y los servicios/store: valida los
//! DTOs, llama al core y arma las respuestas.

pub mod customer_controller;
pub mod dashboard_controller;
pub mod maintenance_controller;
pub mod reservation_controller;
pub mod vehicle_controller;
