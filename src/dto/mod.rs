//! DTOs de la API
//! 
//! Requests (validados con `validator`) y responses JSON.

pub mod api_response;
pub mod customer_dto;
pub mod dashboard_dto;
pub mod maintenance_dto;
pub mod reservation_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
