//! Middleware del sistema
//! 
//! CORS, trazas HTTP y timeout por request.

pub mod cors;

pub use cors::*;
