//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// SQLSTATE de violación de exclusion constraint en PostgreSQL
const EXCLUSION_VIOLATION: &str = "23P01";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Start date must be before end date")]
    InvalidDateRange,

    #[error("Vehicle '{0}' is already reserved for the selected time period")]
    OverlapConflict(String),

    #[error("Vehicle '{0}' does not exist")]
    UnknownVehicle(String),

    #[error("Customer {0} does not exist")]
    UnknownCustomer(i64),

    #[error("Total cost exceeds the maximum of {max}")]
    CostOutOfRange { max: rust_decimal::Decimal },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Código estable expuesto al cliente
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidDateRange => "INVALID_DATE_RANGE",
            AppError::OverlapConflict(_) => "OVERLAP_CONFLICT",
            AppError::UnknownVehicle(_) => "UNKNOWN_VEHICLE",
            AppError::UnknownCustomer(_) => "UNKNOWN_CUSTOMER",
            AppError::CostOutOfRange { .. } => "COST_OUT_OF_RANGE",
            AppError::Database(_) => "STORAGE_FAILURE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            AppError::BadRequest(_) => "BAD_REQUEST",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidDateRange
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::OverlapConflict(_) | AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UnknownVehicle(_)
            | AppError::UnknownCustomer(_)
            | AppError::CostOutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Errores de validación del dominio (se recuperan en el borde de la request)
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Traduce la violación de la exclusion constraint de reservas a un conflicto
    /// de solapamiento; cualquier otro error queda como fallo de almacenamiento.
    pub fn from_reservation_insert(err: sqlx::Error, vehicle_plate: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) {
                return AppError::OverlapConflict(vehicle_plate.to_string());
            }
        }
        AppError::Database(err)
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code().to_string();

        let error_response = match &self {
            AppError::Database(e) => {
                error!("❌ Storage failure: {}", e);
                ErrorResponse {
                    error: "Storage Failure".to_string(),
                    message: "An error occurred while accessing the database".to_string(),
                    details: None,
                    code,
                }
            }

            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(e)),
                    code,
                }
            }

            other => {
                if other.is_client_error() {
                    warn!("⚠️ Request rejected ({}): {}", other.code(), other);
                } else {
                    error!("❌ Request failed ({}): {}", other.code(), other);
                }
                ErrorResponse {
                    error: status
                        .canonical_reason()
                        .unwrap_or("Client Error")
                        .to_string(),
                    message: other.to_string(),
                    details: None,
                    code,
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}
