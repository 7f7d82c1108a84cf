use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::services::ReservationRequest;
use crate::utils::validation::{deserialize_datetime, normalize_license_plate, validate_not_empty};

// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_plate: String,

    pub customer_id: i64,

    #[serde(deserialize_with = "deserialize_datetime")]
    pub start_date: NaiveDateTime,

    #[serde(deserialize_with = "deserialize_datetime")]
    pub end_date: NaiveDateTime,
}

impl From<CreateReservationRequest> for ReservationRequest {
    fn from(request: CreateReservationRequest) -> Self {
        Self {
            vehicle_plate: normalize_license_plate(&request.vehicle_plate),
            customer_id: request.customer_id,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}
