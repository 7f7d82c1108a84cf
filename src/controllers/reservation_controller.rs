use std::sync::Arc;

use validator::Validate;

use crate::dto::reservation_dto::CreateReservationRequest;
use crate::dto::ApiResponse;
use crate::models::{Reservation, ReservationDetails};
use crate::repositories::RentalStore;
use crate::services::{BookingService, ReservationRequest};
use crate::utils::errors::AppError;

pub struct ReservationController {
    store: Arc<dyn RentalStore>,
    booking: BookingService,
}

impl ReservationController {
    pub fn new(store: Arc<dyn RentalStore>) -> Self {
        Self {
            booking: BookingService::new(store.clone()),
            store,
        }
    }

    pub async fn create(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ApiResponse<Reservation>, AppError> {
        request.validate()?;

        let reservation = self.booking.book(ReservationRequest::from(request)).await?;

        Ok(ApiResponse::success_with_message(
            reservation,
            "Reservation created successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<ReservationDetails>, AppError> {
        self.store.list_reservations().await
    }
}
