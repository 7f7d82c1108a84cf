use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::customer_dto::CreateCustomerRequest;
use crate::dto::ApiResponse;
use crate::models::{Customer, NewCustomer};
use crate::repositories::RentalStore;
use crate::utils::errors::AppError;

pub struct CustomerController {
    store: Arc<dyn RentalStore>,
}

impl CustomerController {
    pub fn new(store: Arc<dyn RentalStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<ApiResponse<Customer>, AppError> {
        request.validate()?;

        let customer = self.store.create_customer(NewCustomer::from(request)).await?;
        info!("👤 Cliente #{} registrado", customer.customer_id);

        Ok(ApiResponse::success_with_message(
            customer,
            "Customer registered successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Customer>, AppError> {
        self.store.list_customers().await
    }
}
