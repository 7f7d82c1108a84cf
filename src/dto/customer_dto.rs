use serde::Deserialize;
use validator::Validate;

use crate::models::NewCustomer;
use crate::utils::validation::validate_not_empty;

// Request para registrar un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(max = 100), custom = "validate_not_empty")]
    pub name: String,

    #[validate(length(max = 200), custom = "validate_not_empty")]
    pub contact_info: String,

    #[validate(length(max = 50), custom = "validate_not_empty")]
    pub license_number: String,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        Self {
            name: request.name.trim().to_string(),
            contact_info: request.contact_info.trim().to_string(),
            license_number: request.license_number.trim().to_string(),
        }
    }
}
