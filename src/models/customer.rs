//! Modelo de Customer

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cliente - inmutable una vez creado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub contact_info: String,
    pub license_number: String,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub contact_info: String,
    pub license_number: String,
}
