use sqlx::{PgConnection, PgPool};

use crate::models::{Customer, NewCustomer};
use crate::utils::errors::AppResult;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewCustomer) -> AppResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, contact_info, license_number)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(new.name)
        .bind(new.contact_info)
        .bind(new.license_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY customer_id")
                .fetch_all(&self.pool)
                .await?;

        Ok(customers)
    }

    pub async fn find_by_id(conn: &mut PgConnection, customer_id: i64) -> AppResult<Option<Customer>> {
        let customer =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE customer_id = $1")
                .bind(customer_id)
                .fetch_optional(conn)
                .await?;

        Ok(customer)
    }
}
