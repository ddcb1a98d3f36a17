use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::EntityError;

/// Row model for the `products` table. Audit columns are owned by the
/// repository layer; a non-null `deleted_at` marks the row as soft-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Product {
    /// Builds a new product and checks the invariant. The id and audit
    /// columns are assigned by the repository on insert.
    pub fn new(name: &str, description: &str, price: f64) -> Result<Self, EntityError> {
        let product = Self {
            product_id: 0,
            name: name.to_string(),
            description: description.to_string(),
            price,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        };

        product.validate()?;

        Ok(product)
    }

    /// Invariant check, reusable on any populated value. Conditions are
    /// checked in order name, description, price; the first failure wins.
    pub fn validate(&self) -> Result<(), EntityError> {
        if self.name.is_empty() {
            return Err(EntityError::InvalidName);
        }

        if self.description.is_empty() {
            return Err(EntityError::InvalidDescription);
        }

        if self.price <= 0.0 {
            return Err(EntityError::InvalidPrice);
        }

        Ok(())
    }
}
