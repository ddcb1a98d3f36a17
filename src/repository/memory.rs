use crate::{abstract_trait::ProductRepositoryTrait, errors::RepositoryError, model::Product};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

/// In-memory stand-in for the Postgres repository, used by the service and
/// HTTP tests. Mimics the storage semantics: serial ids, audit timestamps,
/// soft delete via `deleted_at`.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepositoryTrait for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().expect("product store mutex poisoned");

        let next_id = rows.iter().map(|p| p.product_id).max().unwrap_or(0) + 1;
        let now = Utc::now().naive_utc();

        let stored = Product {
            product_id: next_id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            created_at: Some(now),
            updated_at: Some(now),
            deleted_at: None,
        };

        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.lock().expect("product store mutex poisoned");
        Ok(rows.iter().filter(|p| p.deleted_at.is_none()).cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        let rows = self.rows.lock().expect("product store mutex poisoned");
        rows.iter()
            .find(|p| p.product_id == id && p.deleted_at.is_none())
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().expect("product store mutex poisoned");

        let row = rows
            .iter_mut()
            .find(|p| p.product_id == product.product_id && p.deleted_at.is_none())
            .ok_or(RepositoryError::NotFound)?;

        row.name = product.name.clone();
        row.description = product.description.clone();
        row.price = product.price;
        row.updated_at = Some(Utc::now().naive_utc());

        Ok(row.clone())
    }

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().expect("product store mutex poisoned");

        let row = rows
            .iter_mut()
            .find(|p| p.product_id == product.product_id && p.deleted_at.is_none())
            .ok_or(RepositoryError::NotFound)?;

        row.deleted_at = Some(Utc::now().naive_utc());
        Ok(())
    }
}
