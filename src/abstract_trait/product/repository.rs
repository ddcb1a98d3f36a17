use crate::{errors::RepositoryError, model::Product};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

/// Storage capability set for products. Operations are independent and
/// non-transactional; deletes are soft (rows stay, excluded from reads).
#[async_trait]
pub trait ProductRepositoryTrait {
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;
}
