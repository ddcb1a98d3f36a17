use crate::{
    domain::{
        requests::{CreateProductRequest, PatchProductRequest, ReplaceProductRequest},
        response::ProductResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductResponse, ServiceError>;
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_one(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &ReplaceProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_partial(
        &self,
        id: i32,
        req: &PatchProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
