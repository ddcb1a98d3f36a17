use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, PatchProductRequest, ReplaceProductRequest},
        response::ProductResponse,
    },
    errors::ServiceError,
    model::Product,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductResponse, ServiceError> {
        let product = Product::new(&req.name, &req.description, req.price)?;
        let created = self.repository.create(&product).await?;

        Ok(created.into())
    }

    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_all().await?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_one(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let product = self.repository.find_by_id(id).await?;

        Ok(product.into())
    }

    async fn update(
        &self,
        id: i32,
        req: &ReplaceProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let mut current = self.repository.find_by_id(id).await?;
        info!("record found to update: {id}");

        // Full replace: every field overwrites the stored value.
        current.name = req.name.clone();
        current.description = req.description.clone();
        current.price = req.price;
        current.validate()?;

        self.repository.update(&current).await?;

        // Re-fetch so the caller sees persisted state, not the in-memory
        // mutation.
        let updated = self.repository.find_by_id(id).await?;
        Ok(updated.into())
    }

    async fn update_partial(
        &self,
        id: i32,
        req: &PatchProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let mut current = self.repository.find_by_id(id).await?;
        info!("record found to update: {id}");

        // Merge: a field is overwritten only when the request carried it.
        if let Some(name) = &req.name {
            current.name = name.clone();
        }
        if let Some(description) = &req.description {
            current.description = description.clone();
        }
        if let Some(price) = req.price {
            current.price = price;
        }
        current.validate()?;

        self.repository.update(&current).await?;

        let updated = self.repository.find_by_id(id).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        // Read-then-write, not atomic: a concurrent delete between the two
        // steps surfaces as a second NotFound.
        let product = self.repository.find_by_id(id).await?;
        self.repository.delete(&product).await?;

        info!("deleted product ID {id}");
        Ok(())
    }
}
