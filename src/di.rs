use crate::{
    abstract_trait::{DynProductRepository, DynProductService},
    config::ConnectionPool,
    repository::ProductRepository,
    service::ProductService,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: DynProductService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &"ProductService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_repository =
            Arc::new(ProductRepository::new(pool)) as DynProductRepository;

        let product_service =
            Arc::new(ProductService::new(product_repository)) as DynProductService;

        Self { product_service }
    }
}
