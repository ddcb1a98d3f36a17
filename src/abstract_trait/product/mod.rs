mod repository;
mod service;

pub use self::repository::{DynProductRepository, ProductRepositoryTrait};
pub use self::service::{DynProductService, ProductServiceTrait};
