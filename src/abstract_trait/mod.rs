mod product;

pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
