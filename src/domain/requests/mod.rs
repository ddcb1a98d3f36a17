mod product;

pub use self::product::{CreateProductRequest, PatchProductRequest, ReplaceProductRequest};
