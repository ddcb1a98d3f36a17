mod api;
mod product;

pub use self::api::{ApiResponse, ErrorDetail, ErrorResponse};
pub use self::product::ProductResponse;
