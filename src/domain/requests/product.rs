use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Macbook Pro")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "O poderoso computador da Apple")]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "gt"))]
    #[schema(example = 23000.00)]
    pub price: f64,
}

/// Full-replace body: every field is required and overwrites the stored
/// value unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceProductRequest {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Macbook Pro 2024")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "O poderoso computador da Apple")]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "gt"))]
    #[schema(example = 15000.00)]
    pub price: f64,
}

/// Sparse body for PATCH. An absent field means "leave unchanged"; a present
/// field must satisfy the same rule as on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchProductRequest {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub description: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "gt"))]
    pub price: Option<f64>,
}
