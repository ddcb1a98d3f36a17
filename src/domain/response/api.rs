use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope applied to every successful JSON response.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiResponse {{ data: {:?} }}", self.data)
    }
}

/// Envelope applied to every error response: `{"data":{"error": "..."}}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ErrorResponse {
    pub data: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ErrorDetail {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            data: ErrorDetail {
                error: message.into(),
            },
        }
    }
}
