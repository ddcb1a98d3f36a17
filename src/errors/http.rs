use crate::domain::response::ErrorResponse;
use crate::errors::{RepositoryError, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    UnprocessableEntity(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(RepositoryError::NotFound) => {
                HttpError::NotFound("Product not found".to_string())
            }

            ServiceError::Validation(errors) => HttpError::UnprocessableEntity(errors.join(", ")),

            // Storage and internal failures never leak detail to the caller.
            ServiceError::Repo(repo_err) => {
                error!("repository failure: {repo_err}");
                HttpError::Internal("Internal Server Error".to_string())
            }

            ServiceError::Internal(msg) => {
                error!("internal failure: {msg}");
                HttpError::Internal("Internal Server Error".to_string())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}
