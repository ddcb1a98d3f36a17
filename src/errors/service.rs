use crate::errors::{EntityError, RepositoryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EntityError> for ServiceError {
    fn from(err: EntityError) -> Self {
        ServiceError::Validation(vec![err.to_string()])
    }
}
