mod entity;
mod http;
mod repository;
mod service;

pub use self::entity::EntityError;
pub use self::http::HttpError;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
