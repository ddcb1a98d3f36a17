use thiserror::Error;

/// Violations of the product invariant, in the order they are checked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("invalid name")]
    InvalidName,

    #[error("invalid description")]
    InvalidDescription,

    #[error("invalid price")]
    InvalidPrice,
}
