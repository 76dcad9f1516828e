use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("{field} is a required field")]
    MissingField { field: &'static str },
}

pub type TypeResult<T> = Result<T, TypeError>;
