use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures reported by the service layer.
///
/// `NotFound` and `InvalidOperation` carry the message shown to the caller;
/// every other variant is an internal fault.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidOperation(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
