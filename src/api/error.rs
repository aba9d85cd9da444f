// ==========================================
// Storefront Catalog - API Errors
// ==========================================
// Responsibility: turn repository failures into caller-facing errors
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("stored document is malformed: {0}")]
    CorruptDocument(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { collection, filter } => {
                ApiError::NotFound(format!("{} {}", collection, filter))
            }
            RepositoryError::DecodeError(msg) | RepositoryError::InvalidDocument(msg) => {
                ApiError::CorruptDocument(msg)
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(e) => ApiError::Other(e),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_mapping() {
        let err: ApiError = RepositoryError::DecodeError("bad level".to_string()).into();
        assert!(matches!(err, ApiError::CorruptDocument(_)));

        let err: ApiError = RepositoryError::DatabaseQueryError("locked".to_string()).into();
        assert!(matches!(err, ApiError::DatabaseError(_)));
    }
}
