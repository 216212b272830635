use thiserror::Error;

/// Failure taxonomy for the storage layer.
///
/// `Query` and `Unavailable` both mean "operation failed, not retried"; they
/// stay separate so the boundary can tell "no data" and "malformed request"
/// apart from "store degraded" when mapping to status codes.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("query error: {0}")]
    Query(sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::Error as E;

        match &err {
            E::RowNotFound => Self::NotFound,
            E::Io(_) | E::Tls(_) | E::PoolTimedOut | E::PoolClosed | E::WorkerCrashed => {
                Self::Unavailable(err)
            }
            _ => Self::Query(err),
        }
    }
}

impl StorageError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_unavailable() {
        let err: StorageError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StorageError::Unavailable(_)));
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: StorageError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[test]
    fn test_decode_failure_maps_to_query() {
        let err: StorageError = sqlx::Error::ColumnNotFound("score".into()).into();
        assert!(matches!(err, StorageError::Query(_)));
    }
}
