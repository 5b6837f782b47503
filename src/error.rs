//! Error types for the Kaplar login server.

use thiserror::Error;

/// Common error type for the login server.
#[derive(Error, Debug)]
pub enum KaplarError {
    /// Database error.
    ///
    /// Wraps errors from whichever sqlx backend is compiled in.
    /// Errors from sqlx are converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for configuration or input values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),
}

impl From<sqlx::Error> for KaplarError {
    fn from(e: sqlx::Error) -> Self {
        KaplarError::Database(e.to_string())
    }
}

/// Result type alias for login server operations.
pub type Result<T> = std::result::Result<T, KaplarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = KaplarError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "database error: connection refused");
    }

    #[test]
    fn test_validation_error_display() {
        let err = KaplarError::Validation("world name is empty".to_string());
        assert_eq!(err.to_string(), "validation error: world name is empty");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = KaplarError::NotFound("account".to_string());
        assert_eq!(err.to_string(), "account not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KaplarError = io_err.into();
        assert!(matches!(err, KaplarError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: KaplarError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, KaplarError::Database(_)));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(KaplarError::Config("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
