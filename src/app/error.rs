use thiserror::Error;

use super::domain::messages::Operation;

#[derive(Error, Debug)]
pub enum AppError {
    /// Load or persist failed; carries the provider's human-readable message.
    #[error("{0}")]
    Io(String),

    #[error("{} is not permitted", .0.describe())]
    Unsupported(Operation),

    #[error("Cancelled by user")]
    UserCancelled,

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl AppError {
    /// Errors that only abort the current operation and leave the document alone.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::UserCancelled)
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::FileSystem(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Io("No such file or directory".to_string());
        assert_eq!(err.to_string(), "No such file or directory");

        let err = AppError::Unsupported(Operation::SaveAs);
        assert_eq!(err.to_string(), "Save As is not permitted");

        let err = AppError::Settings("invalid open order".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid open order");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(AppError::Io("disk full".into()).is_recoverable());
        assert!(AppError::UserCancelled.is_recoverable());
        assert!(!AppError::Unsupported(Operation::New).is_recoverable());
    }
}
