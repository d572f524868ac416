//! Error types module
//!
//! All request-level failures are unified under the `AppError` enum: client-caused
//! validation failures, downstream storage and notification faults, and internal
//! errors. Each variant self-describes its HTTP presentation through `ErrorMetadata`.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notify(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    /// Get the error type name for log context
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Storage(_) => "Storage",
            AppError::Notify(_) => "Notify",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Underlying failure detail passed through to 500 response bodies.
    ///
    /// Validation errors carry their full message in `client_message` instead, and
    /// internal errors keep their detail out of responses.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Storage(msg) | AppError::Notify(msg) => Some(msg),
            AppError::InvalidInput(_) | AppError::Internal(_) => None,
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::Storage(_) | AppError::Notify(_) | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Notify(_) => "NOTIFY_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            // The transfer outcome is ambiguous from the caller's view: writes that
            // completed before the failure are not rolled back.
            AppError::Storage(_) | AppError::Notify(_) => "File upload failed.".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::Storage(_) | AppError::Notify(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}
