use thiserror::Error;

/// Application-wide error types for CodeTrek.
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream answered with a non-2xx status.
    #[error("Failed to fetch profile: {status} {reason}")]
    FetchError { status: u16, reason: String },

    /// Network/connection error (DNS, connect, reset).
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out; carries the limit in milliseconds.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// HTTP client could not be built or the URL is unusable.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// A single field could not be extracted from a provider document.
    #[error("Extraction error ({field}): {message}")]
    ExtractionError {
        field: &'static str,
        message: String,
    },

    /// Neither provider pipeline produced a result.
    #[error("Aggregation error: {0}")]
    AggregationError(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Request input is missing or malformed.
    #[error("{0}")]
    ValidationError(String),

    /// Resource already exists.
    #[error("{0}")]
    Conflict(String),

    /// Credentials did not match.
    #[error("{0}")]
    Unauthorized(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Shorthand for a per-field extraction failure.
    pub fn extraction(field: &'static str, message: impl Into<String>) -> Self {
        AppError::ExtractionError {
            field,
            message: message.into(),
        }
    }

    /// Returns true if the error means the upstream provider was unavailable.
    ///
    /// These are the failures a provider pipeline degrades into its default
    /// record instead of surfacing.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            AppError::FetchError { .. }
                | AppError::NetworkError(_)
                | AppError::Timeout(_)
                | AppError::HttpError(_)
        )
    }
}
