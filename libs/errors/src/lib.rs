//! Unified error handling for RadixLab services
//!
//! Each service keeps its own domain error type and gains a common outward
//! interface (error code, category, HTTP status, JSON body) by implementing
//! [`ServiceErrorTrait`].

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// ============================================================================
// ErrorInfo - API error response body
// ============================================================================

/// Error body returned by every endpoint on failure
///
/// ```json
/// {"error": "Division by zero", "kind": "division_by_zero",
///  "error_code": "DIVISION_BY_ZERO", "category": "calculation"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorInfo {
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable kind (snake_case)
    pub kind: String,
    /// Error code (SCREAMING_SNAKE_CASE)
    pub error_code: String,
    /// Error category
    pub category: ErrorCategory,
    /// Optional detail (e.g. the rejected field or value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorInfo {
    /// Create a new ErrorInfo with just a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            kind: "internal".to_string(),
            error_code: "INTERNAL_ERROR".to_string(),
            category: ErrorCategory::Internal,
            detail: None,
        }
    }

    /// Set the error code; the kind follows it in lowercase
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = code.into();
        self.kind = self.error_code.to_ascii_lowercase();
        self
    }

    pub fn with_category(mut self, category: ErrorCategory) -> Self {
        self.category = category;
        self
    }

    /// Add detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

// ============================================================================
// Error category
// ============================================================================

/// Error category enum - used for classification and HTTP mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    // Infrastructure layer
    Configuration,
    Network,
    Timeout,

    // Request layer
    Validation,
    PayloadTooLarge,

    // Calculation layer
    Calculation,

    // System level
    Internal,
    Unknown,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Validation => "validation",
            Self::PayloadTooLarge => "payload_too_large",
            Self::Calculation => "calculation",
            Self::Internal => "internal",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Service error trait
// ============================================================================

/// Default HTTP status for a category
#[cfg(feature = "axum-support")]
pub fn status_for_category(category: ErrorCategory) -> axum::http::StatusCode {
    use axum::http::StatusCode;
    match category {
        ErrorCategory::Validation => StatusCode::BAD_REQUEST,
        ErrorCategory::Calculation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCategory::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCategory::Timeout => StatusCode::REQUEST_TIMEOUT,
        ErrorCategory::Network => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// RadixLab error capability trait
///
/// # Design principles
///
/// 1. Domain preservation: services keep their own error variants
/// 2. Unified interface: one outward-facing error body for every service
/// 3. Sensible defaults: category drives retry, status and log level
pub trait ServiceErrorTrait: std::error::Error + Send + Sync + 'static {
    /// Get error code (for API, logs, monitoring)
    fn error_code(&self) -> &'static str;

    /// Get error category
    fn category(&self) -> ErrorCategory;

    /// Machine-readable kind, the lowercase form of the error code by default
    fn kind(&self) -> String {
        self.error_code().to_ascii_lowercase()
    }

    /// Optional extra detail for the response body
    fn detail(&self) -> Option<String> {
        None
    }

    /// Whether the error is retryable (default implementation is category-based)
    fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Timeout
        )
    }

    /// Build the API error body
    fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            error: self.to_string(),
            kind: self.kind(),
            error_code: self.error_code().to_string(),
            category: self.category(),
            detail: self.detail(),
        }
    }

    /// Convert to HTTP status code
    #[cfg(feature = "axum-support")]
    fn http_status(&self) -> axum::http::StatusCode {
        status_for_category(self.category())
    }

    /// Convert into an Axum HTTP response
    #[cfg(feature = "axum-support")]
    fn into_http_response(self) -> axum::response::Response
    where
        Self: Sized,
    {
        use axum::response::{IntoResponse, Json};

        (self.http_status(), Json(self.to_error_info())).into_response()
    }

    /// Get log level
    fn log_level(&self) -> tracing::Level {
        use tracing::Level;
        match self.category() {
            ErrorCategory::Internal | ErrorCategory::Configuration => Level::ERROR,
            ErrorCategory::Network | ErrorCategory::Timeout => Level::WARN,
            ErrorCategory::Validation
            | ErrorCategory::Calculation
            | ErrorCategory::PayloadTooLarge => Level::INFO,
            ErrorCategory::Unknown => Level::WARN,
        }
    }
}
