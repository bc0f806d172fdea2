//! Shared API models for RadixLab services
//!
//! Error envelope and health models used by every service endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub use errors::{ErrorCategory, ErrorInfo};

// ============================================================================
// AppError - HTTP Error with proper status codes (requires axum feature)
// ============================================================================

#[cfg(feature = "axum")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

/// Application error with HTTP status code
/// This type implements IntoResponse for seamless integration with axum handlers
#[cfg(feature = "axum")]
#[derive(Debug, Clone)]
pub struct AppError {
    /// HTTP status code
    pub status: StatusCode,
    /// Error information
    pub error: ErrorInfo,
}

#[cfg(feature = "axum")]
impl AppError {
    /// Create a new error
    pub fn new(status: StatusCode, error: ErrorInfo) -> Self {
        Self { status, error }
    }

    /// Build from any service error, logging it at the error's own level
    pub fn from_service_error<E: errors::ServiceErrorTrait>(err: &E) -> Self {
        let info = err.to_error_info();
        match err.log_level() {
            tracing::Level::ERROR => tracing::error!(code = %info.error_code, "{}", info.error),
            tracing::Level::WARN => tracing::warn!(code = %info.error_code, "{}", info.error),
            _ => tracing::info!(code = %info.error_code, "{}", info.error),
        }
        Self {
            status: err.http_status(),
            error: info,
        }
    }

    /// Create a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ErrorInfo::new(message)
                .with_code("BAD_REQUEST")
                .with_category(ErrorCategory::Validation),
        }
    }

    /// Create a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: ErrorInfo::new(message)
                .with_code("NOT_FOUND")
                .with_category(ErrorCategory::Validation),
        }
    }

    /// Create a 500 Internal Server Error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ErrorInfo::new(message).with_code("INTERNAL_ERROR"),
        }
    }

    /// Add detail to the error
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error = self.error.with_detail(detail);
        self
    }
}

#[cfg(feature = "axum")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

#[cfg(feature = "axum")]
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal_error(err.to_string())
    }
}

// ============================================================================
// Service Health & Status Models
// ============================================================================

/// Service health status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HealthStatus {
    /// Overall health status
    pub status: ServiceStatus,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Timestamp of this check
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Individual component checks
    #[serde(default)]
    pub checks: HashMap<String, ComponentHealth>,
}

/// Service status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Unhealthy,
    Unknown,
}

/// Component health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ComponentHealth {
    /// Component status
    pub status: ServiceStatus,
    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Healthy,
            message: Some(message.into()),
        }
    }
}
