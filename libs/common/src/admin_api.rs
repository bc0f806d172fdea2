//! Runtime administration endpoints shared by RadixLab services
//!
//! Mounted by each service at `/api/admin/logs/level`.

use axum::response::Json;
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::api_types::AppError;
use crate::logging;

/// Current log filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LogLevelResponse {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// New log filter: a plain level or a full filter spec
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SetLogLevelRequest {
    pub level: String,
}

/// Get the active log filter
///
/// @route GET /api/admin/logs/level
/// @output `Json<LogLevelResponse>` - active filter, `"unknown"` before logging is initialized
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/admin/logs/level",
    responses(
        (status = 200, description = "Active log filter", body = LogLevelResponse)
    ),
    tag = "admin"
))]
pub async fn get_log_level() -> Json<LogLevelResponse> {
    Json(LogLevelResponse {
        level: logging::get_log_level(),
        status: None,
    })
}

/// Replace the log filter without restarting
///
/// @route POST /api/admin/logs/level
/// @input `Json<SetLogLevelRequest>` - e.g. `{"level": "info,radix_calc=debug"}`
/// @status 200 - Filter applied
/// @status 400 - Invalid filter or logging not initialized
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/admin/logs/level",
    request_body = SetLogLevelRequest,
    responses(
        (status = 200, description = "Filter applied", body = LogLevelResponse),
        (status = 400, description = "Invalid filter", body = errors::ErrorInfo)
    ),
    tag = "admin"
))]
pub async fn set_log_level(
    Json(request): Json<SetLogLevelRequest>,
) -> Result<Json<LogLevelResponse>, AppError> {
    logging::set_log_level(&request.level).map_err(AppError::bad_request)?;
    Ok(Json(LogLevelResponse {
        level: request.level,
        status: Some("updated".to_string()),
    }))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_set_log_level_before_init_is_rejected() {
        let err = set_log_level(Json(SetLogLevelRequest {
            level: "debug".to_string(),
        }))
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.kind, "bad_request");
        assert!(err.error.error.contains("not initialized"));
    }

    #[tokio::test]
    async fn test_set_invalid_filter_is_rejected() {
        let err = set_log_level(Json(SetLogLevelRequest {
            level: "radix_calc=loud".to_string(),
        }))
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.error.error.starts_with("Invalid log level"));
    }

    #[tokio::test]
    async fn test_get_log_level_before_init() {
        let Json(response) = get_log_level().await;
        assert_eq!(response.level, "unknown");
        assert!(response.status.is_none());
    }
}
