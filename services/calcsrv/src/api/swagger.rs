//! OpenAPI document for calcsrv

use axum::response::Json;
use utoipa::OpenApi;

use crate::api::handlers;
use crate::dto::{
    BinaryOperationRequest, BinaryOperationResponse, ConversionRequest, ConversionResponse,
};

/// OpenAPI specification for the Calculation Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculation Service API",
        version = "0.1.0",
        description = "Fixed-width binary arithmetic in four signed and unsigned representations, and numeral conversion between bases 2 and 36"
    ),
    paths(
        handlers::binary_handlers::binary_operation,
        handlers::conversion_handlers::convert_number,
        handlers::health::health_check,
        common::admin_api::get_log_level,
        common::admin_api::set_log_level,
    ),
    components(schemas(
        BinaryOperationRequest,
        BinaryOperationResponse,
        ConversionRequest,
        ConversionResponse,
        common::HealthStatus,
        common::ServiceStatus,
        common::ComponentHealth,
        common::admin_api::LogLevelResponse,
        common::admin_api::SetLogLevelRequest,
        errors::ErrorInfo,
        errors::ErrorCategory,
    )),
    tags(
        (name = "binary", description = "Fixed-width binary arithmetic"),
        (name = "conversion", description = "Base conversion"),
        (name = "health", description = "Health check endpoints"),
        (name = "admin", description = "Runtime administration")
    )
)]
pub struct ApiDoc;

/// Generate OpenAPI JSON specification
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let openapi = ApiDoc::openapi();
        assert_eq!(openapi.info.title, "Calculation Service API");
        assert_eq!(openapi.info.version, "0.1.0");
        assert!(openapi.paths.paths.contains_key("/binary/operation"));
        assert!(openapi.paths.paths.contains_key("/convert"));
        assert!(openapi.paths.paths.contains_key("/health"));
    }
}
