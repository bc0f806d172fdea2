//! Health check handler

use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, response::Json};
use chrono::Utc;
use common::{ComponentHealth, HealthStatus, ServiceStatus};

use crate::app_state::AppState;

/// Service health with configured limits
///
/// @route GET /health
/// @output `Json<HealthStatus>` - status, version, uptime and per-component checks
/// @status 200 - Service is healthy
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let limits = &state.config.limits;

    let mut checks = HashMap::new();
    checks.insert(
        "binary_engine".to_string(),
        ComponentHealth::healthy(format!("max_width={}", limits.max_width)),
    );
    checks.insert(
        "base_converter".to_string(),
        ComponentHealth::healthy(format!(
            "max_digits={} fraction_digits={}",
            limits.max_digits, limits.fraction_digits
        )),
    );

    Json(HealthStatus {
        status: ServiceStatus::Healthy,
        service: state.config.service.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now(),
        checks,
    })
}
