//! Calculation Service (calcsrv)

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use calcsrv::config::{CalcSrvConfig, DEFAULT_PORT};
use calcsrv::{create_router, AppState};
use common::bootstrap_args::ServiceArgs;
use common::service_bootstrap::{self, ServiceInfo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServiceArgs::parse();

    let mut config = CalcSrvConfig::load(args.config.as_deref())?;
    if let Some((host, port)) = args.parse_bind_address() {
        config.api.host = host;
        config.api.port = port;
    }
    config.validate()?;

    // Validation mode: print the effective configuration and exit
    if args.validate {
        println!("{}", serde_yaml::to_string(&config)?);
        println!("Configuration is valid");
        return Ok(());
    }

    let service_info = ServiceInfo::new(
        config.service.name.clone(),
        env!("CARGO_PKG_VERSION"),
        "Binary Arithmetic & Base Conversion Service",
        DEFAULT_PORT,
    );
    service_bootstrap::init_logging(
        &service_info,
        &config.logging,
        args.parse_log_level(),
        !args.no_color,
    )?;
    if !args.no_color {
        service_bootstrap::print_startup_banner(&service_info);
    }

    let bind_address = config.bind_address();
    info!(
        max_width = config.limits.max_width,
        max_digits = config.limits.max_digits,
        fraction_digits = config.limits.fraction_digits,
        "Calculation limits"
    );

    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("API server listening on http://{}", bind_address);
    info!("OpenAPI document: http://{}/api-docs/openapi.json", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(common::shutdown::wait_for_shutdown())
        .await?;

    info!("Service shutdown complete");
    Ok(())
}
