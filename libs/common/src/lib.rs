//! `RadixLab` basic library
//!
//! Provides basic functions shared by all services, including:
//! - API response and error envelope types
//! - runtime admin endpoints (log level)
//! - logging functions
//! - service bootstrap (arguments, banner, shutdown)

// Common modules
#[cfg(feature = "axum")]
pub mod admin_api;
pub mod api_types;
pub mod logging;
pub mod service_bootstrap;
pub mod shutdown;

// Bootstrap modules
pub mod bootstrap_args;

// Re-export commonly used API types
pub use api_types::{ComponentHealth, ErrorCategory, ErrorInfo, HealthStatus, ServiceStatus};

// Re-export AppError when axum feature is enabled
#[cfg(feature = "axum")]
pub use api_types::AppError;

pub use logging::LoggingConfig;

// Re-export common dependencies
pub use anyhow;
pub use serde;
pub use serde_json;
pub use tokio;

// Re-export CLI dependencies when cli feature is enabled
#[cfg(feature = "cli")]
pub use clap;

// Re-export clap derive macros separately for proper macro resolution
#[cfg(feature = "cli")]
pub use clap::{Args, Parser, Subcommand, ValueEnum};
