//! Unified service bootstrap utilities
//!
//! Startup banner and logging initialization shared by RadixLab services.

use crate::logging::{self, LogConfig, LoggingConfig};
use tracing::info;

/// Service metadata for startup
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    /// Service name (e.g., "calcsrv")
    pub name: String,
    /// Service version from Cargo.toml
    pub version: String,
    /// Service description
    pub description: String,
    /// Default port
    pub default_port: u16,
}

impl ServiceInfo {
    /// Create new service info; `version` is usually `env!("CARGO_PKG_VERSION")`
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
        default_port: u16,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            default_port,
        }
    }
}

/// Print unified startup banner for any service
pub fn print_startup_banner(service: &ServiceInfo) {
    let banner = match service.name.as_str() {
        "calcsrv" => {
            r#"
  ██████╗ █████╗ ██╗      ██████╗███████╗██████╗ ██╗   ██╗
 ██╔════╝██╔══██╗██║     ██╔════╝██╔════╝██╔══██╗██║   ██║
 ██║     ███████║██║     ██║     ███████╗██████╔╝██║   ██║
 ██║     ██╔══██║██║     ██║     ╚════██║██╔══██╗╚██╗ ██╔╝
 ╚██████╗██║  ██║███████╗╚██████╗███████║██║  ██║ ╚████╔╝
  ╚═════╝╚═╝  ╚═╝╚══════╝ ╚═════╝╚══════╝╚═╝  ╚═╝  ╚═══╝
            "#
        },
        _ => {
            r#"
 ██████╗  █████╗ ██████╗ ██╗██╗  ██╗
 ██╔══██╗██╔══██╗██╔══██╗██║╚██╗██╔╝
 ██████╔╝███████║██║  ██║██║ ╚███╔╝
 ██╔══██╗██╔══██║██║  ██║██║ ██╔██╗
 ██║  ██║██║  ██║██████╔╝██║██╔╝ ██╗
 ╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝ ╚═╝╚═╝  ╚═╝
            "#
        },
    };

    info!("{}", banner);
    info!(" {} v{}", service.name.to_uppercase(), service.version);
    info!(" {}", service.description);
    info!(" Default Port: {}", service.default_port);
}

/// Initialize logging for a service with standard configuration
///
/// Log root directory priority:
/// 1. RADIX_LOG_DIR environment variable
/// 2. `logging_config.dir`
/// 3. Default "logs"
///
/// `level_override` (from the command line) wins over `logging_config.level`;
/// RUST_LOG wins over both.
pub fn init_logging(
    service: &ServiceInfo,
    logging_config: &LoggingConfig,
    level_override: Option<tracing::Level>,
    ansi: bool,
) -> anyhow::Result<()> {
    logging::init_log_root(Some(logging_config.dir.as_str()));

    let level =
        level_override.unwrap_or_else(|| crate::bootstrap_args::parse_level(&logging_config.level));

    let log_config = LogConfig {
        service_name: service.name.clone(),
        log_dir: logging::get_log_root().join(&service.name),
        level,
        enable_file: logging_config.file,
        enable_json: logging_config.json,
        ansi,
    };

    logging::init_with_config(log_config).map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}
