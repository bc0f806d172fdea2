//! Common command-line arguments for all RadixLab services
//!
//! Provides a unified argument structure that can be extended by individual services

#[cfg(feature = "cli")]
use clap::Parser;

/// Common service startup arguments
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", clap(author, version, about))]
pub struct ServiceArgs {
    /// Configuration file (YAML)
    #[cfg_attr(feature = "cli", clap(short = 'c', long))]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[cfg_attr(feature = "cli", clap(short = 'l', long, env = "RUST_LOG"))]
    pub log_level: Option<String>,

    /// Optional bind address override (e.g., 127.0.0.1:6010)
    #[cfg_attr(feature = "cli", clap(short = 'b', long, env = "BIND_ADDRESS"))]
    pub bind_address: Option<String>,

    /// Disable colored output (useful for log files)
    #[cfg_attr(feature = "cli", clap(long))]
    pub no_color: bool,

    /// Only validate configuration without starting service
    #[cfg_attr(feature = "cli", clap(long))]
    pub validate: bool,
}

impl ServiceArgs {
    /// Parse the log level override, if any
    pub fn parse_log_level(&self) -> Option<tracing::Level> {
        self.log_level.as_deref().map(parse_level)
    }

    /// Split `--bind-address host:port`
    pub fn parse_bind_address(&self) -> Option<(String, u16)> {
        let addr = self.bind_address.as_deref()?;
        let (host, port) = addr.rsplit_once(':')?;
        let port = port.parse().ok()?;
        Some((host.to_string(), port))
    }
}

/// Parse a level name, defaulting to INFO
pub fn parse_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" | "warning" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
