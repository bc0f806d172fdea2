//! Unified logging module for RadixLab services
//!
//! Console output uses a compact `timestamp [LEVEL] message` format. An
//! optional daily-rolling file layer writes through a non-blocking
//! `tracing-appender` worker. The filter is reloadable at runtime.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Target used by [`http_request_logger`]
pub const API_ACCESS_TARGET: &str = "api_access";

/// Environment variable overriding the log root directory
pub const LOG_DIR_ENV: &str = "RADIX_LOG_DIR";

/// Custom format for log level with brackets: `[INFO]`, `[WARN]`, etc.
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "\x1b[35m",
        Level::DEBUG => "\x1b[34m",
        Level::INFO => "\x1b[32m",
        Level::WARN => "\x1b[33m",
        Level::ERROR => "\x1b[31m",
    }
}

/// Event formatter that outputs: `timestamp [LEVEL] message`
///
/// Example output: `2026-10-16T08:12:44.809211Z [INFO] calcsrv listening on 0.0.0.0:6010`
struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Utc::now();
        write!(writer, "{} ", now.format("%Y-%m-%dT%H:%M:%S%.6fZ"))?;

        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            write!(writer, "{}{}\x1b[0m ", level_color(&level), format_level(&level))?;
        } else {
            write!(writer, "{} ", format_level(&level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ============================================================================
// Log Root Directory Configuration
// ============================================================================

/// Priority: RADIX_LOG_DIR env > configured dir > default "logs"
static LOG_ROOT: OnceLock<PathBuf> = OnceLock::new();

/// Initialize log root directory from config or environment.
///
/// Only the first call has an effect.
pub fn init_log_root(config_dir: Option<&str>) {
    LOG_ROOT.get_or_init(|| resolve_log_root(config_dir));
}

/// Get log root directory
pub fn get_log_root() -> PathBuf {
    LOG_ROOT
        .get()
        .cloned()
        .unwrap_or_else(|| resolve_log_root(None))
}

fn resolve_log_root(config_dir: Option<&str>) -> PathBuf {
    std::env::var(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            config_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
}

// ============================================================================
// Configuration
// ============================================================================

/// Logging section of a service configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when RUST_LOG is not set
    pub level: String,
    /// Log root directory
    pub dir: String,
    /// Also write to a daily-rolling file
    pub file: bool,
    /// JSON format for the file layer
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: false,
            json: false,
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Service name (e.g., "calcsrv")
    pub service_name: String,
    /// Directory for the rolling log file
    pub log_dir: PathBuf,
    /// Default level when RUST_LOG is not set
    pub level: Level,
    /// Enable the daily-rolling file layer
    pub enable_file: bool,
    /// Enable JSON format for the file layer
    pub enable_json: bool,
    /// Colored console output
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".to_string(),
            log_dir: get_log_root(),
            level: Level::INFO,
            enable_file: false,
            enable_json: false,
            ansi: true,
        }
    }
}

// Keeps the non-blocking file writer alive for the life of the process
static GUARDS: OnceLock<Mutex<Vec<WorkerGuard>>> = OnceLock::new();

// Dynamic log level reload support
type EnvFilterReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;
static LOG_FILTER_HANDLE: OnceLock<EnvFilterReloadHandle> = OnceLock::new();
static CURRENT_LOG_LEVEL: OnceLock<Mutex<String>> = OnceLock::new();

/// Build the initial filter string, respecting RUST_LOG
fn initial_filter(config: &LogConfig) -> String {
    let level = config.level.as_str().to_ascii_lowercase();
    match std::env::var("RUST_LOG") {
        Ok(env_str) if env_str.contains(API_ACCESS_TARGET) => env_str,
        Ok(env_str) => format!("{},{}=info", env_str, API_ACCESS_TARGET),
        Err(_) => format!("{},{}=info", level, API_ACCESS_TARGET),
    }
}

/// Initialize logging system with configuration
pub fn init_with_config(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = initial_filter(&config);
    let env_filter = EnvFilter::try_new(&filter_str)?;

    // Wrap EnvFilter with reload::Layer for dynamic level changes
    let (reload_filter, reload_handle) = reload::Layer::new(env_filter);
    let _ = LOG_FILTER_HANDLE.set(reload_handle);
    let _ = CURRENT_LOG_LEVEL.set(Mutex::new(filter_str));

    let console_layer = fmt::layer()
        .with_ansi(config.ansi)
        .event_format(BracketedLevelFormat)
        .boxed();

    let file_layer = if config.enable_file {
        std::fs::create_dir_all(&config.log_dir)?;
        let appender = tracing_appender::rolling::daily(
            &config.log_dir,
            format!("{}.log", config.service_name),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let guards = GUARDS.get_or_init(|| Mutex::new(Vec::new()));
        match guards.lock() {
            Ok(mut guards) => guards.push(guard),
            Err(poisoned) => poisoned.into_inner().push(guard),
        }

        let layer = if config.enable_json {
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .boxed()
        } else {
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .event_format(BracketedLevelFormat)
                .boxed()
        };
        Some(layer)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(reload_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    if config.enable_file {
        tracing::info!("Logging: {} @ {:?}", config.service_name, config.log_dir);
    }
    Ok(())
}

/// Dynamically set log filter level at runtime
///
/// Accepts a plain level (`"debug"`) or a full filter spec
/// (`"info,radix_calc=debug"`).
pub fn set_log_level(level: &str) -> Result<(), String> {
    let new_filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    let handle = LOG_FILTER_HANDLE
        .get()
        .ok_or("Logging not initialized with reload support")?;

    handle
        .reload(new_filter)
        .map_err(|e| format!("Failed to reload log filter: {}", e))?;

    if let Some(current) = CURRENT_LOG_LEVEL.get() {
        if let Ok(mut guard) = current.lock() {
            *guard = level.to_string();
        }
    }

    tracing::info!("Log level changed to: {}", level);
    Ok(())
}

/// Get current log filter level
pub fn get_log_level() -> String {
    CURRENT_LOG_LEVEL
        .get()
        .and_then(|m| m.lock().ok())
        .map(|guard| guard.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

/// HTTP request logging middleware
///
/// Modifying requests are logged at INFO, everything else at DEBUG, all on
/// the `api_access` target:
///
/// ```text
/// [INFO] HTTP request method=POST path=/binary/operation status=200 duration_ms=1
/// ```
///
/// Add this middleware to your Axum router **before** `.with_state()`:
/// ```rust,ignore
/// let app = Router::new()
///     // ... routes ...
///     .layer(middleware::from_fn(common::logging::http_request_logger))
///     .with_state(state);
/// ```
#[cfg(feature = "axum")]
pub async fn http_request_logger(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    use std::time::Instant;
    use tracing::{debug, info};

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if matches!(method.as_str(), "POST" | "PUT" | "PATCH" | "DELETE") {
        info!(
            target: "api_access",
            method = %method,
            path = %path,
            status = status,
            duration_ms = %duration_ms,
            "HTTP request"
        );
    } else {
        debug!(
            target: "api_access",
            method = %method,
            path = %path,
            status = status,
            duration_ms = %duration_ms,
            "HTTP request"
        );
    }

    response
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.dir, "logs");
        assert!(!config.file);
    }

    #[test]
    fn test_logging_config_partial_yaml() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level": "debug"}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.dir, "logs");
    }

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(&Level::WARN), "[WARN]");
        assert_eq!(format_level(&Level::TRACE), "[TRACE]");
    }

    #[test]
    fn test_set_log_level_requires_init() {
        // Nothing in this test binary installs the reloadable filter
        let err = set_log_level("debug").unwrap_err();
        assert!(err.contains("not initialized"), "{err}");
    }

    #[test]
    fn test_set_log_level_rejects_bad_filter() {
        let err = set_log_level("radix_calc=loud").unwrap_err();
        assert!(err.starts_with("Invalid log level 'radix_calc=loud'"), "{err}");
        assert_eq!(get_log_level(), "unknown");
    }
}
