//! calcsrv configuration
//!
//! Layered with figment: built-in defaults, then the YAML file, then
//! `CALCSRV_`-prefixed environment variables (`__` separates sections).

use std::path::{Path, PathBuf};

use common::LoggingConfig;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use radix_calc::{Limits, DEFAULT_FRACTION_DIGITS};
use serde::{Deserialize, Serialize};

use crate::error::{CalcSrvError, Result};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CONFIG_PATH: &str = "config/calcsrv.yaml";
pub const CONFIG_PATH_ENV: &str = "CALCSRV_CONFIG";
pub const ENV_PREFIX: &str = "CALCSRV_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSection {
    pub name: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: "calcsrv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body
    pub body_limit_bytes: usize,
    /// Permissive CORS for browser clients
    pub cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            body_limit_bytes: 64 * 1024,
            cors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_width: u32,
    pub max_digits: usize,
    pub fraction_digits: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            max_width: limits.max_width,
            max_digits: limits.max_digits,
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl LimitsConfig {
    pub fn to_limits(&self) -> Limits {
        Limits {
            max_width: self.max_width,
            max_digits: self.max_digits,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSrvConfig {
    pub service: ServiceSection,
    pub api: ApiConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

impl CalcSrvConfig {
    /// Resolve the configuration file: explicit path, then `CALCSRV_CONFIG`,
    /// then `config/calcsrv.yaml`
    pub fn resolve_path(explicit: Option<&str>) -> PathBuf {
        explicit
            .map(PathBuf::from)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    fn figment(path: &Path, env_prefix: &str) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(env_prefix).split("__"))
    }

    /// Load configuration.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_with_prefix(explicit, ENV_PREFIX)
    }

    fn load_with_prefix(explicit: Option<&str>, env_prefix: &str) -> Result<Self> {
        let path = Self::resolve_path(explicit);
        let required = explicit.is_some() || std::env::var(CONFIG_PATH_ENV).is_ok();
        if required && !path.exists() {
            return Err(CalcSrvError::config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        let config: Self = Self::figment(&path, env_prefix).extract()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.host.trim().is_empty() {
            return Err(CalcSrvError::config("api.host must not be empty"));
        }
        if self.api.port == 0 {
            return Err(CalcSrvError::config("api.port must be non-zero"));
        }
        if self.api.body_limit_bytes == 0 {
            return Err(CalcSrvError::config("api.body_limit_bytes must be non-zero"));
        }
        if self.limits.max_width == 0 {
            return Err(CalcSrvError::config("limits.max_width must be non-zero"));
        }
        if self.limits.max_digits == 0 {
            return Err(CalcSrvError::config("limits.max_digits must be non-zero"));
        }
        if self.limits.fraction_digits > self.limits.max_digits {
            return Err(CalcSrvError::config(format!(
                "limits.fraction_digits ({}) must not exceed limits.max_digits ({})",
                self.limits.fraction_digits, self.limits.max_digits
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
