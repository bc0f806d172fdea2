//! Application State Management
//!
//! Central application state that is shared across all API handlers

use std::sync::Arc;
use std::time::Instant;

use radix_calc::{BaseConverter, BinaryEngine};

use crate::config::CalcSrvConfig;

/// Application state containing shared resources
///
/// Both engines are stateless; the state only carries their configured limits.
pub struct AppState {
    pub config: Arc<CalcSrvConfig>,

    /// Decode / compute / encode pipeline for `/binary/operation`
    pub engine: BinaryEngine,

    /// Radix conversion for `/convert`
    pub converter: BaseConverter,

    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: CalcSrvConfig) -> Self {
        let limits = config.limits.to_limits();
        let engine = BinaryEngine::new(limits);
        let converter = BaseConverter::new(limits, config.limits.fraction_digits);

        Self {
            config: Arc::new(config),
            engine,
            converter,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
