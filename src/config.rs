//! Configuration Module
//!
//! Construction-time configuration for the in-memory backend, loadable from
//! environment variables with sensible defaults.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Configuration for the in-memory backend.
///
/// The in-memory store has no per-key TTL; every entry is bounded by a
/// single global life window and aged entries are removed by a periodic
/// sweep task.
#[derive(Debug, Clone)]
pub struct MemoryConfig {
    /// How long every entry stays retrievable after insertion
    pub life_window: Duration,
    /// Interval between background sweeps of aged entries
    pub sweep_interval: Duration,
}

impl MemoryConfig {
    /// Creates a new MemoryConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_LIFE_WINDOW_SECS` - Global life window in seconds (default: 3600)
    /// - `CACHE_SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            life_window: Duration::from_secs(
                env::var("CACHE_LIFE_WINDOW_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3600),
            ),
            sweep_interval: Duration::from_secs(
                env::var("CACHE_SWEEP_INTERVAL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            ),
        }
    }

    /// Rejects configurations the backend cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.life_window.is_zero() {
            return Err(CacheError::InvalidConfig(
                "life_window must be non-zero".to_string(),
            ));
        }
        if self.sweep_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "sweep_interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            life_window: Duration::from_secs(3600),
            sweep_interval: Duration::from_secs(60),
        }
    }
}
