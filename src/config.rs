// src/config.rs

//! Configuration types for the hit limiter

// dependencies
use std::time::Duration;

use crate::errors::{HitLimiterError, Result};

/// Configuration for hit limiter behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitLimiterConfig {
    pub(crate) limit: u64,
    pub(crate) window: Duration,
}

impl HitLimiterConfig {
    /// Create a new configuration with a hit limit and window length
    pub fn new(limit: u64, window: Duration) -> Self {
        Self { limit, window }
    }

    /// Builder-style: set the hit limit
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Builder-style: set the window length
    pub fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn get_limit(&self) -> u64 {
        self.limit
    }

    pub fn get_window(&self) -> Duration {
        self.window
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.window_nanos().map(|_| ())
    }

    // window length in clock units, checked against every constraint
    pub(crate) fn window_nanos(&self) -> Result<u64> {
        if self.limit == 0 {
            return Err(HitLimiterError::InvalidConfiguration(
                "limit must be positive".to_string(),
            ));
        }
        if self.window.is_zero() {
            return Err(HitLimiterError::InvalidConfiguration(
                "window must be a positive duration".to_string(),
            ));
        }
        u64::try_from(self.window.as_nanos()).map_err(|_| {
            HitLimiterError::InvalidConfiguration(format!(
                "window of {:?} does not fit in u64 nanoseconds",
                self.window
            ))
        })
    }
}
