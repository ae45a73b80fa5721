// src/clock.rs

// clock module definition and implementations

// dependencies
use std::time::Instant;

/// Clock trait to abstract time retrieval.
/// Implementors must be thread-safe (Send + Sync).
/// The `now` method returns a reading in nanoseconds on a monotonic scale;
/// only the difference between two readings is meaningful.
/// The HitLimiter reads this clock once per decision.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Default clock backed by `std::time::Instant`.
/// Readings are nanoseconds elapsed since the clock was created,
/// so they never go backward.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        // saturates after ~584 years of uptime
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}
