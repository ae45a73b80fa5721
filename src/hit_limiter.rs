// src/hit_limiter.rs

// hit-limiter: a fixed window hit budget for a single subject.

// dependencies
use crate::clock::{Clock, MonotonicClock};
use crate::config::HitLimiterConfig;
use crate::errors::Result;
use parking_lot::Mutex;
use std::time::Duration;
use tracing::{debug, trace};

/// The main HitLimiter model.
/// C is the clock type, defaulting to MonotonicClock.
///
/// Windows are fixed: the budget jumps back to `limit` in one step the first
/// time a decision observes that `window` has elapsed since the window
/// anchor. Up to `2 * limit` hits can therefore land in a short span that
/// straddles a window boundary.
///
/// All mutable state sits behind one mutex, so concurrent callers observe a
/// single sequential order of decrements and replenishments.
#[derive(Debug)]
pub struct HitLimiter<C = MonotonicClock>
where
    C: Clock,
{
    limit: u64,
    window_nanos: u64,
    state: Mutex<WindowState>,
    clock: C,
}

#[derive(Debug)]
struct WindowState {
    // hits still available in the current window, always <= limit
    budget: u64,
    // None after reset; the next decision re-anchors the window
    anchor_nanos: Option<u64>,
}

impl HitLimiter<MonotonicClock> {
    /// Create a limiter allowing `limit` hits per `window`, reading a
    /// fresh [`MonotonicClock`].
    ///
    /// Fails with [`HitLimiterError::InvalidConfiguration`](crate::HitLimiterError::InvalidConfiguration)
    /// when `limit` is zero or `window` is zero.
    pub fn new(limit: u64, window: Duration) -> Result<Self> {
        Self::with_config(HitLimiterConfig::new(limit, window), MonotonicClock::new())
    }
}

// methods for the HitLimiter type
impl<C> HitLimiter<C>
where
    C: Clock,
{
    // method to create a new hit limiter from a config object
    pub fn with_config(config: HitLimiterConfig, clock: C) -> Result<Self> {
        let window_nanos = config.window_nanos()?;
        let anchor = clock.now();

        debug!(limit = config.limit, window = ?config.window, "hit limiter created");

        Ok(Self {
            limit: config.limit,
            window_nanos,
            state: Mutex::new(WindowState {
                budget: config.limit,
                anchor_nanos: Some(anchor),
            }),
            clock,
        })
    }

    // accessor method to return the configured hit limit
    pub fn limit(&self) -> u64 {
        self.limit
    }

    // accessor method to return the configured window length
    pub fn window(&self) -> Duration {
        Duration::from_nanos(self.window_nanos)
    }

    /// Hits available as of the last [`check`](Self::check),
    /// [`try_acquire`](Self::try_acquire) or [`reset`](Self::reset).
    ///
    /// Window expiry is only applied by a decision call, so after a window
    /// has elapsed this keeps reporting the old budget until the next
    /// decision observes the elapsed time.
    pub fn current_budget(&self) -> u64 {
        self.state.lock().budget
    }

    /// Record one hit and report whether it is limited.
    ///
    /// Returns `true` when the hit is denied and `false` when it is allowed.
    pub fn try_acquire(&self) -> bool {
        !self.check().allowed
    }

    /// Record one hit and return the decision along with window metadata.
    pub fn check(&self) -> HitDecision {
        let mut state = self.state.lock();
        let now = self.clock.now();

        let anchor = match state.anchor_nanos {
            None => {
                state.anchor_nanos = Some(now);
                now
            }
            Some(anchor) if now.saturating_sub(anchor) >= self.window_nanos => {
                state.budget = self.limit;
                state.anchor_nanos = Some(now);
                debug!(limit = self.limit, "window elapsed, budget replenished");
                now
            }
            Some(anchor) => anchor,
        };
        let window_resets_at_nanos = anchor.saturating_add(self.window_nanos);

        let allowed = state.budget >= 1;
        if allowed {
            state.budget -= 1;
        }
        trace!(allowed, remaining = state.budget, "hit decision");

        HitDecision {
            allowed,
            remaining: state.budget,
            retry_after: (!allowed)
                .then(|| Duration::from_nanos(window_resets_at_nanos.saturating_sub(now))),
            window_resets_at_nanos,
        }
    }

    /// Restore the full budget and unset the window anchor, so the next
    /// decision starts a new window at its own time.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.budget = self.limit;
        state.anchor_nanos = None;
        debug!(limit = self.limit, "hit limiter reset");
    }
}

/// Result of a hit decision with window metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitDecision {
    /// Whether the hit was admitted
    pub allowed: bool,
    /// Hits left in the current window after this decision
    pub remaining: u64,
    /// Time until the current window expires (when denied)
    pub retry_after: Option<Duration>,
    /// Clock reading at which the current window expires
    pub window_resets_at_nanos: u64,
}
