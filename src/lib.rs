// src/lib.rs

//! # Hit Limiter
//!
//! An in-process rate limiter that grants a fixed budget of hits per time
//! window to a single subject.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::time::Duration;
//! use hit_limiter::HitLimiter;
//!
//! let limiter = HitLimiter::new(2, Duration::from_secs(60)).unwrap();
//!
//! assert!(!limiter.try_acquire()); // allowed
//! assert!(!limiter.try_acquire()); // allowed
//! assert!(limiter.try_acquire()); // limited
//!
//! let decision = limiter.check();
//! if !decision.allowed {
//!     println!("Rate limited - retry after {:?}",
//!              decision.retry_after.unwrap_or_default());
//! }
//! ```

// private modules
mod clock;
mod config;
mod errors;
mod hit_limiter;

// public API exports
pub use clock::{Clock, MonotonicClock};
pub use config::HitLimiterConfig;
pub use errors::{HitLimiterError, Result};
pub use hit_limiter::{HitDecision, HitLimiter};
