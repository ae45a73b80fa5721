// src/errors.rs

// error handling for the hit limiter type

// dependencies
use thiserror::Error;

/// Error type for HitLimiter configuration issues.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HitLimiterError {
    /// Non-positive limit or window supplied at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for hit limiter operations.
pub type Result<T> = std::result::Result<T, HitLimiterError>;
