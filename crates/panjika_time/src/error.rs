//! Error types for time-scale and civil-time conversions.

use thiserror::Error;

/// Errors from converting between civil timestamps and the ephemeris scale.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The ephemeris time value is NaN or infinite.
    #[error("non-finite ephemeris time: {0}")]
    NonFinite(f64),
    /// The ephemeris time is outside the range chrono can represent.
    #[error("ephemeris time out of civil range: JD {0}")]
    OutOfRange(f64),
    /// The IANA timezone name could not be resolved.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    /// The local wall-clock time does not exist in the timezone (DST gap).
    #[error("local time {time} does not exist in {tz}")]
    NonexistentLocalTime { time: String, tz: String },
    /// The civil date components are invalid.
    #[error("invalid civil date: {0}")]
    InvalidDate(String),
}
