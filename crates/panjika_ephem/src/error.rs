//! Error types for ephemeris providers.

use panjika_time::TimeError;
use thiserror::Error;

use crate::body::Body;

/// Errors an [`EphemerisProvider`](crate::EphemerisProvider) can report.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider produced a NaN or infinite value.
    #[error("{body} position is not finite at JD {jd_ut}")]
    NonFinite { body: Body, jd_ut: f64 },
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The provider cannot serve the request (missing data, out of range).
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
    /// Error from time-scale conversion.
    #[error(transparent)]
    Time(#[from] TimeError),
}
