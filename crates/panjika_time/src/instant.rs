//! `Instant`: a point on the continuous ephemeris time scale.
//!
//! The scale is the Julian Date in UT, so one unit is one civil day and
//! offsets like "+78 minutes" are plain scalar additions. TT (for the
//! ephemeris series) is derived on demand through ΔT.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::delta_t::jd_ut_to_tt;
use crate::error::TimeError;
use crate::julian::{DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// A point in time as a Julian Date (UT).
///
/// Immutable and `Copy`. Ordering and equality are those of the underlying
/// `f64`; a non-finite value can only be produced by non-finite arithmetic
/// and is rejected when converting back to civil time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_ut: f64,
}

impl Instant {
    /// Create an instant from a Julian Date in UT.
    pub fn from_jd_ut(jd_ut: f64) -> Result<Self, TimeError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::NonFinite(jd_ut));
        }
        Ok(Self { jd_ut })
    }

    /// Convert a timezone-qualified civil timestamp to the ephemeris scale.
    pub fn from_civil<Z: TimeZone>(civil: &DateTime<Z>) -> Self {
        let secs = civil.timestamp() as f64;
        let nanos = civil.timestamp_subsec_nanos() as f64;
        Self {
            jd_ut: UNIX_EPOCH_JD + secs / SECONDS_PER_DAY + nanos / (SECONDS_PER_DAY * 1e9),
        }
    }

    /// Julian Date in UT.
    pub fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Julian Date in TT (UT + ΔT).
    pub fn jd_tt(self) -> f64 {
        jd_ut_to_tt(self.jd_ut)
    }

    /// Julian centuries of TT since J2000.0, the argument of the
    /// solar/lunar series.
    pub fn centuries_tt(self) -> f64 {
        (self.jd_tt() - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_ut: self.jd_ut + days,
        }
    }

    /// Signed days from `earlier` to `self`.
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.jd_ut - earlier.jd_ut
    }

    /// Point at fraction `frac` of the way from `self` to `end`.
    pub fn lerp(self, end: Instant, frac: f64) -> Self {
        self.add_days(end.days_since(self) * frac)
    }

    /// Convert to a UTC timestamp.
    pub fn to_utc(self) -> Result<DateTime<Utc>, TimeError> {
        if !self.jd_ut.is_finite() {
            return Err(TimeError::NonFinite(self.jd_ut));
        }
        let secs = (self.jd_ut - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
        let mut whole = secs.floor();
        let mut nanos = ((secs - whole) * 1e9).round();
        if nanos >= 1e9 {
            whole += 1.0;
            nanos -= 1e9;
        }
        if whole.abs() > i64::MAX as f64 / 2.0 {
            return Err(TimeError::OutOfRange(self.jd_ut));
        }
        DateTime::from_timestamp(whole as i64, nanos as u32).ok_or(TimeError::OutOfRange(self.jd_ut))
    }

    /// Convert to a civil timestamp in an IANA timezone.
    pub fn to_civil(self, tz: &Tz) -> Result<DateTime<Tz>, TimeError> {
        Ok(self.to_utc()?.with_timezone(tz))
    }
}

impl Add<f64> for Instant {
    type Output = Instant;

    /// Offset in days.
    fn add(self, days: f64) -> Instant {
        self.add_days(days)
    }
}

impl Sub<f64> for Instant {
    type Output = Instant;

    fn sub(self, days: f64) -> Instant {
        self.add_days(-days)
    }
}

impl Sub<Instant> for Instant {
    type Output = f64;

    /// Duration in days.
    fn sub(self, rhs: Instant) -> f64 {
        self.days_since(rhs)
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_utc() {
            Ok(utc) => write!(f, "{}", utc.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Err(_) => write!(f, "JD {}", self.jd_ut),
        }
    }
}
