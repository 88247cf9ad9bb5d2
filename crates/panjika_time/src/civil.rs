//! Civil-time helpers: IANA timezone lookup and local wall-clock resolution.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::instant::Instant;

/// Resolve an IANA timezone name such as `"Asia/Kolkata"`.
pub fn parse_timezone(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

/// Build a civil date, rejecting impossible components.
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TimeError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// Wall-clock `hour:00` on `date` in `tz`, as an ephemeris instant.
///
/// Ambiguous local times (DST fold) take the earlier occurrence. A time
/// that falls in a DST gap moves forward one hour; if that is also
/// missing the call fails.
pub fn local_instant(date: NaiveDate, hour: u32, tz: &Tz) -> Result<Instant, TimeError> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| TimeError::InvalidDate(format!("{date} hour {hour}")))?;
    local_datetime_instant(date.and_time(time), tz)
}

/// Resolve a naive local datetime in `tz`, with the same DST rules as
/// [`local_instant`].
pub fn local_datetime_instant(local: NaiveDateTime, tz: &Tz) -> Result<Instant, TimeError> {
    if let Some(dt) = tz.from_local_datetime(&local).earliest() {
        return Ok(Instant::from_civil(&dt));
    }
    let shifted = local + Duration::hours(1);
    tz.from_local_datetime(&shifted)
        .earliest()
        .map(|dt| Instant::from_civil(&dt))
        .ok_or_else(|| TimeError::NonexistentLocalTime {
            time: local.to_string(),
            tz: tz.name().to_string(),
        })
}

/// Civil calendar date of an instant in `tz`.
pub fn date_in(at: Instant, tz: &Tz) -> Result<NaiveDate, TimeError> {
    Ok(at.to_civil(tz)?.date_naive())
}
