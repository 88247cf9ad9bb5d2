//! Local solar day resolver.
//!
//! The Vedic day runs sunrise to sunrise. For a civil date, the resolver
//! asks the provider for the rise/set nearest a fixed local anchor hour
//! and accepts it only if it falls on that same civil date. Otherwise it
//! retries at the configured offsets (0, +1 h, -1 h by default) before
//! giving up.
//!
//! Sunset is the first one after sunrise. At high latitudes in summer it
//! can fall after local midnight; the civil-date search then finds the
//! previous evening's sunset, and the resolver searches again half a day
//! after sunrise.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use panjika_base::Vaar;
use panjika_ephem::{Body, EphemerisProvider, GeoLocation, RiseSetEvent};
use panjika_time::{Instant, date_in, local_instant};
use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::error::{DayEvent, PanchangError};

/// Lead from sunrise to the anchor of the fallback sunset search, days.
const SUNSET_AFTER_SUNRISE_LEAD_DAYS: f64 = 0.5;

/// Sunrise/sunset frame of one civil date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAnchor {
    pub date: NaiveDate,
    pub sunrise: Instant,
    /// First sunset after `sunrise`; past midnight it lies on the next
    /// civil date.
    pub sunset: Instant,
    /// Sunrise of the following civil date; `None` when it does not occur
    /// (first day of polar night).
    pub next_sunrise: Option<Instant>,
    /// Weekday of the sunrise instant in the request timezone.
    pub vaar: Vaar,
}

impl DayAnchor {
    /// Daylight length in days.
    pub fn day_length(&self) -> f64 {
        self.sunset - self.sunrise
    }
}

/// Rise or set of `body` on the civil `date`, trying each retry offset.
///
/// `Ok(None)` means no attempt produced an event on that date.
#[allow(clippy::too_many_arguments)]
pub fn find_event_on_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    date: NaiveDate,
    tz: &Tz,
    location: &GeoLocation,
    body: Body,
    event: RiseSetEvent,
    anchor_hour: u32,
    config: &ResolverConfig,
) -> Result<Option<Instant>, PanchangError> {
    let base = local_instant(date, anchor_hour, tz)?;
    for (attempt, &offset) in config.retry_offsets_hours.iter().enumerate() {
        let anchor = base + f64::from(offset) / 24.0;
        let Some(found) = provider.rise_or_set(anchor, body, event, location)? else {
            continue;
        };
        let found_date = date_in(found, tz)?;
        if found_date != date {
            debug!(%body, ?event, %date, %found_date, offset, "event outside civil date");
            continue;
        }
        if attempt > 0 {
            warn!(%body, ?event, %date, offset, "resolved after anchor retry");
        }
        return Ok(Some(found));
    }
    Ok(None)
}

/// Resolve the sunrise/sunset frame for `date`.
///
/// Fails with [`PanchangError::RiseSetUnavailable`] when sunrise cannot be
/// found on the date, or no sunset follows it within a day.
pub fn resolve_day<P: EphemerisProvider + ?Sized>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
    tz: &Tz,
    config: &ResolverConfig,
) -> Result<DayAnchor, PanchangError> {
    let sunrise_on = |d: NaiveDate| {
        find_event_on_date(
            provider,
            d,
            tz,
            location,
            Body::Sun,
            RiseSetEvent::Rise,
            config.sunrise_anchor_hour,
            config,
        )
    };

    let sunrise = sunrise_on(date)?.ok_or(PanchangError::RiseSetUnavailable {
        event: DayEvent::Sunrise,
        date,
    })?;
    let same_date = find_event_on_date(
        provider,
        date,
        tz,
        location,
        Body::Sun,
        RiseSetEvent::Set,
        config.sunset_anchor_hour,
        config,
    )?;
    let sunset = match same_date {
        Some(set) if set > sunrise => Some(set),
        _ => {
            debug!(%date, "no sunset after sunrise on the civil date, searching past midnight");
            sunset_after(provider, sunrise, location, config)?
        }
    }
    .ok_or(PanchangError::RiseSetUnavailable {
        event: DayEvent::Sunset,
        date,
    })?;

    let next_sunrise = match date.succ_opt() {
        Some(next) => sunrise_on(next)?,
        None => None,
    };
    if next_sunrise.is_none() {
        warn!(%date, "no sunrise on the following date, night horas unavailable");
    }

    let vaar = Vaar::from_index(
        sunrise
            .to_civil(tz)?
            .weekday()
            .num_days_from_sunday(),
    );

    debug!(%date, sunrise = %sunrise, sunset = %sunset, vaar = vaar.name(), "resolved day anchor");
    Ok(DayAnchor {
        date,
        sunrise,
        sunset,
        next_sunrise,
        vaar,
    })
}

/// First sunset within a day after `sunrise`, anchored half a day later.
fn sunset_after<P: EphemerisProvider + ?Sized>(
    provider: &P,
    sunrise: Instant,
    location: &GeoLocation,
    config: &ResolverConfig,
) -> Result<Option<Instant>, PanchangError> {
    let base = sunrise + SUNSET_AFTER_SUNRISE_LEAD_DAYS;
    for &offset in &config.retry_offsets_hours {
        let anchor = base + f64::from(offset) / 24.0;
        if let Some(set) = provider.rise_or_set(anchor, Body::Sun, RiseSetEvent::Set, location)? {
            if set > sunrise && set - sunrise < 1.0 {
                return Ok(Some(set));
            }
        }
    }
    Ok(None)
}

/// Moonrise or moonset on `date`; absence is not an error.
pub fn moon_event_on_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    date: NaiveDate,
    location: &GeoLocation,
    tz: &Tz,
    event: RiseSetEvent,
    config: &ResolverConfig,
) -> Result<Option<Instant>, PanchangError> {
    find_event_on_date(
        provider,
        date,
        tz,
        location,
        Body::Moon,
        event,
        config.moon_anchor_hour,
        config,
    )
}
