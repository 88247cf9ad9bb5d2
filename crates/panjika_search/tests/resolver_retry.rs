//! Day resolver behaviour against a scripted provider.

use std::cell::RefCell;

use chrono::NaiveDate;
use chrono_tz::Tz;
use panjika_base::Vaar;
use panjika_ephem::{Body, EphemerisError, EphemerisProvider, GeoLocation, RiseSetEvent, SiderealMode};
use panjika_search::{DayEvent, PanchangError, ResolverConfig, intervals, resolve_day};
use panjika_time::{Instant, local_instant};

const HOUR: f64 = 1.0 / 24.0;

const NOWHERE: GeoLocation = GeoLocation {
    latitude_deg: 0.0,
    longitude_deg: 0.0,
    altitude_m: 0.0,
};

/// Provider whose horizon events come from a closure; longitudes are unused.
struct ScriptedSky<F> {
    script: F,
    calls: RefCell<Vec<(Body, RiseSetEvent, Instant)>>,
}

impl<F> ScriptedSky<F>
where
    F: Fn(Instant, Body, RiseSetEvent) -> Option<Instant>,
{
    fn new(script: F) -> Self {
        Self {
            script,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn sunrise_attempts(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(b, e, _)| *b == Body::Sun && *e == RiseSetEvent::Rise)
            .count()
    }
}

impl<F> EphemerisProvider for ScriptedSky<F>
where
    F: Fn(Instant, Body, RiseSetEvent) -> Option<Instant>,
{
    fn sidereal_longitude(
        &self,
        _at: Instant,
        _body: Body,
        _mode: SiderealMode,
    ) -> Result<f64, EphemerisError> {
        Ok(0.0)
    }

    fn rise_or_set(
        &self,
        anchor: Instant,
        body: Body,
        event: RiseSetEvent,
        _location: &GeoLocation,
    ) -> Result<Option<Instant>, EphemerisError> {
        self.calls.borrow_mut().push((body, event, anchor));
        Ok((self.script)(anchor, body, event))
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

fn at(hour: u32) -> Instant {
    local_instant(date(), hour, &Tz::UTC).unwrap()
}

fn near(a: Instant, b: Instant) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn sunrise_found_on_second_anchor() {
    let first_anchor = at(5);
    let sky = ScriptedSky::new(move |anchor, _, event| match event {
        RiseSetEvent::Rise if near(anchor, first_anchor) => None,
        RiseSetEvent::Rise => Some(anchor + 10.0 / 1440.0),
        RiseSetEvent::Set => Some(anchor + 6.0 * HOUR),
    });

    let day = resolve_day(&sky, date(), &NOWHERE, &Tz::UTC, &ResolverConfig::default()).unwrap();
    assert!(near(day.sunrise, at(6) + 10.0 / 1440.0), "{}", day.sunrise);
    assert!(near(day.sunset, at(18)));
    assert_eq!(day.vaar, Vaar::Ravivaar);
}

#[test]
fn event_on_previous_date_is_rejected() {
    // From 05:00 the scripted sunrise lands at 23:30 the day before; from
    // 06:00 it lands at 00:30 on the requested date.
    let sky = ScriptedSky::new(|anchor, _, event| match event {
        RiseSetEvent::Rise => Some(anchor - 5.5 * HOUR),
        RiseSetEvent::Set => Some(anchor + 6.0 * HOUR),
    });

    let day = resolve_day(&sky, date(), &NOWHERE, &Tz::UTC, &ResolverConfig::default()).unwrap();
    assert!(near(day.sunrise, at(0) + 0.5 * HOUR), "{}", day.sunrise);
}

#[test]
fn all_attempts_fail() {
    let sky = ScriptedSky::new(|_, _, _| None);
    let err = resolve_day(&sky, date(), &NOWHERE, &Tz::UTC, &ResolverConfig::default()).unwrap_err();
    assert_eq!(
        err,
        PanchangError::RiseSetUnavailable {
            event: DayEvent::Sunrise,
            date: date(),
        }
    );
    assert_eq!(sky.sunrise_attempts(), 3);
}

#[test]
fn custom_retry_offsets_are_honoured() {
    let sky = ScriptedSky::new(|_, _, _| None);
    let config = ResolverConfig {
        retry_offsets_hours: vec![0, 2, -2, 3],
        ..ResolverConfig::default()
    };
    assert!(resolve_day(&sky, date(), &NOWHERE, &Tz::UTC, &config).is_err());
    assert_eq!(sky.sunrise_attempts(), 4);
    let anchors: Vec<Instant> = sky.calls.borrow().iter().map(|c| c.2).collect();
    assert!(near(anchors[1], at(7)));
    assert!(near(anchors[2], at(3)));
}

#[test]
fn sunset_past_midnight_follows_sunrise() {
    // Sunsets at 00:03 every night, sunrise at 03:00: the civil date's
    // sunset precedes its sunrise, so the day ends at 00:03 the next night.
    let first_set = at(0) + 3.0 / 1440.0;
    let sky = ScriptedSky::new(move |anchor, _, event| match event {
        RiseSetEvent::Rise => Some(anchor - 2.0 * HOUR),
        RiseSetEvent::Set => Some(first_set + (anchor - first_set).round()),
    });

    let day = resolve_day(&sky, date(), &NOWHERE, &Tz::UTC, &ResolverConfig::default()).unwrap();
    assert!(near(day.sunrise, at(3)), "{}", day.sunrise);
    assert!(near(day.sunset, first_set + 1.0), "{}", day.sunset);
    assert!(day.sunset > day.sunrise);
    assert!(near(day.next_sunrise.unwrap(), at(3) + 1.0));
}

#[test]
fn no_sunset_after_sunrise_is_unavailable() {
    let midnight = local_instant(date().succ_opt().unwrap(), 0, &Tz::UTC).unwrap();
    let sky = ScriptedSky::new(move |anchor, _, event| match event {
        RiseSetEvent::Rise => Some(anchor + 10.0 * HOUR),
        RiseSetEvent::Set if anchor < midnight => Some(anchor - HOUR),
        RiseSetEvent::Set => None,
    });
    let err = resolve_day(&sky, date(), &NOWHERE, &Tz::UTC, &ResolverConfig::default()).unwrap_err();
    assert_eq!(
        err,
        PanchangError::RiseSetUnavailable {
            event: DayEvent::Sunset,
            date: date(),
        }
    );
}

#[test]
fn missing_next_sunrise_keeps_day_horas_only() {
    let midnight = local_instant(date().succ_opt().unwrap(), 0, &Tz::UTC).unwrap();
    let sky = ScriptedSky::new(move |anchor, _, event| match event {
        RiseSetEvent::Rise if anchor > midnight => None,
        RiseSetEvent::Rise => Some(anchor),
        RiseSetEvent::Set => Some(anchor + 6.0 * HOUR),
    });

    let day = resolve_day(&sky, date(), &NOWHERE, &Tz::UTC, &ResolverConfig::default()).unwrap();
    assert!(day.next_sunrise.is_none());
    assert_eq!(intervals::horas(&day).len(), 12);
}

#[test]
fn weekday_follows_local_sunrise() {
    // 05:00 in Tokyo is still Saturday in UTC.
    let tokyo = chrono_tz::Asia::Tokyo;
    let sky = ScriptedSky::new(|anchor, _, event| match event {
        RiseSetEvent::Rise => Some(anchor),
        RiseSetEvent::Set => Some(anchor + 6.0 * HOUR),
    });
    let day = resolve_day(&sky, date(), &NOWHERE, &tokyo, &ResolverConfig::default()).unwrap();
    assert_eq!(day.vaar, Vaar::Ravivaar);
    assert_eq!(day.sunrise.to_utc().unwrap().date_naive(), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
}
