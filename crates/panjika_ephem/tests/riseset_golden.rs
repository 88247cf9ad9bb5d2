//! Rise/set golden values for the analytic ephemeris.
//!
//! Reference times are from an independent evaluation of the same series;
//! published almanac times for Kolkata agree to within a minute.

use panjika_ephem::{AnalyticEphemeris, Body, EphemerisProvider, GeoLocation, RiseSetEvent};
use panjika_time::{Instant, civil_date, local_datetime_instant, local_instant, parse_timezone};

const KOLKATA: GeoLocation = GeoLocation {
    latitude_deg: 22.5726,
    longitude_deg: 88.3639,
    altitude_m: 0.0,
};

fn kolkata_wall(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> Instant {
    let tz = parse_timezone("Asia/Kolkata").unwrap();
    let naive = civil_date(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, ss)
        .unwrap();
    local_datetime_instant(naive, &tz).unwrap()
}

fn kolkata_anchor(y: i32, m: u32, d: u32, hour: u32) -> Instant {
    let tz = parse_timezone("Asia/Kolkata").unwrap();
    local_instant(civil_date(y, m, d).unwrap(), hour, &tz).unwrap()
}

fn assert_near(found: Instant, expected: Instant, tol_s: f64, what: &str) {
    let diff_s = (found - expected) * 86_400.0;
    assert!(
        diff_s.abs() <= tol_s,
        "{what}: off by {diff_s:.1} s (found {found}, expected {expected})"
    );
}

#[test]
fn kolkata_sunrise_2024_10_31() {
    let eph = AnalyticEphemeris::default();
    let rise = eph
        .rise_or_set(kolkata_anchor(2024, 10, 31, 5), Body::Sun, RiseSetEvent::Rise, &KOLKATA)
        .unwrap()
        .expect("sun rises in Kolkata");
    assert_near(rise, kolkata_wall(2024, 10, 31, 5, 40, 33), 5.0, "sunrise");
}

#[test]
fn kolkata_sunset_2024_10_31() {
    let eph = AnalyticEphemeris::default();
    let set = eph
        .rise_or_set(kolkata_anchor(2024, 10, 31, 12), Body::Sun, RiseSetEvent::Set, &KOLKATA)
        .unwrap()
        .expect("sun sets in Kolkata");
    assert_near(set, kolkata_wall(2024, 10, 31, 16, 59, 28), 5.0, "sunset");
}

#[test]
fn kolkata_moon_events_2024_10_31() {
    let eph = AnalyticEphemeris::default();
    let anchor = kolkata_anchor(2024, 10, 31, 12);
    let rise = eph
        .rise_or_set(anchor, Body::Moon, RiseSetEvent::Rise, &KOLKATA)
        .unwrap()
        .expect("moonrise");
    assert_near(rise, kolkata_wall(2024, 10, 31, 4, 28, 0), 60.0, "moonrise");
    let set = eph
        .rise_or_set(anchor, Body::Moon, RiseSetEvent::Set, &KOLKATA)
        .unwrap()
        .expect("moonset");
    assert_near(set, kolkata_wall(2024, 10, 31, 16, 11, 0), 60.0, "moonset");
}

#[test]
fn sunrise_moves_later_into_november() {
    let eph = AnalyticEphemeris::default();
    let r1 = eph
        .rise_or_set(kolkata_anchor(2024, 10, 31, 5), Body::Sun, RiseSetEvent::Rise, &KOLKATA)
        .unwrap()
        .unwrap();
    let r2 = eph
        .rise_or_set(kolkata_anchor(2024, 11, 1, 5), Body::Sun, RiseSetEvent::Rise, &KOLKATA)
        .unwrap()
        .unwrap();
    assert_near(r2, kolkata_wall(2024, 11, 1, 5, 41, 5), 5.0, "sunrise 11-01");
    let gap_min = (r2 - r1) * 1440.0;
    assert!((1440.0..1442.0).contains(&gap_min), "day length {gap_min} min");
}

#[test]
fn polar_night_has_no_sunrise() {
    let eph = AnalyticEphemeris::default();
    let tromso = GeoLocation::new(69.6492, 18.9553, 0.0);
    let tz = parse_timezone("Europe/Oslo").unwrap();
    let anchor = local_instant(civil_date(2024, 12, 21).unwrap(), 5, &tz).unwrap();
    let rise = eph
        .rise_or_set(anchor, Body::Sun, RiseSetEvent::Rise, &tromso)
        .unwrap();
    assert!(rise.is_none(), "no sunrise expected, got {rise:?}");
}

#[test]
fn moonset_absent_on_2024_04_15() {
    let eph = AnalyticEphemeris::default();
    let set = eph
        .rise_or_set(kolkata_anchor(2024, 4, 15, 12), Body::Moon, RiseSetEvent::Set, &KOLKATA)
        .unwrap();
    let tz = parse_timezone("Asia/Kolkata").unwrap();
    // The nearest moonset falls on another civil day.
    if let Some(t) = set {
        let date = t.to_civil(&tz).unwrap().date_naive();
        assert_ne!(date, civil_date(2024, 4, 15).unwrap());
    }
}
