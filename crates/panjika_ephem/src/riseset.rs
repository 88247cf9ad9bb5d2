//! Horizon geometry and the rise/set search.
//!
//! The search samples `altitude - h0` on a fixed grid around an anchor
//! instant and bisects every sign change in the wanted direction. The
//! crossing nearest the anchor wins. Grid sampling copes with the Moon,
//! whose declination changes too fast for hour-angle iteration near the
//! poles, and reports "no event" naturally when the body never reaches
//! the horizon inside the window.

use panjika_time::{Instant, gmst_rad, local_sidereal_time_rad};

use crate::riseset_types::{GeoLocation, RiseSetEvent};

/// Half-width of the search window around the anchor, days.
pub const SEARCH_HALF_WINDOW_DAYS: f64 = 0.5;

/// Grid step, days (10 minutes).
const SCAN_STEP_DAYS: f64 = 10.0 / 1440.0;

/// Grid cells per window.
const SCAN_STEPS: usize = 144;

/// Bisection halvings per bracket (10 min / 2^30 ≈ 0.6 µs).
const BISECTION_ITERATIONS: usize = 30;

/// Equatorial coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    pub ra_rad: f64,
    pub dec_rad: f64,
}

/// Ecliptic longitude/latitude (degrees) to equatorial, given obliquity.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> Equatorial {
    let l = lon_deg.to_radians();
    let b = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let ra = (l.sin() * eps.cos() - b.tan() * eps.sin()).atan2(l.cos());
    let dec = (b.sin() * eps.cos() + b.cos() * eps.sin() * l.sin()).asin();
    Equatorial {
        ra_rad: ra.rem_euclid(std::f64::consts::TAU),
        dec_rad: dec,
    }
}

/// Geocentric altitude in degrees of a body at `jd_ut` for an observer.
pub fn altitude_deg(jd_ut: f64, eq: Equatorial, location: &GeoLocation) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_ut), location.longitude_rad());
    let hour_angle = lst - eq.ra_rad;
    let phi = location.latitude_rad();
    let sin_h = phi.sin() * eq.dec_rad.sin() + phi.cos() * eq.dec_rad.cos() * hour_angle.cos();
    sin_h.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Find the `event` crossing nearest `anchor` within ±12 hours.
///
/// `height` returns the body's altitude minus the target altitude; rising
/// is a change from negative to non-negative.
pub fn search_horizon_crossing<F>(anchor: Instant, event: RiseSetEvent, mut height: F) -> Option<Instant>
where
    F: FnMut(Instant) -> f64,
{
    let rising = event.is_rising();
    let start = anchor - SEARCH_HALF_WINDOW_DAYS;
    let mut best: Option<Instant> = None;

    let mut t_prev = start;
    let mut h_prev = height(t_prev);
    for k in 1..=SCAN_STEPS {
        let t_cur = start + k as f64 * SCAN_STEP_DAYS;
        let h_cur = height(t_cur);

        let bracketed = if rising {
            h_prev < 0.0 && h_cur >= 0.0
        } else {
            h_prev >= 0.0 && h_cur < 0.0
        };
        if bracketed {
            let root = bisect(t_prev, t_cur, rising, &mut height);
            let closer = best.is_none_or(|b| (root - anchor).abs() < (b - anchor).abs());
            if closer {
                best = Some(root);
            }
        }

        t_prev = t_cur;
        h_prev = h_cur;
    }
    best
}

fn bisect<F>(mut a: Instant, mut b: Instant, rising: bool, height: &mut F) -> Instant
where
    F: FnMut(Instant) -> f64,
{
    for _ in 0..BISECTION_ITERATIONS {
        let mid = a.lerp(b, 0.5);
        // Keep `a` on the pre-event side.
        if (height(mid) < 0.0) == rising {
            a = mid;
        } else {
            b = mid;
        }
    }
    a.lerp(b, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(jd: f64) -> Instant {
        Instant::from_jd_ut(jd).unwrap()
    }

    #[test]
    fn sinusoid_rise_and_set() {
        // Height = sin(2π (t - t0)), rises at t0 and sets half a day later.
        let t0 = 2_460_000.3;
        let h = |t: Instant| (std::f64::consts::TAU * (t.jd_ut() - t0)).sin();
        let rise = search_horizon_crossing(at(t0 + 0.1), RiseSetEvent::Rise, h).unwrap();
        assert!((rise.jd_ut() - t0).abs() < 1e-6, "rise = {}", rise.jd_ut());
        let set = search_horizon_crossing(at(t0 + 0.4), RiseSetEvent::Set, h).unwrap();
        assert!((set.jd_ut() - (t0 + 0.5)).abs() < 1e-6, "set = {}", set.jd_ut());
    }

    #[test]
    fn picks_crossing_nearest_anchor() {
        // Rises at 0.0, 0.25, 0.5, 0.75 (period 0.25 days).
        let h = |t: Instant| (std::f64::consts::TAU * t.jd_ut() * 4.0).sin();
        let rise = search_horizon_crossing(at(100.27), RiseSetEvent::Rise, h).unwrap();
        assert!((rise.jd_ut() - 100.25).abs() < 1e-6, "rise = {}", rise.jd_ut());
    }

    #[test]
    fn never_crossing_is_none() {
        let below = |_: Instant| -5.0;
        assert!(search_horizon_crossing(at(10.0), RiseSetEvent::Rise, below).is_none());
        let above = |_: Instant| 5.0;
        assert!(search_horizon_crossing(at(10.0), RiseSetEvent::Set, above).is_none());
    }

    #[test]
    fn equator_conversion_at_equinox() {
        let eq = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(eq.ra_rad.abs() < 1e-12 && eq.dec_rad.abs() < 1e-12);
        let solstice = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((solstice.dec_rad.to_degrees() - 23.44).abs() < 1e-9);
        assert!((solstice.ra_rad.to_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn pole_star_altitude_equals_latitude() {
        let pole = Equatorial {
            ra_rad: 0.0,
            dec_rad: std::f64::consts::FRAC_PI_2,
        };
        let loc = GeoLocation::new(40.0, -75.0, 0.0);
        assert!((altitude_deg(2_460_000.0, pole, &loc) - 40.0).abs() < 1e-9);
    }
}
