//! Daylight partitions: eighth-of-day periods, Abhijit, dushta muhurta,
//! horas and choghadiya.
//!
//! Boundaries are computed from the span endpoints by index, so adjacent
//! slices share the exact same instant and the last slice ends exactly at
//! the span end.

use panjika_base::{
    ABHIJIT_FRACTIONS, CHOGHADIYA_PER_DAY, DAY_SEGMENTS, DayPeriod, GHATIS_PER_DAY,
    day_choghadiya, dushta_muhurtas, hora_lord, muhurta_ghati_range,
};
use panjika_time::Instant;

use crate::day::DayAnchor;
use crate::panchang_types::NamedInterval;

/// Boundary `k` of `[start, end]` split into `n` equal parts.
fn boundary(start: Instant, end: Instant, k: u8, n: u8) -> Instant {
    if k == 0 {
        start
    } else if k >= n {
        end
    } else {
        start.lerp(end, f64::from(k) / f64::from(n))
    }
}

/// `n` equal slices of `[start, end)`, labelled by `label(k)`.
pub fn split_span<L>(start: Instant, end: Instant, n: u8, mut label: L) -> Vec<NamedInterval>
where
    L: FnMut(u8) -> &'static str,
{
    (0..n)
        .map(|k| {
            NamedInterval::new(
                label(k),
                boundary(start, end, k, n),
                boundary(start, end, k + 1, n),
            )
        })
        .collect()
}

/// Rahu kalam, yamaganda or gulika for the day.
pub fn day_period(day: &DayAnchor, period: DayPeriod) -> NamedInterval {
    let k = period.segment(day.vaar);
    NamedInterval::new(
        period.name(),
        boundary(day.sunrise, day.sunset, k, DAY_SEGMENTS),
        boundary(day.sunrise, day.sunset, k + 1, DAY_SEGMENTS),
    )
}

/// Abhijit muhurta: the 8th of 15 daylight parts.
pub fn abhijit(day: &DayAnchor) -> NamedInterval {
    let (a, b) = ABHIJIT_FRACTIONS;
    NamedInterval::new(
        "Abhijit",
        day.sunrise.lerp(day.sunset, a),
        day.sunrise.lerp(day.sunset, b),
    )
}

/// Dushta muhurtas of the weekday, in daylight order.
pub fn dushta_muhurta(day: &DayAnchor) -> Vec<NamedInterval> {
    dushta_muhurtas(day.vaar)
        .iter()
        .map(|&m| {
            let (g0, g1) = muhurta_ghati_range(m);
            NamedInterval::new(
                "Dushta Muhurta",
                day.sunrise.lerp(day.sunset, g0 / GHATIS_PER_DAY),
                day.sunrise.lerp(day.sunset, g1 / GHATIS_PER_DAY),
            )
        })
        .collect()
}

/// Twelve day horas, followed by twelve night horas when the next sunrise
/// is known.
pub fn horas(day: &DayAnchor) -> Vec<NamedInterval> {
    let vaar = day.vaar;
    let mut out = split_span(day.sunrise, day.sunset, 12, |k| hora_lord(vaar, k).name());
    if let Some(next) = day.next_sunrise {
        out.extend(split_span(day.sunset, next, 12, |k| {
            hora_lord(vaar, 12 + k).name()
        }));
    }
    out
}

/// Eight day choghadiya slices.
pub fn choghadiya(day: &DayAnchor) -> Vec<NamedInterval> {
    let vaar = day.vaar;
    split_span(day.sunrise, day.sunset, CHOGHADIYA_PER_DAY, |k| {
        day_choghadiya(vaar, k).name()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use panjika_base::Vaar;

    fn day(vaar: Vaar) -> DayAnchor {
        let sunrise = Instant::from_jd_ut(2_460_614.7365).unwrap();
        let sunset = Instant::from_jd_ut(2_460_615.2080).unwrap();
        DayAnchor {
            date: NaiveDate::from_ymd_opt(2024, 10, 31).unwrap(),
            sunrise,
            sunset,
            next_sunrise: Some(sunrise + 1.0004),
            vaar,
        }
    }

    #[test]
    fn thursday_rahu_kalam() {
        // Thursday: sixth eighth (index 5)
        let d = day(Vaar::Guruvaar);
        let rahu = day_period(&d, DayPeriod::RahuKalam);
        let eighth = d.day_length() / 8.0;
        assert!(((rahu.start - d.sunrise) - 5.0 * eighth).abs() < 1e-8);
        assert!((rahu.duration() - eighth).abs() < 1e-8);
        assert_eq!(rahu.label, "Rahu Kalam");
    }

    #[test]
    fn sunday_rahu_ends_at_sunset() {
        let d = day(Vaar::Ravivaar);
        assert_eq!(day_period(&d, DayPeriod::RahuKalam).end, d.sunset);
    }

    #[test]
    fn abhijit_straddles_midday() {
        let d = day(Vaar::Budhvaar);
        let a = abhijit(&d);
        let mid = d.sunrise.lerp(d.sunset, 0.5);
        assert!(a.contains(mid));
        assert!((a.duration() - d.day_length() / 15.0).abs() < 1e-8);
    }

    #[test]
    fn choghadiya_tiles_daylight() {
        let d = day(Vaar::Somvaar);
        let c = choghadiya(&d);
        assert_eq!(c.len(), 8);
        assert_eq!(c[0].start, d.sunrise);
        assert_eq!(c[7].end, d.sunset);
        for w in c.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        assert_eq!(c[0].label, "Amrit");
    }

    #[test]
    fn horas_cover_sunrise_to_sunrise() {
        let d = day(Vaar::Guruvaar);
        let h = horas(&d);
        assert_eq!(h.len(), 24);
        assert_eq!(h[0].label, "Guru");
        assert_eq!(h[11].end, d.sunset);
        assert_eq!(h[12].start, d.sunset);
        assert_eq!(h[23].end, d.next_sunrise.unwrap());
    }

    #[test]
    fn horas_without_next_sunrise() {
        let mut d = day(Vaar::Guruvaar);
        d.next_sunrise = None;
        assert_eq!(horas(&d).len(), 12);
    }

    #[test]
    fn saturday_dushta_muhurta_is_first_two() {
        let d = day(Vaar::Shanivaar);
        let dm = dushta_muhurta(&d);
        assert_eq!(dm.len(), 2);
        assert_eq!(dm[0].start, d.sunrise);
        assert!((dm[1].end - d.sunrise - 2.0 * d.day_length() / 15.0).abs() < 1e-8);
    }
}
