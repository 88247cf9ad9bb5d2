//! Weekday-indexed daylight segments.
//!
//! Rahu kalam, yamaganda and gulika each occupy one of eight equal parts
//! of sunrise→sunset. Segment numbers here are 0-based: segment `k`
//! covers `[sunrise + k·span/8, sunrise + (k+1)·span/8)`.
//!
//! Daylight also divides into 15 muhurtas; Abhijit is the eighth, and the
//! dushta (inauspicious) muhurtas are listed per weekday. Muhurta ranges
//! are expressed in ghatis where the daylight span is 60 ghatis.

use crate::vaar::Vaar;

/// Eighth-of-day parts.
pub const DAY_SEGMENTS: u8 = 8;

/// Muhurtas per daylight span.
pub const DAY_MUHURTAS: u8 = 15;

/// Ghatis per daylight span.
pub const GHATIS_PER_DAY: f64 = 60.0;

/// Rahu kalam segment per weekday (Sunday first).
pub const RAHU_KALAM_SEGMENT: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];

/// Yamaganda segment per weekday.
pub const YAMAGANDA_SEGMENT: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

/// Gulika kalam segment per weekday.
pub const GULIKA_SEGMENT: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Which inauspicious eighth-of-day period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    RahuKalam,
    Yamaganda,
    Gulika,
}

impl DayPeriod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKalam => "Rahu Kalam",
            Self::Yamaganda => "Yamaganda",
            Self::Gulika => "Gulika",
        }
    }

    /// 0-based eighth-of-day segment on `vaar`.
    pub const fn segment(self, vaar: Vaar) -> u8 {
        let w = vaar.index() as usize;
        match self {
            Self::RahuKalam => RAHU_KALAM_SEGMENT[w],
            Self::Yamaganda => YAMAGANDA_SEGMENT[w],
            Self::Gulika => GULIKA_SEGMENT[w],
        }
    }
}

/// Abhijit muhurta as fractions of daylight: the 8th of 15.
pub const ABHIJIT_FRACTIONS: (f64, f64) = (7.0 / 15.0, 8.0 / 15.0);

/// 1-based dushta muhurtas of the day, per weekday.
const DUSHTA_MUHURTAS: [&[u8]; 7] = [
    &[14],
    &[9, 12],
    &[4],
    &[8],
    &[6, 12],
    &[4, 9],
    &[1, 2],
];

/// Dushta muhurtas on `vaar` (1-based muhurta numbers of daylight).
pub fn dushta_muhurtas(vaar: Vaar) -> &'static [u8] {
    DUSHTA_MUHURTAS[vaar.index() as usize]
}

/// Ghati range `[start, end)` of 1-based muhurta `m` within daylight.
pub fn muhurta_ghati_range(m: u8) -> (f64, f64) {
    let per = GHATIS_PER_DAY / f64::from(DAY_MUHURTAS);
    (f64::from(m.saturating_sub(1)) * per, f64::from(m) * per)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaar::ALL_VAARS;

    #[test]
    fn segments_in_range() {
        for &vaar in &ALL_VAARS {
            for p in [DayPeriod::RahuKalam, DayPeriod::Yamaganda, DayPeriod::Gulika] {
                assert!(p.segment(vaar) < DAY_SEGMENTS);
            }
        }
    }

    #[test]
    fn three_periods_never_share_a_segment() {
        for &vaar in &ALL_VAARS {
            let r = DayPeriod::RahuKalam.segment(vaar);
            let y = DayPeriod::Yamaganda.segment(vaar);
            let g = DayPeriod::Gulika.segment(vaar);
            assert!(r != y && y != g && r != g, "{}", vaar.name());
        }
    }

    #[test]
    fn monday_rahu_is_second_eighth() {
        assert_eq!(DayPeriod::RahuKalam.segment(Vaar::Somvaar), 1);
        assert_eq!(DayPeriod::RahuKalam.segment(Vaar::Ravivaar), 7);
    }

    #[test]
    fn abhijit_is_centered() {
        let (a, b) = ABHIJIT_FRACTIONS;
        assert!(((a + b) / 2.0 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn muhurta_ghatis() {
        assert_eq!(muhurta_ghati_range(1), (0.0, 4.0));
        assert_eq!(muhurta_ghati_range(15), (56.0, 60.0));
        assert_eq!(dushta_muhurtas(Vaar::Shanivaar), &[1, 2]);
    }
}
