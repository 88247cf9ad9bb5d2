//! Yoga: 27 equal divisions of the sidereal Sun+Moon longitude sum.

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::{normalize_360, sector_index};

/// Yoga span equals the nakshatra span.
pub const YOGA_SPAN: f64 = NAKSHATRA_SPAN;

const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shoola",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// One of the 27 yogas, by 0-based index (Vishkambha = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Yoga(u8);

impl Yoga {
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 27 { Some(Self(index)) } else { None }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        YOGA_NAMES[self.0 as usize]
    }
}

/// Yoga lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    pub yoga: Yoga,
    pub degrees_in_yoga: f64,
}

/// Yoga from `(Sun + Moon) mod 360` in degrees.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let idx = sector_index(sum_deg, YOGA_SPAN, 27);
    YogaPosition {
        yoga: Yoga(idx),
        degrees_in_yoga: normalize_360(sum_deg) - f64::from(idx) * YOGA_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(yoga_from_sum(0.0).yoga.name(), "Vishkambha");
        assert_eq!(yoga_from_sum(359.9).yoga.name(), "Vaidhriti");
    }

    #[test]
    fn sum_wraps() {
        // 193.869 + 177.251 = 371.12 → 11.12
        let p = yoga_from_sum(371.12);
        assert_eq!(p.yoga.index(), 0);
        assert!((p.degrees_in_yoga - 11.12).abs() < 1e-9);
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Yoga::from_index(26).map(Yoga::name), Some("Vaidhriti"));
        assert!(Yoga::from_index(27).is_none());
    }
}
