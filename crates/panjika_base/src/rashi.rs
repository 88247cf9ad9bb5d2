//! Rashi (sidereal zodiac sign), 30° each from Mesha.

use crate::util::{normalize_360, sector_index};

/// The 12 rashis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }
}

/// Rashi lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiPosition {
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
}

pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiPosition {
    let idx = sector_index(sidereal_lon_deg, 30.0, 12);
    RashiPosition {
        rashi: ALL_RASHIS[idx as usize],
        degrees_in_rashi: normalize_360(sidereal_lon_deg) - f64::from(idx) * 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        assert_eq!(rashi_from_longitude(0.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.0).rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(-1.0).rashi, Rashi::Meena);
    }

    #[test]
    fn moon_at_177_is_kanya() {
        let p = rashi_from_longitude(177.251);
        assert_eq!(p.rashi, Rashi::Kanya);
        assert!((p.degrees_in_rashi - 27.251).abs() < 1e-9);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
        assert_eq!(Rashi::from_index(6).name(), "Tula");
    }
}
