//! Tithi (lunar day) and paksha (fortnight).
//!
//! A tithi spans 12° of Moon−Sun elongation; 30 make a synodic month.
//! Indices 0..14 are the waxing (Shukla) fortnight ending at Purnima,
//! 15..29 the waning (Krishna) fortnight ending at Amavasya.

use crate::util::{normalize_360, sector_index};

/// Elongation span of one tithi in degrees.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing.
    Shukla,
    /// Waning.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// Paksha of a 0-based tithi index.
    pub const fn from_tithi_index(index: u8) -> Self {
        if index < 15 { Self::Shukla } else { Self::Krishna }
    }
}

/// Names of the 15 tithis of a fortnight; index 14 differs per paksha.
const PAKSHA_TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dvitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// One of the 30 tithis, by 0-based index in the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tithi(u8);

impl Tithi {
    pub const PURNIMA: Tithi = Tithi(14);
    pub const AMAVASYA: Tithi = Tithi(29);

    /// `None` unless `index < 30`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 30 { Some(Self(index)) } else { None }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn paksha(self) -> Paksha {
        Paksha::from_tithi_index(self.0)
    }

    /// 1-based number within the fortnight (1..=15).
    pub const fn number_in_paksha(self) -> u8 {
        self.0 % 15 + 1
    }

    pub const fn name(self) -> &'static str {
        match self.0 {
            14 => "Purnima",
            29 => "Amavasya",
            i => PAKSHA_TITHI_NAMES[(i % 15) as usize],
        }
    }
}

/// Tithi lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// Elongation already elapsed within this tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

/// Tithi from Moon−Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let idx = sector_index(elongation_deg, TITHI_SPAN, 30);
    let tithi = Tithi(idx);
    TithiPosition {
        tithi,
        paksha: tithi.paksha(),
        degrees_in_tithi: normalize_360(elongation_deg) - f64::from(idx) * TITHI_SPAN,
    }
}
