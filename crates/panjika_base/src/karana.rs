//! Karana: half-tithi units, 60 per synodic month.
//!
//! Slot 0 (first half of Shukla Pratipada) is Kimstughna. Slots 1..=56
//! cycle the seven movable karanas eight times. Slots 57..=59 close the
//! month with Shakuni, Chatushpada and Naga.

use crate::util::{normalize_360, sector_index};

/// Elongation span of one karana in degrees.
pub const KARANA_SPAN: f64 = 6.0;

/// The 11 karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }

    /// Karana occupying slot `slot` (0..60) of the synodic month.
    pub const fn from_slot(slot: u8) -> Karana {
        match slot % 60 {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            s => MOVABLE[((s - 1) % 7) as usize],
        }
    }

    /// Whether this karana recurs within the month.
    pub const fn is_movable(self) -> bool {
        !matches!(
            self,
            Self::Kimstughna | Self::Shakuni | Self::Chatushpada | Self::Naga
        )
    }
}

/// Karana lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// Slot within the month, 0..=59.
    pub slot: u8,
    pub degrees_in_karana: f64,
}

/// Karana from Moon−Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let slot = sector_index(elongation_deg, KARANA_SPAN, 60);
    KaranaPosition {
        karana: Karana::from_slot(slot),
        slot,
        degrees_in_karana: normalize_360(elongation_deg) - f64::from(slot) * KARANA_SPAN,
    }
}
