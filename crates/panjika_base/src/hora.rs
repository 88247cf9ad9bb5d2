//! Hora (planetary hour) lords.
//!
//! The 24 horas of a Vedic day cycle through the seven classical planets in
//! descending orbital-period order. The first hora after sunrise belongs to
//! the weekday's own lord, so day `w` (Sunday = 0) starts at position
//! `3w mod 7` of the sequence: 24 horas advance the cycle by 3 each day.

use crate::vaar::Vaar;

/// Horas per Vedic day (12 day + 12 night).
pub const HORAS_PER_DAY: u8 = 24;

/// Planetary lord of a hora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hora {
    Surya,
    Shukra,
    Budha,
    Chandra,
    Shani,
    Guru,
    Mangal,
}

/// Chaldean order, starting from the Sun.
pub const HORA_SEQUENCE: [Hora; 7] = [
    Hora::Surya,
    Hora::Shukra,
    Hora::Budha,
    Hora::Chandra,
    Hora::Shani,
    Hora::Guru,
    Hora::Mangal,
];

impl Hora {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Shukra => "Shukra",
            Self::Budha => "Budha",
            Self::Chandra => "Chandra",
            Self::Shani => "Shani",
            Self::Guru => "Guru",
            Self::Mangal => "Mangal",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Shukra => "Venus",
            Self::Budha => "Mercury",
            Self::Chandra => "Moon",
            Self::Shani => "Saturn",
            Self::Guru => "Jupiter",
            Self::Mangal => "Mars",
        }
    }
}

/// Position of the weekday's lord in [`HORA_SEQUENCE`].
pub(crate) const fn day_lord_position(vaar: Vaar) -> usize {
    (3 * vaar.index() as usize) % 7
}

/// Lord of hora `hora_index` (0 = first hora after sunrise) on `vaar`.
pub fn hora_lord(vaar: Vaar, hora_index: u8) -> Hora {
    HORA_SEQUENCE[(day_lord_position(vaar) + hora_index as usize) % 7]
}
