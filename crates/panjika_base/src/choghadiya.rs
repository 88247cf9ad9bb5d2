//! Day choghadiya: eight equal parts of daylight, each ruled by a planet
//! and named for its quality.
//!
//! Each weekday row starts with the weekday lord's choghadiya and follows
//! the hora sequence; the eighth part repeats the first.

use crate::hora::{HORA_SEQUENCE, Hora, day_lord_position};
use crate::vaar::Vaar;

/// Choghadiya parts per daylight span.
pub const CHOGHADIYA_PER_DAY: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choghadiya {
    Udveg,
    Chal,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

/// Broad auspiciousness of a choghadiya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Good,
    Neutral,
    Bad,
}

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Bad => "Bad",
        }
    }
}

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Chal => "Chal",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
        }
    }

    pub const fn from_lord(lord: Hora) -> Choghadiya {
        match lord {
            Hora::Surya => Self::Udveg,
            Hora::Shukra => Self::Chal,
            Hora::Budha => Self::Labh,
            Hora::Chandra => Self::Amrit,
            Hora::Shani => Self::Kaal,
            Hora::Guru => Self::Shubh,
            Hora::Mangal => Self::Rog,
        }
    }

    pub const fn quality(self) -> Quality {
        match self {
            Self::Amrit | Self::Shubh | Self::Labh => Quality::Good,
            Self::Chal => Quality::Neutral,
            Self::Udveg | Self::Kaal | Self::Rog => Quality::Bad,
        }
    }
}

/// Day choghadiya for part `part` (0..8) of daylight on `vaar`.
pub fn day_choghadiya(vaar: Vaar, part: u8) -> Choghadiya {
    let lord = HORA_SEQUENCE[(day_lord_position(vaar) + part as usize % 7) % 7];
    Choghadiya::from_lord(lord)
}

/// The full 8-part day row for `vaar`.
pub fn day_choghadiya_row(vaar: Vaar) -> [Choghadiya; 8] {
    std::array::from_fn(|k| day_choghadiya(vaar, k as u8))
}
