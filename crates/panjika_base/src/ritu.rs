//! Ritu (season): six 60° arcs of the Sun's sidereal longitude from Mesha.

use crate::util::sector_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ritu {
    Vasanta,
    Grishma,
    Varsha,
    Sharad,
    Hemanta,
    Shishir,
}

const ALL_RITUS: [Ritu; 6] = [
    Ritu::Vasanta,
    Ritu::Grishma,
    Ritu::Varsha,
    Ritu::Sharad,
    Ritu::Hemanta,
    Ritu::Shishir,
];

impl Ritu {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasanta => "Vasanta",
            Self::Grishma => "Grishma",
            Self::Varsha => "Varsha",
            Self::Sharad => "Sharad",
            Self::Hemanta => "Hemanta",
            Self::Shishir => "Shishir",
        }
    }
}

pub fn ritu_from_sidereal_longitude(sun_sidereal_deg: f64) -> Ritu {
    ALL_RITUS[sector_index(sun_sidereal_deg, 60.0, 6) as usize]
}
