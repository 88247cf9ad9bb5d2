//! Masa (lunar month) names and the two naming conventions.
//!
//! An amanta month runs new moon to new moon and takes its name from the
//! Sun's sidereal sign at the closing new moon: Sun in Mesha names
//! Chaitra, Vrishabha names Vaisakha, and so on. Purnimanta months run
//! full moon to full moon, so their Krishna fortnight carries the name of
//! the following amanta month.

use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Chaitra,
    Vaisakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwin,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaisakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwin,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaisakha => "Vaisakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwin => "Ashwin",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The following month, Phalguna wrapping to Chaitra.
    pub const fn next(self) -> Masa {
        ALL_MASAS[((self as u8 + 1) % 12) as usize]
    }
}

/// Amanta month named by the Sun's sign at its closing new moon.
pub fn masa_from_rashi(sun_rashi_at_new_moon: Rashi) -> Masa {
    ALL_MASAS[sun_rashi_at_new_moon.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesha_names_chaitra() {
        assert_eq!(masa_from_rashi(Rashi::Mesha), Masa::Chaitra);
    }

    #[test]
    fn tula_names_ashwin() {
        assert_eq!(masa_from_rashi(Rashi::Tula).name(), "Ashwin");
    }

    #[test]
    fn makara_names_pausha() {
        assert_eq!(masa_from_rashi(Rashi::Makara), Masa::Pausha);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Masa::Ashwin.next(), Masa::Kartika);
        assert_eq!(Masa::Phalguna.next(), Masa::Chaitra);
    }
}
