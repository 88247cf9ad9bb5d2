//! Era year numbers and the 60-year samvatsara cycle.

/// Vikram Samvat for a Gregorian year (before Chaitra the count is one
/// less; the civil-year offset is used as-is).
pub const fn vikram_samvat(year: i32) -> i32 {
    year + 57
}

/// Shaka Samvat.
pub const fn shaka_samvat(year: i32) -> i32 {
    year - 78
}

/// Kali Yuga year.
pub const fn kali_samvat(year: i32) -> i32 {
    year + 3101
}

/// Year whose samvatsara is Prabhava (first of the cycle).
const CYCLE_EPOCH_YEAR: i32 = 1987;

const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava", "Vibhava", "Shukla", "Pramodoota", "Prajothpatti", "Angirasa",
    "Shrimukha", "Bhava", "Yuva", "Dhaatu", "Eeshvara", "Bahudhanya",
    "Pramaathi", "Vikrama", "Vrisha", "Chitrabhanu", "Svabhanu", "Taarana",
    "Paarthiva", "Vyaya", "Sarvajit", "Sarvadhari", "Virodhi", "Vikruti",
    "Khara", "Nandana", "Vijaya", "Jaya", "Manmatha", "Durmukhi",
    "Hevilambi", "Vilambi", "Vikari", "Sharvari", "Plava", "Shubhakrut",
    "Shobhakrut", "Krodhi", "Vishvavasu", "Paraabhava", "Plavanga", "Keelaka",
    "Saumya", "Sadharana", "Virodhikrut", "Paridhavi", "Pramaadhi", "Aananda",
    "Raakshasa", "Naala", "Pingala", "Kaalayukti", "Siddharthi", "Raudri",
    "Durmathi", "Dundubhi", "Rudhirodgaari", "Raktaakshi", "Krodhana", "Akshaya",
];

/// One year of the 60-year cycle, 0-based (Prabhava = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Samvatsara(u8);

impl Samvatsara {
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based order in the cycle.
    pub const fn order(self) -> u8 {
        self.0 + 1
    }

    pub const fn name(self) -> &'static str {
        SAMVATSARA_NAMES[self.0 as usize]
    }
}

/// Samvatsara for the Vedic year starting in Gregorian `year`.
pub fn samvatsara_from_year(year: i32) -> Samvatsara {
    Samvatsara((year - CYCLE_EPOCH_YEAR).rem_euclid(60) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_offsets() {
        assert_eq!(vikram_samvat(2024), 2081);
        assert_eq!(shaka_samvat(2024), 1946);
        assert_eq!(kali_samvat(2024), 5125);
    }

    #[test]
    fn epoch_is_prabhava() {
        let s = samvatsara_from_year(1987);
        assert_eq!(s.name(), "Prabhava");
        assert_eq!(s.order(), 1);
    }

    #[test]
    fn year_2024_is_krodhi() {
        assert_eq!(samvatsara_from_year(2024).name(), "Krodhi");
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(samvatsara_from_year(2047), samvatsara_from_year(1987));
        assert_eq!(samvatsara_from_year(1986).name(), "Akshaya");
    }
}
