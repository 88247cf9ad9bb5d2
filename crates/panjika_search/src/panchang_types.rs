//! Panchang result types.

use chrono::NaiveDate;
use chrono_tz::Tz;
use panjika_base::{
    Karana, Masa, Nakshatra, Paksha, Rashi, Ritu, Samvatsara, Tithi, Vaar, Yoga,
};
use panjika_ephem::GeoLocation;
use panjika_time::Instant;

/// A labelled span of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedInterval {
    pub label: &'static str,
    pub start: Instant,
    pub end: Instant,
}

impl NamedInterval {
    pub fn new(label: &'static str, start: Instant, end: Instant) -> Self {
        Self { label, start, end }
    }

    /// Length in days.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, t: Instant) -> bool {
        self.start <= t && t < self.end
    }
}

/// Tithi prevailing at sunrise and when it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    pub tithi: Tithi,
    pub paksha: Paksha,
    pub end: Instant,
}

/// Nakshatra prevailing at sunrise and when it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada (1-4) at sunrise.
    pub pada: u8,
    pub end: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub end: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// Slot within the synodic month (0..=59).
    pub slot: u8,
    pub end: Instant,
}

/// Lunar month containing the sunrise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaInfo {
    /// Month in the new-moon-to-new-moon convention.
    pub amanta: Masa,
    /// Month in the full-moon-to-full-moon convention.
    pub purnimanta: Masa,
    /// Intercalary month: no solar sign change between its new moons.
    pub adhika: bool,
    /// New moon that opened the month.
    pub start: Instant,
    /// New moon that closes the month.
    pub end: Instant,
}

/// Era year numbers for the request's civil year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Samvat {
    pub vikram: i32,
    pub shaka: i32,
    pub kali: i32,
    pub samvatsara: Samvatsara,
}

/// Everything computed for one civil date and place.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangRecord {
    pub date: NaiveDate,
    pub location: GeoLocation,
    pub timezone: Tz,
    pub vaar: Vaar,

    pub sunrise: Instant,
    pub sunset: Instant,
    pub next_sunrise: Option<Instant>,
    pub moonrise: Option<Instant>,
    pub moonset: Option<Instant>,

    /// Sidereal longitudes at sunrise, degrees.
    pub sun_longitude: f64,
    pub moon_longitude: f64,

    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub moon_rashi: Rashi,
    pub sun_rashi: Rashi,
    pub masa: MasaInfo,
    pub ritu: Ritu,
    pub samvat: Samvat,

    pub rahu_kalam: NamedInterval,
    pub yamaganda: NamedInterval,
    pub gulika: NamedInterval,
    pub abhijit: NamedInterval,
    pub dushta_muhurta: Vec<NamedInterval>,
    /// Day horas, then night horas when the next sunrise is known.
    pub horas: Vec<NamedInterval>,
    pub choghadiya: Vec<NamedInterval>,
}

impl PanchangRecord {
    pub fn paksha(&self) -> Paksha {
        self.tithi.paksha
    }
}
