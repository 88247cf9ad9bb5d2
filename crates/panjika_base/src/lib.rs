//! Panchang classification tables.
//!
//! Pure functions from angles (or weekday indices) to named calendar
//! attributes. Nothing here touches time scales or ephemerides; the search
//! crate feeds these with sidereal longitudes read at sunrise.

pub mod choghadiya;
pub mod hora;
pub mod karana;
pub mod masa;
pub mod muhurta;
pub mod nakshatra;
pub mod rashi;
pub mod ritu;
pub mod samvat;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use choghadiya::{CHOGHADIYA_PER_DAY, Choghadiya, Quality, day_choghadiya, day_choghadiya_row};
pub use hora::{HORAS_PER_DAY, Hora, hora_lord};
pub use karana::{KARANA_SPAN, Karana, KaranaPosition, karana_from_elongation};
pub use masa::{ALL_MASAS, Masa, masa_from_rashi};
pub use muhurta::{
    ABHIJIT_FRACTIONS, DAY_SEGMENTS, DayPeriod, GHATIS_PER_DAY, dushta_muhurtas,
    muhurta_ghati_range,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPosition, nakshatra_end_longitude,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiPosition, rashi_from_longitude};
pub use ritu::{Ritu, ritu_from_sidereal_longitude};
pub use samvat::{Samvatsara, kali_samvat, samvatsara_from_year, shaka_samvat, vikram_samvat};
pub use tithi::{Paksha, TITHI_SPAN, Tithi, TithiPosition, tithi_from_elongation};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{YOGA_SPAN, Yoga, YogaPosition, yoga_from_sum};
