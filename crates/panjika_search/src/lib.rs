//! Panchang engine.
//!
//! Given an [`EphemerisProvider`](panjika_ephem::EphemerisProvider), a civil
//! date, a location and a timezone, [`panchang_for_date`] resolves the local
//! solar day and derives the five limbs (tithi, vaar, nakshatra, yoga,
//! karana) with their end times, plus the lunar month, era years and the
//! daylight segments.
//!
//! The building blocks are public on their own:
//!
//! - [`next_crossing`]: forward scan + bisection for when a cyclic angle
//!   next reaches a target.
//! - [`resolve_day`]: sunrise, sunset and next sunrise on a civil date,
//!   with anchor retries.
//! - [`intervals`]: Rahu Kalam and the other sunrise/sunset partitions.

pub mod config;
pub mod crossing;
pub mod day;
pub mod error;
pub mod intervals;
pub mod panchang;
pub mod panchang_types;

pub use config::{CrossingConfig, PanchangConfig, PurnimantaRule, ResolverConfig};
pub use crossing::next_crossing;
pub use day::{DayAnchor, find_event_on_date, moon_event_on_date, resolve_day};
pub use error::{Attribute, DayEvent, PanchangError};
pub use panchang::{
    PanchangRequest, elongation_at, karana_at, masa_at, moon_longitude_at, nakshatra_at,
    next_new_moon, panchang_for_date, samvat_for, sidereal_sum_at, sun_longitude_at, tithi_at,
    yoga_at,
};
pub use panchang_types::{
    KaranaInfo, MasaInfo, NakshatraInfo, NamedInterval, PanchangRecord, Samvat, TithiInfo,
    YogaInfo,
};
