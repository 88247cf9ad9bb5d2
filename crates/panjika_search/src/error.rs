//! Error types for panchang computation.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use panjika_ephem::EphemerisError;
use panjika_time::TimeError;
use thiserror::Error;

/// Horizon event the day resolver looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayEvent {
    Sunrise,
    Sunset,
}

impl Display for DayEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        })
    }
}

/// Quantity whose boundary the crossing solver was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
    NewMoon,
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
            Self::NewMoon => "new moon",
        })
    }
}

/// Errors from panchang computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// Sunrise or sunset could not be resolved on the civil date after all
    /// anchor retries (polar day/night, or a provider edge case).
    #[error("{event} unavailable on {date}")]
    RiseSetUnavailable { event: DayEvent, date: NaiveDate },
    /// The crossing scan exhausted its horizon without a bracket.
    #[error("no {attribute} boundary found within the search horizon")]
    CrossingNotFound { attribute: Attribute },
    #[error("ephemeris unavailable: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("time conversion failed: {0}")]
    Time(#[from] TimeError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
