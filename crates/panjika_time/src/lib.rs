//! Time scales for the panjika engine.
//!
//! Every astronomical computation downstream works on [`Instant`], a
//! Julian Date in UT. This crate owns the adapters at the edges:
//! - civil timestamps in IANA timezones ⇄ `Instant` (`civil`, `instant`)
//! - UT → TT through ΔT for the ephemeris series (`delta_t`)
//! - Julian calendar arithmetic (`julian`)
//! - Greenwich/local mean sidereal time for horizon geometry (`sidereal`)

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use civil::{civil_date, date_in, local_datetime_instant, local_instant, parse_timezone};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
