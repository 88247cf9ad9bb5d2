//! Ephemeris layer for the panjika engine.
//!
//! [`EphemerisProvider`] is the only thing panchang logic knows about
//! positions: sidereal longitudes of the Sun and Moon, and their horizon
//! crossings. [`AnalyticEphemeris`] implements it from closed-form series
//! so the engine runs without external data.
//!
//! All longitudes are degrees in [0, 360). The sidereal mode is an explicit
//! argument of every longitude call.

pub mod analytic;
pub mod ayanamsha;
pub mod body;
pub mod error;
pub mod lunar;
pub mod nutation;
pub mod provider;
pub mod riseset;
pub mod riseset_types;
pub mod solar;

pub use analytic::{AnalyticEphemeris, ApparentPosition};
pub use ayanamsha::{SiderealMode, ayanamsha_deg, ayanamsha_mean_deg};
pub use body::Body;
pub use error::EphemerisError;
pub use provider::EphemerisProvider;
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent};
