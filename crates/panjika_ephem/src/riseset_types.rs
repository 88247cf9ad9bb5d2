//! Observer location and horizon parameters for rise/set searches.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Check coordinate ranges.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !(self.latitude_deg.is_finite() && (-90.0..=90.0).contains(&self.latitude_deg)) {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !(self.longitude_deg.is_finite() && (-180.0..=180.0).contains(&self.longitude_deg)) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemerisError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Direction of a horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb appears.
    Rise,
    /// Upper limb disappears.
    Set,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rise)
    }
}

/// Horizon parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip for observer altitude: `sqrt(2h/R)` radians.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        }
    }

    /// Geometric altitude of the Sun's center at sunrise/sunset, degrees.
    ///
    /// `h0 = -(refraction + semidiameter) / 60 - dip`
    pub fn sun_target_altitude_deg(&self, altitude_m: f64) -> f64 {
        -(self.refraction_arcmin + self.semidiameter_arcmin) / 60.0 - self.dip_deg(altitude_m)
    }

    /// Geocentric altitude of the Moon's center at moonrise/moonset, degrees.
    ///
    /// `h0 = 0.7275 π - refraction / 60 - dip`, folding the lunar
    /// semidiameter and parallax into the horizontal parallax `π`.
    pub fn moon_target_altitude_deg(&self, parallax_deg: f64, altitude_m: f64) -> f64 {
        0.7275 * parallax_deg - self.refraction_arcmin / 60.0 - self.dip_deg(altitude_m)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0.0..=120.0).contains(&self.refraction_arcmin) {
            return Err("refraction_arcmin must be within [0, 120]");
        }
        if !(0.0..=60.0).contains(&self.semidiameter_arcmin) {
            return Err("semidiameter_arcmin must be within [0, 60]");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sun_target() {
        let h0 = RiseSetConfig::default().sun_target_altitude_deg(0.0);
        assert!((h0 + 50.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn dip_lowers_target() {
        let cfg = RiseSetConfig::default();
        let sea = cfg.sun_target_altitude_deg(0.0);
        let hill = cfg.sun_target_altitude_deg(1000.0);
        // ~1.02° dip at 1 km
        assert!((sea - hill - 1.015).abs() < 0.01, "dip = {}", sea - hill);
    }

    #[test]
    fn dip_disabled() {
        let cfg = RiseSetConfig {
            altitude_correction: false,
            ..RiseSetConfig::default()
        };
        assert_eq!(
            cfg.sun_target_altitude_deg(0.0),
            cfg.sun_target_altitude_deg(2000.0)
        );
    }

    #[test]
    fn moon_target_is_positive_near_perigee() {
        let h0 = RiseSetConfig::default().moon_target_altitude_deg(1.0, 0.0);
        assert!((h0 - (0.7275 - 34.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn location_validation() {
        assert!(GeoLocation::new(22.5726, 88.3639, 0.0).validate().is_ok());
        assert!(GeoLocation::new(91.0, 0.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 181.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).validate().is_err());
    }
}
