//! Built-in analytic ephemeris for the Sun and Moon.

use panjika_time::Instant;
use tracing::trace;

use crate::ayanamsha::{SiderealMode, ayanamsha_deg};
use crate::body::Body;
use crate::error::EphemerisError;
use crate::lunar::{horizontal_parallax_deg, lunar_position};
use crate::nutation::{mean_obliquity_deg, nutation};
use crate::provider::EphemerisProvider;
use crate::riseset::{Equatorial, altitude_deg, ecliptic_to_equatorial, search_horizon_crossing};
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent};
use crate::solar::solar_position;

/// Apparent geocentric coordinates of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPosition {
    /// Apparent ecliptic longitude (true equinox of date), degrees.
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Equatorial coordinates on the true equator and equinox.
    pub equatorial: Equatorial,
    /// Horizontal parallax in degrees (0 for the Sun at this precision).
    pub parallax_deg: f64,
}

/// Sun and Moon from truncated Meeus series.
///
/// No data files, no I/O. Positions are good to roughly 0.01° (Sun) and
/// 0.003° (Moon) near the present era, which keeps every panchang boundary
/// within about a minute of a full-precision ephemeris.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticEphemeris {
    riseset: RiseSetConfig,
}

impl AnalyticEphemeris {
    pub fn new(riseset: RiseSetConfig) -> Self {
        Self { riseset }
    }

    /// Geometric longitude on the mean equinox of date, degrees, plus
    /// latitude. `t` is TT centuries since J2000.0.
    fn mean_ecliptic(t: f64, body: Body) -> (f64, f64) {
        match body {
            Body::Sun => (solar_position(t).longitude_deg, 0.0),
            Body::Moon => {
                let p = lunar_position(t);
                (p.longitude_deg, p.latitude_deg)
            }
        }
    }

    /// Tropical longitude on the mean equinox of date, degrees.
    pub fn tropical_longitude(&self, at: Instant, body: Body) -> f64 {
        Self::mean_ecliptic(at.centuries_tt(), body).0
    }

    /// Apparent position used for horizon geometry.
    pub fn apparent_position(&self, at: Instant, body: Body) -> ApparentPosition {
        let t = at.centuries_tt();
        let nut = nutation(t);
        let eps = mean_obliquity_deg(t) + nut.delta_eps_deg;
        let (lon, lat, parallax) = match body {
            Body::Sun => (solar_position(t).longitude_deg, 0.0, 0.0),
            Body::Moon => {
                let p = lunar_position(t);
                (
                    p.longitude_deg,
                    p.latitude_deg,
                    horizontal_parallax_deg(p.distance_km),
                )
            }
        };
        let apparent_lon = (lon + nut.delta_psi_deg).rem_euclid(360.0);
        ApparentPosition {
            longitude_deg: apparent_lon,
            latitude_deg: lat,
            equatorial: ecliptic_to_equatorial(apparent_lon, lat, eps),
            parallax_deg: parallax,
        }
    }

    /// Altitude above the body's rise/set target altitude, degrees.
    fn height_above_target(&self, at: Instant, body: Body, location: &GeoLocation) -> f64 {
        let pos = self.apparent_position(at, body);
        let h0 = match body {
            Body::Sun => self.riseset.sun_target_altitude_deg(location.altitude_m),
            Body::Moon => self
                .riseset
                .moon_target_altitude_deg(pos.parallax_deg, location.altitude_m),
        };
        altitude_deg(at.jd_ut(), pos.equatorial, location) - h0
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn sidereal_longitude(
        &self,
        at: Instant,
        body: Body,
        mode: SiderealMode,
    ) -> Result<f64, EphemerisError> {
        let t = at.centuries_tt();
        let (mean_lon, _) = Self::mean_ecliptic(t, body);
        let sidereal = if mode.uses_true_equinox() {
            let dpsi = nutation(t).delta_psi_deg;
            mean_lon + dpsi - ayanamsha_deg(mode, t, dpsi)
        } else {
            mean_lon - ayanamsha_deg(mode, t, 0.0)
        };
        let sidereal = sidereal.rem_euclid(360.0);
        if !sidereal.is_finite() {
            return Err(EphemerisError::NonFinite {
                body,
                jd_ut: at.jd_ut(),
            });
        }
        Ok(sidereal)
    }

    fn rise_or_set(
        &self,
        anchor: Instant,
        body: Body,
        event: RiseSetEvent,
        location: &GeoLocation,
    ) -> Result<Option<Instant>, EphemerisError> {
        location.validate()?;
        if !anchor.jd_ut().is_finite() {
            return Err(EphemerisError::NonFinite {
                body,
                jd_ut: anchor.jd_ut(),
            });
        }
        let found = search_horizon_crossing(anchor, event, |t| {
            self.height_above_target(t, body, location)
        });
        trace!(%body, ?event, anchor = %anchor, found = ?found.map(|t| t.jd_ut()), "horizon search");
        Ok(found)
    }
}
