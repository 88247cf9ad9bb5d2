//! Low-precision solar coordinates (Meeus, *Astronomical Algorithms*, ch. 25).
//!
//! Accuracy is about 0.01° in longitude over several centuries around
//! J2000, which moves tithi and sankranti boundaries by well under a minute.

/// Annual aberration in degrees (constant approximation).
const ABERRATION_DEG: f64 = 0.005_69;

/// Geocentric solar position at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Geometric true longitude, mean equinox of date, degrees [0, 360).
    pub true_longitude_deg: f64,
    /// True longitude corrected for aberration (mean equinox of date).
    pub longitude_deg: f64,
    /// Earth-Sun distance in AU.
    pub distance_au: f64,
}

/// Solar position at `t` Julian centuries of TT since J2000.0.
pub fn solar_position(t: f64) -> SolarPosition {
    let t2 = t * t;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t2;
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let m_rad = m.to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let nu = (m + c).to_radians();
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    SolarPosition {
        true_longitude_deg: true_lon.rem_euclid(360.0),
        longitude_deg: (true_lon - ABERRATION_DEG).rem_euclid(360.0),
        distance_au,
    }
}
