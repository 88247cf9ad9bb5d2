//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! Inputs are Julian Dates in UT. UT1−UTC (< 0.9 s) is ignored: rise/set
//! times only need second-level precision.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Sidereal rotations per solar day.
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + SIDEREAL_RATE * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let poly_arcsec =
        0.014506 + 4612.156534 * t + 1.3915817 * t2 - 0.00000044 * t3 - 0.000029956 * t4;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 52s ≈ 99.97°
        let deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((deg - 99.97).abs() < 0.1, "GMST = {deg}");
    }

    #[test]
    fn gmst_gains_about_a_degree_per_day() {
        let g1 = gmst_rad(2_451_545.0).to_degrees();
        let g2 = gmst_rad(2_451_546.0).to_degrees();
        let gain = (g2 - g1).rem_euclid(360.0);
        assert!((gain - 0.9856).abs() < 0.01, "gain = {gain}");
    }

    #[test]
    fn lst_wraps() {
        let lst = local_sidereal_time_rad(6.0, 1.0);
        assert!((0.0..TAU).contains(&lst));
    }
}
