//! ΔT = TT − UT, the drift of Earth rotation time against uniform time.
//!
//! Piecewise polynomial model of Espenak & Meeus (NASA Five Millennium
//! Canon). Accurate to a few seconds for the modern era, which is far below
//! the precision that matters for calendar boundaries.

use crate::julian::{SECONDS_PER_DAY, jd_to_decimal_year};

/// ΔT in seconds for a decimal Gregorian year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < -500.0 || y >= 2150.0 {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 500.0 {
        let u = y / 100.0;
        return poly(u, &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521]);
    }
    if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        return poly(u, &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073]);
    }
    if y < 1700.0 {
        let t = y - 1600.0;
        return poly(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]);
    }
    if y < 1800.0 {
        let t = y - 1700.0;
        return poly(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0]);
    }
    if y < 1860.0 {
        let t = y - 1800.0;
        return poly(
            t,
            &[13.72, -0.332447, 0.0068612, 0.0041116, -0.00037436, 0.0000121272, -0.0000001699, 0.000000000875],
        );
    }
    if y < 1900.0 {
        let t = y - 1860.0;
        return poly(t, &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0]);
    }
    if y < 1920.0 {
        let t = y - 1900.0;
        return poly(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197]);
    }
    if y < 1941.0 {
        let t = y - 1920.0;
        return poly(t, &[21.20, 0.84493, -0.076100, 0.0020936]);
    }
    if y < 1961.0 {
        let t = y - 1950.0;
        return poly(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]);
    }
    if y < 1986.0 {
        let t = y - 1975.0;
        return poly(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]);
    }
    if y < 2005.0 {
        let t = y - 2000.0;
        return poly(t, &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599]);
    }
    if y < 2050.0 {
        let t = y - 2000.0;
        return poly(t, &[62.92, 0.32217, 0.005589]);
    }
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
}

/// Convert a Julian Date in UT to a Julian Date in TT.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_to_decimal_year(jd_ut)) / SECONDS_PER_DAY
}

/// Horner evaluation, coefficients in ascending order.
fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
