//! Nutation and obliquity (Meeus, *Astronomical Algorithms*, ch. 22).
//!
//! The four-term nutation series is good to about 0.5" in longitude,
//! far below what day-level panchang boundaries need.

/// Nutation in longitude and obliquity, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub delta_psi_deg: f64,
    pub delta_eps_deg: f64,
}

/// Nutation at `t` Julian centuries of TT since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        delta_psi_deg: dpsi / 3600.0,
        delta_eps_deg: deps / 3600.0,
    }
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980, Meeus 22.2).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity (mean + Δε) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).delta_eps_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 22.a: 1987 April 10, 0h TD.
    const T_22A: f64 = (2_446_895.5 - 2_451_545.0) / 36_525.0;

    #[test]
    fn meeus_22a_nutation() {
        let n = nutation(T_22A);
        let dpsi = n.delta_psi_deg * 3600.0;
        let deps = n.delta_eps_deg * 3600.0;
        assert!((dpsi - (-3.788)).abs() < 0.5, "Δψ = {dpsi}\"");
        assert!((deps - 9.443).abs() < 0.1, "Δε = {deps}\"");
    }

    #[test]
    fn meeus_22a_obliquity() {
        // 23°26'27.407"
        let eps0 = mean_obliquity_deg(T_22A);
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((eps0 - expected).abs() < 1e-5, "ε0 = {eps0}");
    }

    #[test]
    fn true_obliquity_adds_nutation() {
        let t = 0.25;
        let diff = true_obliquity_deg(t) - mean_obliquity_deg(t);
        assert!((diff - nutation(t).delta_eps_deg).abs() < 1e-15);
    }
}
