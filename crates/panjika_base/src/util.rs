//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-18 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Index of the equal-width sector containing `deg`, clamped to `count - 1`.
pub(crate) fn sector_index(deg: f64, span: f64, count: u8) -> u8 {
    let idx = (normalize_360(deg) / span).floor();
    if idx < 0.0 { 0 } else { (idx as u8).min(count - 1) }
}
