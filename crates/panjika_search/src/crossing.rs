//! Cyclic crossing solver.
//!
//! Finds the first instant after `t0` at which a continuous, increasing,
//! 360°-periodic function reaches a target angle. With
//! `g(t) = (f(t) - target) mod 360`, the function approaches the target
//! from just under 360° and drops to just over 0° when it passes it.
//! A forward scan brackets that drop (`g_prev > upper`, `g_cur < lower`);
//! bisection then shrinks the bracket, keeping the half where `g` is
//! still on the "before" side (`g >= 180`).
//!
//! The bracket thresholds reject the ordinary wrap of the *function
//! itself* (which only affects `f`, not `g`), and a start exactly on the
//! target (`g(t0) = 0`) is not a bracket, so the search moves on to the
//! next crossing rather than returning `t0`.

use panjika_base::normalize_360;
use panjika_time::Instant;
use tracing::{debug, trace, warn};

use crate::config::CrossingConfig;

/// Angular distance of `g` (in [0, 360)) from 0°.
fn residual_deg(g: f64) -> f64 {
    g.min(360.0 - g)
}

/// First instant after `t0` where `f` reaches `target_deg`.
///
/// Returns `Ok(None)` when the scan horizon is exhausted without a bracket.
/// Errors from `f` abort the search.
pub fn next_crossing<F, E>(
    f: F,
    t0: Instant,
    target_deg: f64,
    config: &CrossingConfig,
) -> Result<Option<Instant>, E>
where
    F: Fn(Instant) -> Result<f64, E>,
{
    let target = normalize_360(target_deg);
    let g = |t: Instant| -> Result<f64, E> { Ok(normalize_360(f(t)? - target)) };

    let max_steps = config.max_steps();
    let mut t_prev = t0;
    let mut g_prev = g(t_prev)?;

    for k in 1..=max_steps {
        let t_cur = t0 + k as f64 * config.step_days;
        let g_cur = g(t_cur)?;

        if g_prev > config.upper_threshold_deg && g_cur < config.lower_threshold_deg {
            debug!(target_deg = target, step = k, g_prev, g_cur, "bracketed crossing");
            let (root, g_root) = bisect(&g, t_prev, t_cur, config.max_iterations)?;
            if residual_deg(g_root) <= config.tolerance_deg {
                trace!(target_deg = target, root = %root, g_root, "crossing refined");
                return Ok(Some(root));
            }
            // A jump, not a continuous pass through the target.
            warn!(target_deg = target, g_root, "bracket did not converge, continuing scan");
        }

        t_prev = t_cur;
        g_prev = g_cur;
    }

    debug!(target_deg = target, max_steps, "no crossing within horizon");
    Ok(None)
}

fn bisect<G, E>(g: &G, mut a: Instant, mut b: Instant, iterations: u32) -> Result<(Instant, f64), E>
where
    G: Fn(Instant) -> Result<f64, E>,
{
    for _ in 0..iterations {
        let mid = a.lerp(b, 0.5);
        if g(mid)? >= 180.0 {
            a = mid;
        } else {
            b = mid;
        }
    }
    let root = a.lerp(b, 0.5);
    Ok((root, g(root)?))
}
