//! Random-variate generators driving arrivals and service durations.
//!
//! All three use inverse-transform or Box-Muller sampling on `(0,1)` uniforms
//! from [`SimRng::open01`], so a fixed seed gives a fixed sequence.

use std::f64::consts::TAU;

use crate::{Minutes, SimRng};

/// Smallest service duration any generator returns, in minutes.
pub const SERVICE_TIME_FLOOR: Minutes = 0.1;

/// Exponential draw with the given `rate` (events per minute).
///
/// `-ln(1-U)/rate`.  A non-positive or non-finite rate yields
/// `f64::INFINITY`; callers treat that as "no further arrivals".
pub fn exponential(rng: &mut SimRng, rate: f64) -> Minutes {
    if !(rate.is_finite() && rate > 0.0) {
        return f64::INFINITY;
    }
    let u = rng.open01();
    -(1.0 - u).ln() / rate
}

/// Triangular draw by inverse CDF.
///
/// Callers must guarantee `min <= mode <= max`.  A zero-width triangle
/// returns `mode`.
pub fn triangular(rng: &mut SimRng, min: f64, mode: f64, max: f64) -> f64 {
    debug_assert!(min <= mode && mode <= max, "triangular({min}, {mode}, {max})");
    let width = max - min;
    if width <= 0.0 {
        return mode;
    }
    let u = rng.open01();
    let f = (mode - min) / width;
    if u < f {
        min + (u * width * (mode - min)).sqrt()
    } else {
        max - ((1.0 - u) * width * (max - mode)).sqrt()
    }
}

/// Normal draw via the Box-Muller transform, clamped to
/// [`SERVICE_TIME_FLOOR`].
pub fn normal(rng: &mut SimRng, mean: f64, std_dev: f64) -> Minutes {
    let u1 = rng.open01();
    let u2 = rng.open01();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    (mean + z * std_dev).max(SERVICE_TIME_FLOOR)
}

/// Triangular service duration around `mean`: `(0.5·mean, mean, 1.5·mean)`
/// with the lower bound lifted to the floor for tiny means.
pub fn triangular_around(rng: &mut SimRng, mean: Minutes) -> Minutes {
    let (min, mode, max) = triangle_bounds(mean);
    triangular(rng, min, mode, max).max(SERVICE_TIME_FLOOR)
}

/// The `(min, mode, max)` triple used by [`triangular_around`].
///
/// Keeps `min <= mode <= max` even when the floor exceeds `0.5·mean`.
pub fn triangle_bounds(mean: Minutes) -> (f64, f64, f64) {
    let mode = mean.max(SERVICE_TIME_FLOOR);
    let min = (0.5 * mean).max(SERVICE_TIME_FLOOR).min(mode);
    let max = (1.5 * mean).max(mode);
    (min, mode, max)
}
