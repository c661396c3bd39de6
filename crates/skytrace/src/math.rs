//! Numeric interpolation: linear blend, cubic Hermite spline and its angular variants.
//!
//! The angular variants unwrap their control points around `p1` before
//! interpolating, so that a series like `350, 10, 20, 30` is treated as
//! `350, 370, 380, 390` and never interpolated "the long way" through 180.
//! The result is wrapped back into the domain of the variant afterwards.

use crate::sample::Sample;

/// Half of a full turn, in degrees.
const HALF_TURN: f64 = 180.0;

/// A full turn, in degrees.
const FULL_TURN: f64 = 360.0;

/// Linear interpolation between `v1` and `v2`.
///
/// `t` is the interpolation factor in [0.0, 1.0]; `t = 0` yields `v1` exactly.
#[inline]
pub fn lerp(v1: f64, v2: f64, t: f64) -> f64 {
    v1 + t * (v2 - v1)
}

/// Cubic Hermite interpolation between `p1` and `p2`, with the support values `p0` and `p3`.
///
/// The tangents at `p1` and `p2` are the averaged neighbouring differences,
/// scaled by `1 - tension`. A tension of 0 yields the Catmull-Rom curve,
/// 1 collapses the tangents (high tension) and -1 doubles them (low tension).
/// The curve passes through `p1` at `t = 0` and through `p2` at `t = 1`.
#[inline]
pub fn hermite(p0: f64, p1: f64, p2: f64, p3: f64, t: f64, tension: f64) -> f64 {
    let scale = (1.0 - tension) / 2.0;
    let m0 = ((p1 - p0) + (p2 - p1)) * scale;
    let m1 = ((p2 - p1) + (p3 - p2)) * scale;

    let t2 = t * t;
    let t3 = t2 * t;
    let a0 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let a1 = t3 - 2.0 * t2 + t;
    let a2 = t3 - t2;
    let a3 = -2.0 * t3 + 3.0 * t2;

    a0 * p1 + a1 * m0 + a2 * m1 + a3 * p2
}

/// Cubic Hermite interpolation of angles in the circular domain [-180, 180).
///
/// Used for bank and longitude, which wrap at +/-180.
pub fn hermite180(p0: f64, p1: f64, p2: f64, p3: f64, t: f64, tension: f64) -> f64 {
    let (p0, p2, p3) = unwrap_around(p0, p1, p2, p3);
    let value = hermite(p0, p1, p2, p3, t, tension);
    if value < -HALF_TURN {
        value + FULL_TURN
    } else if value >= HALF_TURN {
        value - FULL_TURN
    } else {
        value
    }
}

/// Cubic Hermite interpolation of angles in the circular domain [0, 360).
///
/// Used for headings, which wrap at 0/360.
pub fn hermite360(p0: f64, p1: f64, p2: f64, p3: f64, t: f64, tension: f64) -> f64 {
    let (p0, p2, p3) = unwrap_around(p0, p1, p2, p3);
    let value = hermite(p0, p1, p2, p3, t, tension);
    if value < 0.0 {
        value + FULL_TURN
    } else if value >= FULL_TURN {
        value - FULL_TURN
    } else {
        value
    }
}

/// Shifts `value` by whole turns so that it lies within half a turn of `reference`.
///
/// Values already within half a turn are returned unchanged. Non-finite
/// input yields NaN.
#[inline]
fn unwrap_angle(reference: f64, value: f64) -> f64 {
    let delta = value - reference;
    if (-HALF_TURN..=HALF_TURN).contains(&delta) {
        value
    } else {
        reference + (delta + HALF_TURN).rem_euclid(FULL_TURN) - HALF_TURN
    }
}

/// Unwraps `p0`, `p2` and `p3` relative to `p1` (and `p3` relative to the unwrapped `p2`).
///
/// `p1` itself stays untouched, so an interpolation at `t = 0` reproduces it bit for bit.
#[inline]
fn unwrap_around(p0: f64, p1: f64, p2: f64, p3: f64) -> (f64, f64, f64) {
    let p0 = unwrap_angle(p1, p0);
    let p2 = unwrap_angle(p1, p2);
    let p3 = unwrap_angle(p2, p3);
    (p0, p2, p3)
}

/// Returns the position of `timestamp` between `p1` and `p2`, normalised to [0.0, 1.0].
///
/// Coinciding samples denote the same instant and yield `0.0`: the result is
/// never extrapolated from a degenerate interval.
#[inline]
pub fn normalise_timestamp<T: Sample>(p1: &T, p2: &T, timestamp: i64) -> f64 {
    let t1 = p1.timestamp();
    let t2 = p2.timestamp();
    if t1 == t2 {
        0.0
    } else {
        (timestamp - t1) as f64 / (t2 - t1) as f64
    }
}
