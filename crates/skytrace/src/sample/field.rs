//! Compile-time field descriptions and the generic field-wise interpolation.

use std::fmt;

use crate::math;
use crate::sample::Interpolate;
use crate::search::CubicSupport;

/// Interpolation curve of a continuous field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// Linear blend between `p1` and `p2`.
    Linear,
    /// Cubic Hermite spline over an open range.
    Hermite,
    /// Cubic Hermite spline over the circular domain [-180, 180).
    Hermite180,
    /// Cubic Hermite spline over the circular domain [0, 360).
    Hermite360,
}

/// Selection rule of a discrete field (switches, flags, detents).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Keep the value of `p1`, the sample at or before the query timestamp.
    Hold,
    /// Take the value of whichever of `p1` and `p2` is closer in time.
    Nearest,
}

/// Description of one interpolated field of a sample type `T`.
pub enum Field<T> {
    /// A continuous `f64` value.
    Continuous {
        /// Field name, for diagnostics.
        name: &'static str,
        /// Interpolation curve.
        curve: Curve,
        /// Reads the field.
        get: fn(&T) -> f64,
        /// Writes the field.
        set: fn(&mut T, f64),
    },
    /// A discrete value that is copied, never blended.
    Discrete {
        /// Field name, for diagnostics.
        name: &'static str,
        /// Selection rule.
        pick: Pick,
        /// Copies the field from the second argument into the first.
        copy: fn(&mut T, &T),
    },
}

impl<T> Field<T> {
    /// A linearly interpolated field.
    pub const fn linear(name: &'static str, get: fn(&T) -> f64, set: fn(&mut T, f64)) -> Self {
        Field::Continuous {
            name,
            curve: Curve::Linear,
            get,
            set,
        }
    }

    /// A field interpolated with a cubic Hermite spline.
    pub const fn hermite(name: &'static str, get: fn(&T) -> f64, set: fn(&mut T, f64)) -> Self {
        Field::Continuous {
            name,
            curve: Curve::Hermite,
            get,
            set,
        }
    }

    /// An angle in [-180, 180) interpolated with a cubic Hermite spline.
    pub const fn hermite180(name: &'static str, get: fn(&T) -> f64, set: fn(&mut T, f64)) -> Self {
        Field::Continuous {
            name,
            curve: Curve::Hermite180,
            get,
            set,
        }
    }

    /// An angle in [0, 360) interpolated with a cubic Hermite spline.
    pub const fn hermite360(name: &'static str, get: fn(&T) -> f64, set: fn(&mut T, f64)) -> Self {
        Field::Continuous {
            name,
            curve: Curve::Hermite360,
            get,
            set,
        }
    }

    /// A discrete field holding the value of `p1`.
    pub const fn hold(name: &'static str, copy: fn(&mut T, &T)) -> Self {
        Field::Discrete {
            name,
            pick: Pick::Hold,
            copy,
        }
    }

    /// A discrete field taking the value of the nearest sample.
    pub const fn nearest(name: &'static str, copy: fn(&mut T, &T)) -> Self {
        Field::Discrete {
            name,
            pick: Pick::Nearest,
            copy,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Continuous { name, .. } | Field::Discrete { name, .. } => name,
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Continuous { name, curve, .. } => f
                .debug_struct("Continuous")
                .field("name", name)
                .field("curve", curve)
                .finish(),
            Field::Discrete { name, pick, .. } => f
                .debug_struct("Discrete")
                .field("name", name)
                .field("pick", pick)
                .finish(),
        }
    }
}

/// Interpolates every field of `T` at the normalised position `tn` between `p1` and `p2`.
///
/// `out` starts as a copy of `p1`; each described field is then overwritten.
/// Linear fields only read `p1` and `p2`, so a linear support expanded to four
/// points (`p0 = p1`, `p3 = p2`) serves them equally well. The timestamp is
/// left to the caller.
pub fn blend<T: Interpolate>(support: &CubicSupport<'_, T>, tn: f64, tension: f64, out: &mut T) {
    let CubicSupport { p0, p1, p2, p3 } = *support;
    out.clone_from(p1);

    for field in T::FIELDS {
        match field {
            Field::Continuous { curve, get, set, .. } => {
                let (y0, y1, y2, y3) = (get(p0), get(p1), get(p2), get(p3));
                let value = match curve {
                    Curve::Linear => math::lerp(y1, y2, tn),
                    Curve::Hermite => math::hermite(y0, y1, y2, y3, tn, tension),
                    Curve::Hermite180 => math::hermite180(y0, y1, y2, y3, tn, tension),
                    Curve::Hermite360 => math::hermite360(y0, y1, y2, y3, tn, tension),
                };
                set(&mut *out, value);
            }
            Field::Discrete { pick, copy, .. } => {
                if *pick == Pick::Nearest && tn >= 0.5 {
                    copy(&mut *out, p2);
                }
            }
        }
    }
}
