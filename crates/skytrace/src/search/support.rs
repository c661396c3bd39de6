//! Interpolation support: the samples bracketing a query timestamp.

use crate::config::Window;
use crate::sample::{Sample, Timestamp};

use super::interval::Cursor;

/// Four samples `(p0, p1, p2, p3)` supporting a cubic interpolation between `p1` and `p2`.
#[derive(Debug)]
pub struct CubicSupport<'a, T> {
    /// Predecessor of `p1`, or `p1` at the start of the series.
    pub p0: &'a T,
    /// Sample at or before the query timestamp.
    pub p1: &'a T,
    /// Successor of `p1`.
    pub p2: &'a T,
    /// Successor of `p2`, or `p2` at the end of the series.
    pub p3: &'a T,
}

// Manual impls: a derive would require `T: Clone`.
impl<T> Clone for CubicSupport<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CubicSupport<'_, T> {}

impl<'a, T> CubicSupport<'a, T> {
    /// A support made of the same sample in all four positions.
    pub fn uniform(sample: &'a T) -> Self {
        Self {
            p0: sample,
            p1: sample,
            p2: sample,
            p3: sample,
        }
    }
}

/// Two samples `(p1, p2)` bracketing the query timestamp.
#[derive(Debug)]
pub struct LinearSupport<'a, T> {
    /// Sample at or before the query timestamp.
    pub p1: &'a T,
    /// Successor of `p1`.
    pub p2: &'a T,
}

impl<T> Clone for LinearSupport<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LinearSupport<'_, T> {}

impl<'a, T> LinearSupport<'a, T> {
    /// A support made of the same sample in both positions.
    pub fn uniform(sample: &'a T) -> Self {
        Self {
            p1: sample,
            p2: sample,
        }
    }

    /// Expands to a cubic support with `p0 = p1` and `p3 = p2`.
    pub fn into_cubic(self) -> CubicSupport<'a, T> {
        CubicSupport {
            p0: self.p1,
            p1: self.p1,
            p2: self.p2,
            p3: self.p2,
        }
    }
}

/// Resolves `p1` for `timestamp`, applying the clamp and decline rules.
///
/// Returns the index of `p1`, or `Err(first)` if `timestamp` precedes the
/// first sample and the first sample is to be used in every position.
fn resolve<T: Sample>(
    data: &[T],
    timestamp: Timestamp,
    window: Window,
    cursor: &mut Cursor,
) -> Option<Result<usize, usize>> {
    if data.is_empty() {
        return None;
    }
    match cursor.seek(data, timestamp) {
        Some(index) => {
            if timestamp.saturating_sub(data[index].timestamp()) > window.millis() {
                None
            } else {
                Some(Ok(index))
            }
        }
        // Before the first sample: clamp
        None => Some(Err(0)),
    }
}

/// Returns true if `sample` lies too far ahead of `timestamp` to support it.
#[inline]
fn beyond_window<T: Sample>(sample: &T, timestamp: Timestamp, window: Window) -> bool {
    sample.timestamp().saturating_sub(timestamp) > window.millis()
}

/// Locates the four samples supporting a cubic interpolation at `timestamp`.
///
/// `p1` is the last sample at or before `timestamp`, `p0` its predecessor and
/// `p2`, `p3` its two successors; missing neighbours at either end of the
/// series are duplicated from the nearest available one.
///
/// - A `timestamp` before the first sample clamps to the first sample.
/// - A `timestamp` after the last sample clamps to the last sample, as long as
///   it lies within `window`.
/// - If `timestamp` lies more than `window` after `p1`, the interpolation is
///   declined and `None` is returned.
/// - If `p2` lies more than `window` after `timestamp`, `p2` and `p3`
///   collapse to `p1`.
///
/// Returns `None` for an empty series.
pub fn cubic_support<'a, T: Sample>(
    data: &'a [T],
    timestamp: Timestamp,
    window: Window,
    cursor: &mut Cursor,
) -> Option<CubicSupport<'a, T>> {
    let index = match resolve(data, timestamp, window, cursor)? {
        Ok(index) => index,
        Err(first) => return Some(CubicSupport::uniform(&data[first])),
    };

    let last = data.len() - 1;
    let p1 = &data[index];
    if index == last {
        return Some(CubicSupport::uniform(p1));
    }

    let p0 = if index > 0 { &data[index - 1] } else { p1 };
    let p2 = &data[index + 1];
    let p3 = data.get(index + 2).unwrap_or(p2);
    if beyond_window(p2, timestamp, window) {
        return Some(CubicSupport {
            p0,
            p1,
            p2: p1,
            p3: p1,
        });
    }
    Some(CubicSupport { p0, p1, p2, p3 })
}

/// Locates the two samples supporting a linear interpolation at `timestamp`.
///
/// The two-point analogue of [`cubic_support`], with the same clamp and
/// decline rules.
pub fn linear_support<'a, T: Sample>(
    data: &'a [T],
    timestamp: Timestamp,
    window: Window,
    cursor: &mut Cursor,
) -> Option<LinearSupport<'a, T>> {
    let index = match resolve(data, timestamp, window, cursor)? {
        Ok(index) => index,
        Err(first) => return Some(LinearSupport::uniform(&data[first])),
    };

    let p1 = &data[index];
    match data.get(index + 1) {
        Some(p2) if !beyond_window(p2, timestamp, window) => Some(LinearSupport { p1, p2 }),
        _ => Some(LinearSupport::uniform(p1)),
    }
}
