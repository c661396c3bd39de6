//! Interval search, the adaptive cursor policy and interpolation support.
//!
//! A query resolves in three steps: the [`Cursor`] finds the sample at or
//! before the query timestamp (linear scan for small forward steps, binary
//! search for jumps and rewinds), the support functions collect the
//! neighbouring samples subject to the interpolation window, and
//! [`crate::sample::blend`] interpolates between them.

mod interval;
mod support;

pub use interval::{
    binary_interval_search, linear_interval_search, update_start_index,
    update_start_index_with_threshold, Cursor,
};
pub use support::{cubic_support, linear_support, CubicSupport, LinearSupport};
