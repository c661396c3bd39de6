//! Interval search over ascending timestamps and the adaptive cursor policy.
//!
//! All searches return the lower index `i` of the interval `[i, i + 1]` with
//! `data[i].timestamp <= t < data[i + 1].timestamp`, or the last index if `t`
//! equals the last timestamp. `None` means "not found".

use tracing::trace;

use crate::config::BINARY_SEARCH_THRESHOLD;
use crate::sample::{Sample, Timestamp};

/// Finds the interval containing `timestamp` within `data[low..=high]` in O(log n).
///
/// Returns `None` if `data` is empty, if the bounds are invalid, or if
/// `timestamp` lies outside `[data[low].timestamp, data[high].timestamp]`.
pub fn binary_interval_search<T: Sample>(
    data: &[T],
    timestamp: Timestamp,
    low: usize,
    high: usize,
) -> Option<usize> {
    if low > high || high >= data.len() {
        return None;
    }
    if timestamp < data[low].timestamp() || timestamp > data[high].timestamp() {
        return None;
    }

    // Invariant: data[low].timestamp <= timestamp <= data[high].timestamp
    let mut low = low;
    let mut high = high;
    loop {
        let mid = low + (high - low) / 2;
        let mid_ts = data[mid].timestamp();
        if mid_ts <= timestamp && (mid == high || timestamp < data[mid + 1].timestamp()) {
            return Some(mid);
        } else if timestamp < mid_ts {
            // mid + 1 may still close the interval, so keep mid as the upper bound
            high = mid;
        } else {
            // data[mid + 1].timestamp <= timestamp: mid + 1 still opens a candidate interval
            low = mid + 1;
        }
    }
}

/// Finds the interval containing `timestamp` by scanning forward from `start`.
///
/// Returns `None` if `data` is empty, if `start` is out of bounds, or if
/// `timestamp` lies before `data[start]` or after the last sample.
pub fn linear_interval_search<T: Sample>(
    data: &[T],
    timestamp: Timestamp,
    start: usize,
) -> Option<usize> {
    let last = data.len().checked_sub(1)?;
    if start > last || timestamp < data[start].timestamp() || timestamp > data[last].timestamp() {
        return None;
    }

    let mut index = start;
    while index < last && data[index + 1].timestamp() <= timestamp {
        index += 1;
    }
    Some(index)
}

/// Updates the cursor `previous` to the last index with a timestamp <= `timestamp`.
///
/// Uses the default [`BINARY_SEARCH_THRESHOLD`]. See
/// [`update_start_index_with_threshold`] for the policy.
pub fn update_start_index<T: Sample>(
    data: &[T],
    previous: Option<usize>,
    timestamp: Timestamp,
) -> Option<usize> {
    update_start_index_with_threshold(data, previous, timestamp, BINARY_SEARCH_THRESHOLD)
}

/// Updates the cursor `previous` to the last index with a timestamp <= `timestamp`.
///
/// Playback advances in small steps, so the common case is a short linear
/// scan forward from the previous index. A binary search is used instead when
///
/// - there is no previous index (search everything),
/// - `timestamp` precedes the previous sample (rewind: search `[0, previous]`),
/// - `timestamp` lies more than `threshold` ms past the previous sample
///   (jump: search `[previous, last]`).
///
/// Timestamps at or beyond the last sample resolve to the last index without
/// any search. Returns `None` for empty data or timestamps before the first
/// sample.
pub fn update_start_index_with_threshold<T: Sample>(
    data: &[T],
    previous: Option<usize>,
    timestamp: Timestamp,
    threshold: i64,
) -> Option<usize> {
    let last = data.len().checked_sub(1)?;
    if timestamp >= data[last].timestamp() {
        return Some(last);
    }

    match previous.filter(|&index| index <= last) {
        Some(index) => {
            let previous_ts = data[index].timestamp();
            if timestamp < previous_ts {
                trace!("Cursor rewind from index {} to {}, binary search", index, timestamp);
                binary_interval_search(data, timestamp, 0, index)
            } else if timestamp.saturating_sub(previous_ts) > threshold {
                trace!("Cursor jump from index {} to {}, binary search", index, timestamp);
                binary_interval_search(data, timestamp, index, last)
            } else {
                linear_interval_search(data, timestamp, index)
            }
        }
        None => binary_interval_search(data, timestamp, 0, last),
    }
}

/// The last resolved sample index of a channel, used to accelerate the next adjacent query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: Option<usize>,
    threshold: i64,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Creates an uninitialised cursor with the default binary search threshold.
    pub const fn new() -> Self {
        Self::with_threshold(BINARY_SEARCH_THRESHOLD)
    }

    /// Creates an uninitialised cursor with a custom binary search threshold.
    pub const fn with_threshold(threshold: i64) -> Self {
        Self {
            index: None,
            threshold,
        }
    }

    /// Returns the last resolved index, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the binary search threshold in milliseconds.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Forgets the last resolved index.
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Moves the cursor to the interval containing `timestamp` and returns its index.
    pub fn seek<T: Sample>(&mut self, data: &[T], timestamp: Timestamp) -> Option<usize> {
        self.index = update_start_index_with_threshold(data, self.index, timestamp, self.threshold);
        self.index
    }
}
