//! Property-based tests for interval search and the cursor policy.
//!
//! Uses proptest to verify that binary search, linear search and the adaptive
//! cursor agree on the bracketing interval for arbitrary ascending series.

use proptest::prelude::*;
use skytrace::math::{hermite180, hermite360, normalise_timestamp};
use skytrace::search::{
    binary_interval_search, linear_interval_search, update_start_index,
    update_start_index_with_threshold,
};
use skytrace::PrimaryFlightControlData;

fn make_series(timestamps: &[i64]) -> Vec<PrimaryFlightControlData> {
    timestamps
        .iter()
        .map(|&ts| PrimaryFlightControlData::new(ts, 0.0, 0.0, 0.0))
        .collect()
}

/// Strategy for strictly ascending timestamps with recording-like gaps.
fn series_strategy() -> impl Strategy<Value = Vec<i64>> {
    (
        0i64..10_000,
        prop::collection::vec(1i64..5_000, 0..200), // deltas (up to 5 seconds)
    )
        .prop_map(|(base, deltas)| {
            let mut timestamps = vec![base];
            let mut current = base;
            for delta in deltas {
                current += delta;
                timestamps.push(current);
            }
            timestamps
        })
}

/// Strategy for a series together with a query timestamp within its range.
fn series_and_query() -> impl Strategy<Value = (Vec<i64>, i64)> {
    series_strategy().prop_flat_map(|timestamps| {
        let first = timestamps[0];
        let last = timestamps[timestamps.len() - 1];
        (Just(timestamps), first..=last)
    })
}

/// Returns true if `index` brackets `t` in `data`.
fn brackets(data: &[i64], index: usize, t: i64) -> bool {
    data[index] <= t && (index == data.len() - 1 || t < data[index + 1])
}

proptest! {
    /// Binary search brackets every in-range timestamp.
    #[test]
    fn test_binary_search_brackets((timestamps, t) in series_and_query()) {
        let data = make_series(&timestamps);
        let index = binary_interval_search(&data, t, 0, data.len() - 1);
        prop_assert!(index.is_some());
        prop_assert!(brackets(&timestamps, index.unwrap(), t));
    }

    /// Binary and linear search agree on every in-range timestamp.
    #[test]
    fn test_binary_and_linear_agree((timestamps, t) in series_and_query()) {
        let data = make_series(&timestamps);
        let binary = binary_interval_search(&data, t, 0, data.len() - 1);
        let linear = linear_interval_search(&data, t, 0);
        prop_assert_eq!(binary, linear);
    }

    /// Timestamps outside the series are not found.
    #[test]
    fn test_out_of_range_not_found(timestamps in series_strategy(), before in 1i64..1_000, after in 1i64..1_000) {
        let data = make_series(&timestamps);
        let first = timestamps[0];
        let last = timestamps[timestamps.len() - 1];
        prop_assert_eq!(binary_interval_search(&data, first - before, 0, data.len() - 1), None);
        prop_assert_eq!(binary_interval_search(&data, last + after, 0, data.len() - 1), None);
        prop_assert_eq!(linear_interval_search(&data, first - before, 0), None);
        prop_assert_eq!(linear_interval_search(&data, last + after, 0), None);
    }

    /// The cursor update is idempotent for any previous index.
    #[test]
    fn test_update_start_index_idempotent(
        (timestamps, t) in series_and_query(),
        previous in prop::option::of(0usize..250),
    ) {
        let data = make_series(&timestamps);
        let first = update_start_index(&data, previous, t);
        let second = update_start_index(&data, previous, t);
        prop_assert_eq!(first, second);
        prop_assert!(brackets(&timestamps, first.unwrap(), t));
    }

    /// Monotonic playback with an injected rewind always brackets the query.
    #[test]
    fn test_update_start_index_playback_and_rewind(
        timestamps in series_strategy(),
        step in 100i64..1_000,
        rewind in 0.0f64..1.0,
    ) {
        let data = make_series(&timestamps);
        let first = timestamps[0];
        let last = timestamps[timestamps.len() - 1];

        let mut index = None;
        let mut t = first;
        while t <= last {
            index = update_start_index(&data, index, t);
            prop_assert!(brackets(&timestamps, index.unwrap(), t));
            t += step;
        }

        let target = first + ((last - first) as f64 * rewind) as i64;
        index = update_start_index(&data, index, target);
        prop_assert!(brackets(&timestamps, index.unwrap(), target));
    }

    /// The result does not depend on the binary search threshold.
    #[test]
    fn test_threshold_does_not_change_result(
        (timestamps, t) in series_and_query(),
        previous in prop::option::of(0usize..250),
        threshold in 0i64..10_000,
    ) {
        let data = make_series(&timestamps);
        prop_assert_eq!(
            update_start_index_with_threshold(&data, previous, t, threshold),
            update_start_index(&data, previous, t)
        );
    }

    /// Interpolated headings never take the long way around.
    #[test]
    fn test_hermite360_short_path(start in 0.0f64..360.0, delta in -90.0f64..90.0, t in 0.0f64..=1.0) {
        let p1 = start;
        let p2 = (start + delta).rem_euclid(360.0);
        let value = hermite360(p1, p1, p2, p2, t, 0.0);
        prop_assert!((0.0..=360.0).contains(&value));

        // Angular distance from p1 never exceeds the turn itself
        let distance = (value - p1).rem_euclid(360.0);
        let distance = distance.min(360.0 - distance);
        prop_assert!(distance <= delta.abs() + 1e-9, "{} -> {} at {}: {}", p1, p2, t, value);
    }

    /// Interpolated bank angles stay within [-180, 180], up to rounding at the wrap.
    #[test]
    fn test_hermite180_in_range(
        p0 in -180.0f64..180.0,
        p1 in -180.0f64..180.0,
        p2 in -180.0f64..180.0,
        p3 in -180.0f64..180.0,
        t in 0.0f64..=1.0,
    ) {
        let value = hermite180(p0, p1, p2, p3, t, 0.0);
        prop_assert!((-180.0..=180.0).contains(&value), "got {}", value);
    }
}

#[test]
fn test_concrete_scenario() {
    let data = make_series(&[0, 10, 20, 30]);
    assert_eq!(binary_interval_search(&data, 15, 0, 3), Some(1));
    assert_eq!(linear_interval_search(&data, 15, 0), Some(1));
    assert_eq!(update_start_index(&data, None, 15), Some(1));
    assert_eq!(normalise_timestamp(&data[1], &data[2], 15), 0.5);
}

#[test]
fn test_hermite360_crosses_north() {
    let value = hermite360(350.0, 10.0, 20.0, 30.0, 0.5, 0.0);
    assert!((10.0..=20.0).contains(&value), "got {value}");

    let value = hermite360(340.0, 350.0, 10.0, 20.0, 0.5, 0.0);
    assert!(value < 10.0 || value > 350.0, "got {value}");
}
