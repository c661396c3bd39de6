//! Channel - a sample series with access-mode semantics and a result cache.
//!
//! The channel is the query entry point of replay, seek and export. It
//! applies the aircraft time offset, selects the interpolation window for the
//! access mode, interpolates and caches the result.
//!
//! # Example
//!
//! ```rust
//! use skytrace::{AccessMode, Channel, PositionData, Sample, TimeOffset};
//!
//! let mut channel = Channel::new(TimeOffset::default());
//! channel.upsert_last(PositionData::new(0, 47.0, 8.0, 1_000.0)).unwrap();
//! channel.upsert_last(PositionData::new(1_000, 47.1, 8.1, 1_100.0)).unwrap();
//!
//! let position = channel.interpolate(500, AccessMode::Linear);
//! assert!(!position.is_null());
//! assert_eq!(position.timestamp, 500);
//! ```

use crate::aircraft::TimeOffset;
use crate::config::{ReplayConfig, Window};
use crate::error::{ReplayError, Result};
use crate::math::normalise_timestamp;
use crate::sample::{blend, Interpolate, SupportKind, Timestamp};
use crate::search::{Cursor, LinearSupport};
use crate::series::SampleSeries;

/// How a query timestamp is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Ordinary playback: the time offset applies, finite window.
    Linear,
    /// Scrubbing and random access: the time offset applies, infinite window.
    Seek,
    /// Resampling for export: no time offset, per-channel window.
    Export,
}

/// One recorded channel of an aircraft.
///
/// All queries and mutations take `&mut self`: the cursor and the cache are
/// updated on every query, so a channel has a single user at a time. Wrap it
/// in a lock to share it between threads.
#[derive(Debug, Clone)]
pub struct Channel<T: Interpolate> {
    series: SampleSeries<T>,
    time_offset: TimeOffset,
    config: ReplayConfig,
    current: T,
}

impl<T: Interpolate> Channel<T> {
    /// Creates an empty channel with the default configuration.
    pub fn new(time_offset: TimeOffset) -> Self {
        Self::from_validated(time_offset, ReplayConfig::default())
    }

    /// Creates an empty channel with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::InvalidConfig` if the configuration does not
    /// pass [`ReplayConfig::validate`].
    pub fn with_config(time_offset: TimeOffset, config: ReplayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(time_offset, config))
    }

    pub(crate) fn from_validated(time_offset: TimeOffset, config: ReplayConfig) -> Self {
        let cursor = Cursor::with_threshold(config.binary_search_threshold);
        Self {
            series: SampleSeries::with_cursor(cursor),
            time_offset,
            config,
            current: T::null(),
        }
    }

    /// Returns the underlying series.
    pub fn series(&self) -> &SampleSeries<T> {
        &self.series
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Returns the time offset handle shared with the aircraft.
    pub fn time_offset(&self) -> &TimeOffset {
        &self.time_offset
    }

    /// Inserts a sample recorded in chronological order.
    ///
    /// See [`SampleSeries::upsert_last`].
    pub fn upsert_last(&mut self, sample: T) -> Result<()> {
        self.series.upsert_last(sample)
    }

    /// Inserts a sample at its chronological position.
    ///
    /// See [`SampleSeries::upsert`].
    pub fn upsert(&mut self, sample: T) -> Result<()> {
        self.series.upsert(sample)
    }

    /// Replaces all samples.
    ///
    /// See [`SampleSeries::set_samples`].
    pub fn set_samples(&mut self, samples: Vec<T>) -> Result<()> {
        self.series.set_samples(samples)
    }

    /// Returns the first sample, or the null sentinel.
    pub fn get_first(&self) -> &T {
        self.series.get_first()
    }

    /// Returns the last sample, or the null sentinel.
    pub fn get_last(&self) -> &T {
        self.series.get_last()
    }

    /// Returns the number of samples.
    pub fn count(&self) -> usize {
        self.series.count()
    }

    /// Returns true if no samples are recorded.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Removes all samples and resets the cursor.
    pub fn clear(&mut self) {
        self.series.clear();
        self.current = T::null();
    }

    /// Returns the result of the last query.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Returns the timestamp a query at `timestamp` resolves to.
    ///
    /// The time offset applies to `Linear` and `Seek` only; the result is
    /// never negative.
    pub fn adjusted_timestamp(&self, timestamp: Timestamp, mode: AccessMode) -> Timestamp {
        let timestamp = match mode {
            AccessMode::Linear | AccessMode::Seek => {
                timestamp.saturating_add(self.time_offset.get())
            }
            AccessMode::Export => timestamp,
        };
        timestamp.max(0)
    }

    /// Returns the interpolation window that applies to `mode`.
    pub fn window(&self, mode: AccessMode) -> Window {
        match mode {
            AccessMode::Linear => self.config.finite_window(),
            AccessMode::Seek => Window::Infinite,
            AccessMode::Export if T::SPARSE => Window::Infinite,
            AccessMode::Export => self.config.finite_window(),
        }
    }

    /// Interpolates the channel at `timestamp`.
    ///
    /// Returns the null sentinel if the channel is empty or no sample lies
    /// within the interpolation window; check [`crate::Sample::is_null`]
    /// before using the result. The result carries the adjusted timestamp.
    /// Repeated queries with the same timestamp and mode return the cached
    /// result without searching again.
    pub fn interpolate(&mut self, timestamp: Timestamp, mode: AccessMode) -> &T {
        let adjusted = self.adjusted_timestamp(timestamp, mode);
        if self.series.last_query() == Some((adjusted, mode)) {
            return &self.current;
        }

        let window = self.window(mode);
        let tension = self.config.tension;
        let support = match T::SUPPORT {
            SupportKind::Cubic => self.series.cubic_support(adjusted, window),
            SupportKind::Linear => self
                .series
                .linear_support(adjusted, window)
                .map(LinearSupport::into_cubic),
        };
        match support {
            Some(support) => {
                let tn = normalise_timestamp(support.p1, support.p2, adjusted);
                blend(&support, tn, tension, &mut self.current);
                self.current.set_timestamp(adjusted);
            }
            None => self.current = T::null(),
        }

        self.series.remember_query(adjusted, mode);
        &self.current
    }

    /// Interpolates the channel at `timestamp`, reporting a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::EmptySeries` if the channel has no samples, or
    /// `ReplayError::OutOfWindow` if no sample lies within the window.
    pub fn try_interpolate(&mut self, timestamp: Timestamp, mode: AccessMode) -> Result<&T> {
        if self.interpolate(timestamp, mode).is_null() {
            if self.series.is_empty() {
                return Err(ReplayError::EmptySeries);
            }
            return Err(ReplayError::OutOfWindow {
                timestamp: self.adjusted_timestamp(timestamp, mode),
                first: self.series.get_first().timestamp(),
                last: self.series.get_last().timestamp(),
                window: self.window(mode).millis(),
            });
        }
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{AttitudeData, EngineData, LightData, LightStates, PositionData, Sample};

    fn position_channel(timestamps: &[i64]) -> Channel<PositionData> {
        let mut channel = Channel::new(TimeOffset::default());
        for &ts in timestamps {
            channel
                .upsert_last(PositionData::new(ts, ts as f64 / 1_000.0, 8.0, 1_000.0))
                .unwrap();
        }
        channel
    }

    #[test]
    fn test_interpolate_empty_channel() {
        let mut channel: Channel<PositionData> = Channel::new(TimeOffset::default());
        assert!(channel.interpolate(0, AccessMode::Linear).is_null());
        assert!(channel.interpolate(0, AccessMode::Seek).is_null());
        assert_eq!(
            channel.try_interpolate(0, AccessMode::Export),
            Err(ReplayError::EmptySeries)
        );
    }

    #[test]
    fn test_interpolate_exact_samples() {
        let mut channel = position_channel(&[0, 10, 20, 30]);
        let samples = channel.series().samples().to_vec();
        for sample in &samples {
            assert_eq!(channel.interpolate(sample.timestamp, AccessMode::Seek), sample);
        }
    }

    #[test]
    fn test_interpolate_between_samples() {
        let mut channel = position_channel(&[0, 1_000, 2_000, 3_000]);
        let position = channel.interpolate(1_500, AccessMode::Linear);
        assert_eq!(position.timestamp, 1_500);
        assert!((position.latitude - 1.5).abs() < 1e-9);
        assert_eq!(position.altitude, 1_000.0);
    }

    #[test]
    fn test_interpolate_outside_window() {
        let mut channel = position_channel(&[0, 10, 20, 30]);

        assert!(!channel.interpolate(2_030, AccessMode::Linear).is_null());
        assert!(channel.interpolate(2_031, AccessMode::Linear).is_null());
        assert_eq!(
            channel.try_interpolate(2_031, AccessMode::Linear),
            Err(ReplayError::OutOfWindow {
                timestamp: 2_031,
                first: 0,
                last: 30,
                window: 2_000,
            })
        );

        // Seek never blanks
        let position = channel.interpolate(1_000_000, AccessMode::Seek);
        assert!((position.latitude - 0.030).abs() < 1e-12);
    }

    #[test]
    fn test_seek_before_first_sample_clamps() {
        let mut channel = position_channel(&[5_000, 6_000]);
        let first = *channel.get_first();
        let position = *channel.interpolate(0, AccessMode::Seek);
        assert_eq!(position.latitude, first.latitude);
        assert_eq!(position.longitude, first.longitude);
        assert_eq!(position.timestamp, 0);
    }

    #[test]
    fn test_time_offset_applies_to_playback_only() {
        let offset = TimeOffset::new(1_000);
        let mut channel = Channel::new(offset.clone());
        channel.upsert_last(PositionData::new(0, 0.0, 0.0, 0.0)).unwrap();
        channel.upsert_last(PositionData::new(2_000, 2.0, 0.0, 0.0)).unwrap();

        let linear = channel.interpolate(0, AccessMode::Linear).latitude;
        assert!((linear - 1.0).abs() < 1e-9);
        let export = channel.interpolate(0, AccessMode::Export).latitude;
        assert_eq!(export, 0.0);

        // Negative adjusted timestamps clamp to 0
        offset.set(-5_000);
        assert_eq!(channel.adjusted_timestamp(1_000, AccessMode::Seek), 0);
        assert_eq!(channel.adjusted_timestamp(-10, AccessMode::Export), 0);
    }

    #[test]
    fn test_cache_follows_time_offset() {
        let offset = TimeOffset::default();
        let mut channel = Channel::new(offset.clone());
        for ts in [0, 1_000, 2_000, 3_000] {
            channel
                .upsert_last(PositionData::new(ts, ts as f64 / 1_000.0, 0.0, 0.0))
                .unwrap();
        }

        let before = channel.interpolate(1_200, AccessMode::Linear).latitude;
        offset.set(500);
        let after = channel.interpolate(1_200, AccessMode::Linear).latitude;
        assert!((before - 1.2).abs() < 1e-9);
        assert!((after - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_cache_invalidated_by_insert() {
        let engine = |timestamp, throttle| EngineData {
            timestamp,
            throttle_lever_position: [throttle; 4],
            ..EngineData::NULL
        };
        let mut channel = Channel::new(TimeOffset::default());
        channel.upsert_last(engine(0, 0.0)).unwrap();
        channel.upsert_last(engine(1_000, 1.0)).unwrap();
        let before = channel.interpolate(1_500, AccessMode::Linear).throttle_lever_position[0];
        assert_eq!(before, 1.0);

        channel.upsert_last(engine(2_000, 2.0)).unwrap();
        let after = channel.interpolate(1_500, AccessMode::Linear).throttle_lever_position[0];
        assert!((after - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_query_is_memoized() {
        let mut channel = position_channel(&[0, 1_000, 2_000]);
        let first = *channel.interpolate(500, AccessMode::Linear);
        let cursor = *channel.series().cursor();
        let second = *channel.interpolate(500, AccessMode::Linear);
        assert_eq!(first, second);
        assert_eq!(*channel.series().cursor(), cursor);
    }

    #[test]
    fn test_export_window_per_channel() {
        let channel: Channel<AttitudeData> = Channel::new(TimeOffset::default());
        assert_eq!(channel.window(AccessMode::Export), Window::Infinite);
        let channel: Channel<EngineData> = Channel::new(TimeOffset::default());
        assert_eq!(channel.window(AccessMode::Export), Window::Finite(2_000));
        assert_eq!(channel.window(AccessMode::Seek), Window::Infinite);
        assert_eq!(channel.window(AccessMode::Linear), Window::Finite(2_000));
    }

    #[test]
    fn test_sparse_export_bridges_gaps() {
        let mut attitude = Channel::new(TimeOffset::default());
        attitude.upsert_last(AttitudeData::new(0, 0.0, 0.0, 10.0)).unwrap();
        attitude.upsert_last(AttitudeData::new(60_000, 0.0, 0.0, 20.0)).unwrap();
        assert!(!attitude.interpolate(30_000, AccessMode::Export).is_null());
        assert!(attitude.interpolate(30_000, AccessMode::Linear).is_null());

        let mut engine = Channel::new(TimeOffset::default());
        engine.upsert_last(EngineData { timestamp: 0, ..EngineData::NULL }).unwrap();
        engine.upsert_last(EngineData { timestamp: 60_000, ..EngineData::NULL }).unwrap();
        assert!(engine.interpolate(30_000, AccessMode::Export).is_null());
    }

    #[test]
    fn test_discrete_channel_holds() {
        let mut channel = Channel::new(TimeOffset::default());
        channel.upsert_last(LightData::new(0, LightStates::NAVIGATION)).unwrap();
        channel
            .upsert_last(LightData::new(1_000, LightStates::NAVIGATION | LightStates::BEACON))
            .unwrap();

        let light = channel.interpolate(999, AccessMode::Linear);
        assert_eq!(light.light_states, LightStates::NAVIGATION);
        let light = channel.interpolate(1_000, AccessMode::Linear);
        assert!(light.light_states.contains(LightStates::BEACON));
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let negative_window = ReplayConfig::default().with_interpolation_window(-1);
        let result: Result<Channel<PositionData>> =
            Channel::with_config(TimeOffset::default(), negative_window);
        assert!(matches!(result, Err(ReplayError::InvalidConfig(_))));

        let nan_tension = ReplayConfig::default().with_tension(f64::NAN);
        let result: Result<Channel<EngineData>> =
            Channel::with_config(TimeOffset::default(), nan_tension);
        assert!(result.is_err());

        let mut channel: Channel<PositionData> = Channel::with_config(
            TimeOffset::default(),
            ReplayConfig::default().with_interpolation_window(0),
        )
        .unwrap();
        channel.upsert_last(PositionData::new(0, 1.0, 0.0, 0.0)).unwrap();
        assert_eq!(channel.interpolate(0, AccessMode::Linear).latitude, 1.0);
    }

    #[test]
    fn test_huge_heading_terminates() {
        let mut channel = Channel::new(TimeOffset::default());
        channel.upsert_last(AttitudeData::new(0, 0.0, 0.0, 10.0)).unwrap();
        channel.upsert_last(AttitudeData::new(100, 0.0, 0.0, 1e20)).unwrap();
        let heading = channel.interpolate(50, AccessMode::Linear).true_heading;
        assert!((0.0..=360.0).contains(&heading), "got {heading}");

        channel.upsert_last(AttitudeData::new(200, 0.0, f64::INFINITY, 20.0)).unwrap();
        let attitude = *channel.interpolate(150, AccessMode::Linear);
        assert!(!attitude.is_null());
        assert!(attitude.bank.is_nan());
    }

    #[test]
    fn test_clear_resets_current() {
        let mut channel = position_channel(&[0, 10]);
        assert!(!channel.interpolate(5, AccessMode::Linear).is_null());
        channel.clear();
        assert!(channel.current().is_null());
        assert!(channel.interpolate(5, AccessMode::Linear).is_null());
    }
}
