//! Aircraft - the recorded channels of one aircraft and its metadata.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::channel::Channel;
use crate::config::ReplayConfig;
use crate::error::Result;
use crate::sample::{
    AircraftHandleData, AttitudeData, EngineData, Interpolate, LightData, PositionData,
    PrimaryFlightControlData, SecondaryFlightControlData, Timestamp,
};

/// Time offset of an aircraft in milliseconds, shared with its channels.
///
/// Positive values delay the aircraft during replay, negative values advance
/// it. Cloning yields a handle to the same offset.
#[derive(Debug, Clone, Default)]
pub struct TimeOffset(Arc<AtomicI64>);

impl TimeOffset {
    /// Creates a new offset.
    pub fn new(offset: i64) -> Self {
        Self(Arc::new(AtomicI64::new(offset)))
    }

    /// Gets the current offset.
    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Sets the offset.
    pub fn set(&self, offset: i64) {
        self.0.store(offset, Ordering::Relaxed);
    }

    /// Adds `delta` to the offset, saturating at the bounds of `i64`.
    pub fn add(&self, delta: i64) {
        let _ = self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |offset| {
                Some(offset.saturating_add(delta))
            });
    }
}

/// Aircraft metadata.
#[derive(Debug, Clone, Default)]
pub struct AircraftInfo {
    /// Identifier assigned by the persistence layer, if stored.
    pub id: Option<i64>,
    /// Tail number (registration).
    pub tail_number: String,
    /// Time offset applied to replay.
    pub time_offset: TimeOffset,
}

/// An aircraft with its recorded channels.
#[derive(Debug, Clone)]
pub struct Aircraft {
    info: AircraftInfo,
    /// Position channel.
    pub position: Channel<PositionData>,
    /// Attitude channel.
    pub attitude: Channel<AttitudeData>,
    /// Engine channel.
    pub engine: Channel<EngineData>,
    /// Primary flight controls channel.
    pub primary_flight_control: Channel<PrimaryFlightControlData>,
    /// Secondary flight controls channel.
    pub secondary_flight_control: Channel<SecondaryFlightControlData>,
    /// Handles and levers channel.
    pub aircraft_handle: Channel<AircraftHandleData>,
    /// Lights channel.
    pub light: Channel<LightData>,
}

impl Default for Aircraft {
    fn default() -> Self {
        Self::new(AircraftInfo::default())
    }
}

impl Aircraft {
    /// Creates an aircraft without recorded data.
    pub fn new(info: AircraftInfo) -> Self {
        Self::from_validated(info, ReplayConfig::default())
    }

    /// Creates an aircraft whose channels share the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::InvalidConfig` if the configuration does not
    /// pass [`ReplayConfig::validate`].
    pub fn with_config(info: AircraftInfo, config: ReplayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(info, config))
    }

    fn from_validated(info: AircraftInfo, config: ReplayConfig) -> Self {
        let offset = info.time_offset.clone();
        Self {
            position: Channel::from_validated(offset.clone(), config.clone()),
            attitude: Channel::from_validated(offset.clone(), config.clone()),
            engine: Channel::from_validated(offset.clone(), config.clone()),
            primary_flight_control: Channel::from_validated(offset.clone(), config.clone()),
            secondary_flight_control: Channel::from_validated(offset.clone(), config.clone()),
            aircraft_handle: Channel::from_validated(offset.clone(), config.clone()),
            light: Channel::from_validated(offset, config),
            info,
        }
    }

    /// Returns the aircraft metadata.
    pub fn info(&self) -> &AircraftInfo {
        &self.info
    }

    /// Returns the time offset in milliseconds.
    pub fn time_offset(&self) -> i64 {
        self.info.time_offset.get()
    }

    /// Sets the time offset in milliseconds.
    pub fn set_time_offset(&self, offset: i64) {
        debug!("Set time offset of {} to {} ms", self.info.tail_number, offset);
        self.info.time_offset.set(offset);
    }

    /// Adds `delta` milliseconds to the time offset.
    pub fn add_time_offset(&self, delta: i64) {
        debug!("Shift time offset of {} by {} ms", self.info.tail_number, delta);
        self.info.time_offset.add(delta);
    }

    /// Returns true if a position has been recorded.
    pub fn has_recording(&self) -> bool {
        !self.position.is_empty()
    }

    /// Returns the replay duration of the aircraft in milliseconds.
    ///
    /// The duration is the latest last-sample timestamp over all channels,
    /// corrected by the time offset and floored at 0. Returns 0 if nothing
    /// has been recorded.
    pub fn duration_msec(&self) -> Timestamp {
        let offset = self.time_offset();
        [
            last_timestamp(&self.position),
            last_timestamp(&self.attitude),
            last_timestamp(&self.engine),
            last_timestamp(&self.primary_flight_control),
            last_timestamp(&self.secondary_flight_control),
            last_timestamp(&self.aircraft_handle),
            last_timestamp(&self.light),
        ]
        .into_iter()
        .flatten()
        .map(|timestamp| timestamp.saturating_sub(offset).max(0))
        .max()
        .unwrap_or(0)
    }

    /// Removes the recorded data of all channels.
    pub fn clear(&mut self) {
        debug!("Clearing recording of {}", self.info.tail_number);
        self.position.clear();
        self.attitude.clear();
        self.engine.clear();
        self.primary_flight_control.clear();
        self.secondary_flight_control.clear();
        self.aircraft_handle.clear();
        self.light.clear();
    }
}

fn last_timestamp<T: Interpolate>(channel: &Channel<T>) -> Option<Timestamp> {
    if channel.is_empty() {
        None
    } else {
        Some(channel.get_last().timestamp())
    }
}
