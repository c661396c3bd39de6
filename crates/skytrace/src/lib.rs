//! Skytrace - Flight Recording Sample Store and Interpolation Engine
//!
//! This crate provides the in-memory sample storage and interpolation core
//! for flight recording and replay.
//!
//! # Components
//!
//! - [`SampleSeries`]: Chronologically ordered samples of one channel
//! - [`Channel`]: Interpolated queries for playback, seek and export
//! - [`Aircraft`]: The recorded channels of one aircraft
//! - [`search`]: Interval search, adaptive cursor and interpolation support
//! - [`math`]: Linear and (angular) cubic Hermite interpolation
//!
//! # Example
//!
//! ```rust
//! use skytrace::{AccessMode, Aircraft, AttitudeData, Sample};
//!
//! let mut aircraft = Aircraft::default();
//!
//! // Record in chronological order
//! for (i, heading) in [350.0, 355.0, 5.0, 10.0].into_iter().enumerate() {
//!     let sample = AttitudeData::new(i as i64 * 100, 0.0, 0.0, heading);
//!     aircraft.attitude.upsert_last(sample)?;
//! }
//!
//! // Replay: the heading crosses north the short way
//! let attitude = aircraft.attitude.interpolate(150, AccessMode::Linear);
//! assert!(!attitude.is_null());
//! assert!(attitude.true_heading > 350.0 || attitude.true_heading < 10.0);
//! # Ok::<(), skytrace::ReplayError>(())
//! ```

#![deny(missing_docs)]

pub mod aircraft;
pub mod channel;
pub mod config;
pub mod error;
pub mod math;
pub mod sample;
pub mod search;
pub mod series;

pub use aircraft::{Aircraft, AircraftInfo, TimeOffset};
pub use channel::{AccessMode, Channel};
pub use config::{ReplayConfig, Window};
pub use error::{ReplayError, Result};
pub use sample::{
    AircraftHandleData, AttitudeData, EngineData, Interpolate, LightData, LightStates,
    PositionData, PrimaryFlightControlData, Sample, SecondaryFlightControlData, Timestamp,
};
pub use series::SampleSeries;
