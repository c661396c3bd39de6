//! Error and Result types for skytrace operations.

use crate::sample::Timestamp;
use thiserror::Error;

/// A convenience `Result` type for skytrace operations.
pub type Result<T> = std::result::Result<T, ReplayError>;

/// The error type for sample storage and interpolation.
///
/// None of these conditions is fatal: queries on the hot path report them
/// as the null sentinel, and only the `try_*` variants surface them as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// No samples have been recorded yet.
    #[error("Series is empty")]
    EmptySeries,

    /// Samples exist, but none is eligible under the interpolation window.
    #[error("Timestamp {timestamp} outside of window {window} ms for samples [{first}, {last}]")]
    OutOfWindow {
        /// Adjusted query timestamp.
        timestamp: Timestamp,
        /// Timestamp of the first stored sample.
        first: Timestamp,
        /// Timestamp of the last stored sample.
        last: Timestamp,
        /// Interpolation window that was applied, in milliseconds.
        window: i64,
    },

    /// A chronological insert received a sample older than the last one.
    #[error("Out of order sample: timestamp {timestamp} precedes last timestamp {last}")]
    OutOfOrder {
        /// Timestamp of the rejected sample.
        timestamp: Timestamp,
        /// Timestamp of the last stored sample.
        last: Timestamp,
    },

    /// The null sentinel cannot be stored.
    #[error("Cannot store the null sample")]
    NullSample,

    /// A bulk load contained non-ascending or duplicate timestamps.
    #[error("Unsorted samples at index {index}: timestamp {timestamp} does not follow {previous}")]
    UnsortedSamples {
        /// Index of the offending sample.
        index: usize,
        /// Timestamp of the preceding sample.
        previous: Timestamp,
        /// Timestamp of the offending sample.
        timestamp: Timestamp,
    },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
