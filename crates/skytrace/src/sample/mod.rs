//! Sample contract and the recorded channel sample types.
//!
//! Every recorded channel is a chronological sequence of timestamped samples.
//! A sample type describes its fields once, as a compile-time [`Field`] list,
//! and the generic [`blend`] algorithm interpolates any channel from that
//! description.

/// Timestamp in milliseconds since the start of the recording.
pub type Timestamp = i64;

/// Reserved timestamp of the null sample.
pub const NULL_TIMESTAMP: Timestamp = i64::MIN;

/// A timestamped data point within a channel.
pub trait Sample: Clone {
    /// Returns the timestamp of this sample.
    fn timestamp(&self) -> Timestamp;

    /// Sets the timestamp of this sample.
    fn set_timestamp(&mut self, timestamp: Timestamp);

    /// Returns the null sentinel of this sample type.
    fn null() -> Self;

    /// Returns true if this is the null sentinel.
    fn is_null(&self) -> bool {
        self.timestamp() == NULL_TIMESTAMP
    }
}

/// Number of samples an interpolation of a channel is supported by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportKind {
    /// Two samples `(p1, p2)` bracketing the query timestamp.
    Linear,
    /// Four samples `(p0, p1, p2, p3)`: the bracketing pair plus one neighbour on each side.
    Cubic,
}

/// A sample type that can be interpolated field by field.
pub trait Interpolate: Sample + 'static {
    /// Description of the interpolated fields.
    ///
    /// Fields not listed keep the value of the sample preceding the query timestamp.
    const FIELDS: &'static [Field<Self>];

    /// Number of samples each interpolation needs.
    const SUPPORT: SupportKind;

    /// True if the channel may be built from sparse data, e.g. imported flight plans.
    ///
    /// Sparse channels are exported with an infinite interpolation window.
    const SPARSE: bool = false;
}

/// Implements [`Sample`] and a null `Default` for a struct with a `timestamp` field and a `NULL` constant.
macro_rules! impl_sample {
    ($ty:ty) => {
        impl $crate::sample::Sample for $ty {
            #[inline]
            fn timestamp(&self) -> $crate::sample::Timestamp {
                self.timestamp
            }

            #[inline]
            fn set_timestamp(&mut self, timestamp: $crate::sample::Timestamp) {
                self.timestamp = timestamp;
            }

            #[inline]
            fn null() -> Self {
                Self::NULL
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::NULL
            }
        }
    };
}

mod attitude;
mod engine;
mod field;
mod flight_control;
mod handle;
mod light;
mod position;

pub use attitude::AttitudeData;
pub use engine::EngineData;
pub use field::{blend, Curve, Field, Pick};
pub use flight_control::{PrimaryFlightControlData, SecondaryFlightControlData};
pub use handle::AircraftHandleData;
pub use light::{LightData, LightStates};
pub use position::PositionData;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_samples() {
        assert!(PositionData::null().is_null());
        assert!(AttitudeData::null().is_null());
        assert!(EngineData::null().is_null());
        assert!(PrimaryFlightControlData::null().is_null());
        assert!(SecondaryFlightControlData::null().is_null());
        assert!(AircraftHandleData::null().is_null());
        assert!(LightData::null().is_null());
    }

    #[test]
    fn test_default_is_null() {
        assert!(PositionData::default().is_null());
        assert_eq!(LightData::default().timestamp(), NULL_TIMESTAMP);
    }

    #[test]
    fn test_set_timestamp() {
        let mut data = EngineData::null();
        data.set_timestamp(0);
        assert!(!data.is_null());
        assert_eq!(data.timestamp(), 0);
    }

    #[test]
    fn test_channel_kinds() {
        assert_eq!(PositionData::SUPPORT, SupportKind::Cubic);
        assert_eq!(AttitudeData::SUPPORT, SupportKind::Cubic);
        assert_eq!(EngineData::SUPPORT, SupportKind::Linear);
        assert!(PositionData::SPARSE);
        assert!(AttitudeData::SPARSE);
        assert!(!EngineData::SPARSE);
        assert!(!LightData::SPARSE);
    }
}
