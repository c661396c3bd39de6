//! Aircraft position samples.

use crate::sample::{Field, Interpolate, SupportKind, NULL_TIMESTAMP};

/// Recorded aircraft position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionData {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    /// Latitude in degrees [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees [-180, 180), discontinuous at the antimeridian.
    pub longitude: f64,
    /// True altitude in feet.
    pub altitude: f64,
    /// Indicated altitude in feet (display and analysis only).
    pub indicated_altitude: f64,
    /// Calibrated indicated altitude in feet (display and analysis only).
    pub calibrated_indicated_altitude: f64,
    /// Pressure altitude in feet (display and analysis only).
    pub pressure_altitude: f64,
}

impl PositionData {
    /// The null position.
    pub const NULL: Self = Self {
        timestamp: NULL_TIMESTAMP,
        latitude: 0.0,
        longitude: 0.0,
        altitude: 0.0,
        indicated_altitude: 0.0,
        calibrated_indicated_altitude: 0.0,
        pressure_altitude: 0.0,
    };

    /// Creates a position sample.
    pub fn new(timestamp: i64, latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            altitude,
            indicated_altitude: altitude,
            calibrated_indicated_altitude: altitude,
            pressure_altitude: altitude,
        }
    }
}

impl_sample!(PositionData);

impl Interpolate for PositionData {
    const FIELDS: &'static [Field<Self>] = &[
        Field::hermite("latitude", |d| d.latitude, |d, v| d.latitude = v),
        Field::hermite180("longitude", |d| d.longitude, |d, v| d.longitude = v),
        Field::hermite("altitude", |d| d.altitude, |d, v| d.altitude = v),
        // Not used for replay, linear is sufficient
        Field::linear(
            "indicated_altitude",
            |d| d.indicated_altitude,
            |d, v| d.indicated_altitude = v,
        ),
        Field::linear(
            "calibrated_indicated_altitude",
            |d| d.calibrated_indicated_altitude,
            |d, v| d.calibrated_indicated_altitude = v,
        ),
        Field::linear(
            "pressure_altitude",
            |d| d.pressure_altitude,
            |d, v| d.pressure_altitude = v,
        ),
    ];

    const SUPPORT: SupportKind = SupportKind::Cubic;

    // Imported flight plans yield sparse waypoints
    const SPARSE: bool = true;
}
