//! Primary and secondary flight control samples.

use crate::sample::{Field, Interpolate, SupportKind, NULL_TIMESTAMP};

/// Recorded primary flight control surfaces, normalised to [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryFlightControlData {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    /// Rudder position.
    pub rudder_position: f64,
    /// Elevator position.
    pub elevator_position: f64,
    /// Aileron position.
    pub aileron_position: f64,
}

impl PrimaryFlightControlData {
    /// The null primary flight control sample.
    pub const NULL: Self = Self {
        timestamp: NULL_TIMESTAMP,
        rudder_position: 0.0,
        elevator_position: 0.0,
        aileron_position: 0.0,
    };

    /// Creates a primary flight control sample.
    pub fn new(timestamp: i64, rudder: f64, elevator: f64, aileron: f64) -> Self {
        Self {
            timestamp,
            rudder_position: rudder,
            elevator_position: elevator,
            aileron_position: aileron,
        }
    }
}

impl_sample!(PrimaryFlightControlData);

impl Interpolate for PrimaryFlightControlData {
    const FIELDS: &'static [Field<Self>] = &[
        Field::linear("rudder_position", |d| d.rudder_position, |d, v| d.rudder_position = v),
        Field::linear(
            "elevator_position",
            |d| d.elevator_position,
            |d, v| d.elevator_position = v,
        ),
        Field::linear("aileron_position", |d| d.aileron_position, |d, v| d.aileron_position = v),
    ];

    const SUPPORT: SupportKind = SupportKind::Linear;
}

/// Recorded flaps, spoilers and their handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryFlightControlData {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    /// Left leading edge flaps, in percent.
    pub left_leading_edge_flaps_position: f64,
    /// Right leading edge flaps, in percent.
    pub right_leading_edge_flaps_position: f64,
    /// Left trailing edge flaps, in percent.
    pub left_trailing_edge_flaps_position: f64,
    /// Right trailing edge flaps, in percent.
    pub right_trailing_edge_flaps_position: f64,
    /// Left spoilers, in percent.
    pub left_spoilers_position: f64,
    /// Right spoilers, in percent.
    pub right_spoilers_position: f64,
    /// Spoilers handle, in percent.
    pub spoilers_handle_percent: f64,
    /// Flaps handle detent.
    pub flaps_handle_index: u8,
    /// True if the spoilers are armed.
    pub spoilers_armed: bool,
}

impl SecondaryFlightControlData {
    /// The null secondary flight control sample.
    pub const NULL: Self = Self {
        timestamp: NULL_TIMESTAMP,
        left_leading_edge_flaps_position: 0.0,
        right_leading_edge_flaps_position: 0.0,
        left_trailing_edge_flaps_position: 0.0,
        right_trailing_edge_flaps_position: 0.0,
        left_spoilers_position: 0.0,
        right_spoilers_position: 0.0,
        spoilers_handle_percent: 0.0,
        flaps_handle_index: 0,
        spoilers_armed: false,
    };
}

impl_sample!(SecondaryFlightControlData);

impl Interpolate for SecondaryFlightControlData {
    const FIELDS: &'static [Field<Self>] = &[
        Field::linear(
            "left_leading_edge_flaps_position",
            |d| d.left_leading_edge_flaps_position,
            |d, v| d.left_leading_edge_flaps_position = v,
        ),
        Field::linear(
            "right_leading_edge_flaps_position",
            |d| d.right_leading_edge_flaps_position,
            |d, v| d.right_leading_edge_flaps_position = v,
        ),
        Field::linear(
            "left_trailing_edge_flaps_position",
            |d| d.left_trailing_edge_flaps_position,
            |d, v| d.left_trailing_edge_flaps_position = v,
        ),
        Field::linear(
            "right_trailing_edge_flaps_position",
            |d| d.right_trailing_edge_flaps_position,
            |d, v| d.right_trailing_edge_flaps_position = v,
        ),
        Field::linear(
            "left_spoilers_position",
            |d| d.left_spoilers_position,
            |d, v| d.left_spoilers_position = v,
        ),
        Field::linear(
            "right_spoilers_position",
            |d| d.right_spoilers_position,
            |d, v| d.right_spoilers_position = v,
        ),
        Field::linear(
            "spoilers_handle_percent",
            |d| d.spoilers_handle_percent,
            |d, v| d.spoilers_handle_percent = v,
        ),
        Field::hold("flaps_handle_index", |d, s| {
            d.flaps_handle_index = s.flaps_handle_index
        }),
        Field::hold("spoilers_armed", |d, s| d.spoilers_armed = s.spoilers_armed),
    ];

    const SUPPORT: SupportKind = SupportKind::Linear;
}
