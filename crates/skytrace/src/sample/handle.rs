//! Aircraft handle samples: brakes, gear, hooks, canopy and wing folding.

use crate::sample::{Field, Interpolate, SupportKind, NULL_TIMESTAMP};

/// Recorded aircraft handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftHandleData {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    /// Left brake, normalised to [-1, 1].
    pub brake_left_position: f64,
    /// Right brake, normalised to [-1, 1].
    pub brake_right_position: f64,
    /// Gear steering, normalised to [-1, 1].
    pub gear_steer_position: f64,
    /// Water rudder handle, normalised to [-1, 1].
    pub water_rudder_handle_position: f64,
    /// Tail hook, in percent.
    pub tailhook_position: f64,
    /// Canopy opening, in percent.
    pub canopy_open: f64,
    /// Left wing folding, in percent.
    pub left_wing_folding: f64,
    /// Right wing folding, in percent.
    pub right_wing_folding: f64,
    /// True if the gear handle is down.
    pub gear_handle_position: bool,
    /// True if the tail hook handle is down.
    pub tailhook_handle_position: bool,
    /// True if the folding wing handle is set.
    pub folding_wing_handle_position: bool,
    /// True if smoke is enabled.
    pub smoke_enabled: bool,
}

impl AircraftHandleData {
    /// The null handle sample.
    pub const NULL: Self = Self {
        timestamp: NULL_TIMESTAMP,
        brake_left_position: 0.0,
        brake_right_position: 0.0,
        gear_steer_position: 0.0,
        water_rudder_handle_position: 0.0,
        tailhook_position: 0.0,
        canopy_open: 0.0,
        left_wing_folding: 0.0,
        right_wing_folding: 0.0,
        gear_handle_position: false,
        tailhook_handle_position: false,
        folding_wing_handle_position: false,
        smoke_enabled: false,
    };
}

impl_sample!(AircraftHandleData);

impl Interpolate for AircraftHandleData {
    const FIELDS: &'static [Field<Self>] = &[
        Field::linear(
            "brake_left_position",
            |d| d.brake_left_position,
            |d, v| d.brake_left_position = v,
        ),
        Field::linear(
            "brake_right_position",
            |d| d.brake_right_position,
            |d, v| d.brake_right_position = v,
        ),
        Field::linear(
            "gear_steer_position",
            |d| d.gear_steer_position,
            |d, v| d.gear_steer_position = v,
        ),
        Field::linear(
            "water_rudder_handle_position",
            |d| d.water_rudder_handle_position,
            |d, v| d.water_rudder_handle_position = v,
        ),
        Field::linear(
            "tailhook_position",
            |d| d.tailhook_position,
            |d, v| d.tailhook_position = v,
        ),
        Field::linear("canopy_open", |d| d.canopy_open, |d, v| d.canopy_open = v),
        Field::linear(
            "left_wing_folding",
            |d| d.left_wing_folding,
            |d, v| d.left_wing_folding = v,
        ),
        Field::linear(
            "right_wing_folding",
            |d| d.right_wing_folding,
            |d, v| d.right_wing_folding = v,
        ),
        Field::hold("gear_handle_position", |d, s| {
            d.gear_handle_position = s.gear_handle_position
        }),
        Field::hold("tailhook_handle_position", |d, s| {
            d.tailhook_handle_position = s.tailhook_handle_position
        }),
        Field::hold("folding_wing_handle_position", |d, s| {
            d.folding_wing_handle_position = s.folding_wing_handle_position
        }),
        Field::hold("smoke_enabled", |d, s| d.smoke_enabled = s.smoke_enabled),
    ];

    const SUPPORT: SupportKind = SupportKind::Linear;
}
