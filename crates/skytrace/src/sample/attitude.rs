//! Aircraft attitude samples.

use crate::sample::{Field, Interpolate, SupportKind, NULL_TIMESTAMP};

/// Recorded aircraft attitude and body velocities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeData {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    /// Pitch in degrees [-90, 90].
    pub pitch: f64,
    /// Bank in degrees [-180, 180), discontinuous at +/-180.
    pub bank: f64,
    /// True heading in degrees [0, 360), discontinuous at 0/360.
    pub true_heading: f64,
    /// Velocity along the body X axis, in feet per second.
    pub velocity_body_x: f64,
    /// Velocity along the body Y axis, in feet per second.
    pub velocity_body_y: f64,
    /// Velocity along the body Z axis, in feet per second.
    pub velocity_body_z: f64,
    /// True if the aircraft is on the ground.
    pub on_ground: bool,
}

impl AttitudeData {
    /// The null attitude.
    pub const NULL: Self = Self {
        timestamp: NULL_TIMESTAMP,
        pitch: 0.0,
        bank: 0.0,
        true_heading: 0.0,
        velocity_body_x: 0.0,
        velocity_body_y: 0.0,
        velocity_body_z: 0.0,
        on_ground: false,
    };

    /// Creates an attitude sample with zero velocities, airborne.
    pub fn new(timestamp: i64, pitch: f64, bank: f64, true_heading: f64) -> Self {
        Self {
            timestamp,
            pitch,
            bank,
            true_heading,
            ..Self::NULL
        }
    }
}

impl_sample!(AttitudeData);

impl Interpolate for AttitudeData {
    const FIELDS: &'static [Field<Self>] = &[
        Field::hermite("pitch", |d| d.pitch, |d, v| d.pitch = v),
        Field::hermite180("bank", |d| d.bank, |d, v| d.bank = v),
        Field::hermite360("true_heading", |d| d.true_heading, |d, v| d.true_heading = v),
        Field::linear("velocity_body_x", |d| d.velocity_body_x, |d, v| d.velocity_body_x = v),
        Field::linear("velocity_body_y", |d| d.velocity_body_y, |d, v| d.velocity_body_y = v),
        Field::linear("velocity_body_z", |d| d.velocity_body_z, |d, v| d.velocity_body_z = v),
        Field::nearest("on_ground", |d, s| d.on_ground = s.on_ground),
    ];

    const SUPPORT: SupportKind = SupportKind::Cubic;

    // Attitude may be derived from imported, sparse flight plans
    const SPARSE: bool = true;
}
