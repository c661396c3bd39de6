//! Aircraft light samples.

use bitflags::bitflags;

use crate::sample::{Field, Interpolate, SupportKind, NULL_TIMESTAMP};

bitflags! {
    /// Switched-on aircraft lights.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LightStates: u16 {
        /// Navigation lights.
        const NAVIGATION = 0x0001;
        /// Beacon.
        const BEACON = 0x0002;
        /// Landing lights.
        const LANDING = 0x0004;
        /// Taxi lights.
        const TAXI = 0x0008;
        /// Strobes.
        const STROBE = 0x0010;
        /// Panel lighting.
        const PANEL = 0x0020;
        /// Recognition lights.
        const RECOGNITION = 0x0040;
        /// Wing lights.
        const WING = 0x0080;
        /// Logo lights.
        const LOGO = 0x0100;
        /// Cabin lighting.
        const CABIN = 0x0200;
    }
}

/// Recorded light states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightData {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    /// Lights that are switched on.
    pub light_states: LightStates,
}

impl LightData {
    /// The null light sample.
    pub const NULL: Self = Self {
        timestamp: NULL_TIMESTAMP,
        light_states: LightStates::empty(),
    };

    /// Creates a light sample.
    pub fn new(timestamp: i64, light_states: LightStates) -> Self {
        Self {
            timestamp,
            light_states,
        }
    }
}

impl_sample!(LightData);

impl Interpolate for LightData {
    const FIELDS: &'static [Field<Self>] = &[Field::hold("light_states", |d, s| {
        d.light_states = s.light_states
    })];

    const SUPPORT: SupportKind = SupportKind::Linear;
}
