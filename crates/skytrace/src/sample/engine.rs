//! Engine samples for up to four engines.

use crate::sample::{Field, Interpolate, SupportKind, NULL_TIMESTAMP};

/// Number of engines an engine sample describes.
pub const ENGINE_COUNT: usize = 4;

/// Recorded engine levers and switches, indexed by engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineData {
    /// Milliseconds since the start of the recording.
    pub timestamp: i64,
    /// Throttle lever positions, normalised to [-1, 1].
    pub throttle_lever_position: [f64; ENGINE_COUNT],
    /// Propeller lever positions, normalised to [-1, 1].
    pub propeller_lever_position: [f64; ENGINE_COUNT],
    /// Mixture lever positions in percent.
    pub mixture_lever_position: [f64; ENGINE_COUNT],
    /// Cowl flap positions in percent.
    pub cowl_flap_position: [f64; ENGINE_COUNT],
    /// Electrical master battery switches.
    pub electrical_master_battery: [bool; ENGINE_COUNT],
    /// Engine starter switches.
    pub general_engine_starter: [bool; ENGINE_COUNT],
    /// Combustion states.
    pub general_engine_combustion: [bool; ENGINE_COUNT],
}

impl EngineData {
    /// The null engine sample.
    pub const NULL: Self = Self {
        timestamp: NULL_TIMESTAMP,
        throttle_lever_position: [0.0; ENGINE_COUNT],
        propeller_lever_position: [0.0; ENGINE_COUNT],
        mixture_lever_position: [0.0; ENGINE_COUNT],
        cowl_flap_position: [0.0; ENGINE_COUNT],
        electrical_master_battery: [false; ENGINE_COUNT],
        general_engine_starter: [false; ENGINE_COUNT],
        general_engine_combustion: [false; ENGINE_COUNT],
    };
}

impl_sample!(EngineData);

impl Interpolate for EngineData {
    const FIELDS: &'static [Field<Self>] = &[
        Field::linear(
            "throttle_lever_position_1",
            |d| d.throttle_lever_position[0],
            |d, v| d.throttle_lever_position[0] = v,
        ),
        Field::linear(
            "throttle_lever_position_2",
            |d| d.throttle_lever_position[1],
            |d, v| d.throttle_lever_position[1] = v,
        ),
        Field::linear(
            "throttle_lever_position_3",
            |d| d.throttle_lever_position[2],
            |d, v| d.throttle_lever_position[2] = v,
        ),
        Field::linear(
            "throttle_lever_position_4",
            |d| d.throttle_lever_position[3],
            |d, v| d.throttle_lever_position[3] = v,
        ),
        Field::linear(
            "propeller_lever_position_1",
            |d| d.propeller_lever_position[0],
            |d, v| d.propeller_lever_position[0] = v,
        ),
        Field::linear(
            "propeller_lever_position_2",
            |d| d.propeller_lever_position[1],
            |d, v| d.propeller_lever_position[1] = v,
        ),
        Field::linear(
            "propeller_lever_position_3",
            |d| d.propeller_lever_position[2],
            |d, v| d.propeller_lever_position[2] = v,
        ),
        Field::linear(
            "propeller_lever_position_4",
            |d| d.propeller_lever_position[3],
            |d, v| d.propeller_lever_position[3] = v,
        ),
        Field::linear(
            "mixture_lever_position_1",
            |d| d.mixture_lever_position[0],
            |d, v| d.mixture_lever_position[0] = v,
        ),
        Field::linear(
            "mixture_lever_position_2",
            |d| d.mixture_lever_position[1],
            |d, v| d.mixture_lever_position[1] = v,
        ),
        Field::linear(
            "mixture_lever_position_3",
            |d| d.mixture_lever_position[2],
            |d, v| d.mixture_lever_position[2] = v,
        ),
        Field::linear(
            "mixture_lever_position_4",
            |d| d.mixture_lever_position[3],
            |d, v| d.mixture_lever_position[3] = v,
        ),
        Field::linear(
            "cowl_flap_position_1",
            |d| d.cowl_flap_position[0],
            |d, v| d.cowl_flap_position[0] = v,
        ),
        Field::linear(
            "cowl_flap_position_2",
            |d| d.cowl_flap_position[1],
            |d, v| d.cowl_flap_position[1] = v,
        ),
        Field::linear(
            "cowl_flap_position_3",
            |d| d.cowl_flap_position[2],
            |d, v| d.cowl_flap_position[2] = v,
        ),
        Field::linear(
            "cowl_flap_position_4",
            |d| d.cowl_flap_position[3],
            |d, v| d.cowl_flap_position[3] = v,
        ),
        // Switches are never interpolated
        Field::hold("electrical_master_battery", |d, s| {
            d.electrical_master_battery = s.electrical_master_battery
        }),
        Field::hold("general_engine_starter", |d, s| {
            d.general_engine_starter = s.general_engine_starter
        }),
        Field::hold("general_engine_combustion", |d, s| {
            d.general_engine_combustion = s.general_engine_combustion
        }),
    ];

    const SUPPORT: SupportKind = SupportKind::Linear;
}
