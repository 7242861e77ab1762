use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    CEILING_ALTITUDE, CEILING_DENSITY, GROUND_EFFECT_FACTOR, GROUND_PROBE_DISTANCE,
    SEA_LEVEL_DENSITY, UNITS_PER_METER, UNIT_FORCE_SCALE,
};
use crate::utils::lerp;

/// Axis the drag terms act along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragAxis {
    /// Drag shares the lift axis. Matches existing tuned vehicles.
    #[default]
    StreamUp,
    /// Drag opposes the in-plane airstream.
    StreamForward,
}

/// Linear density falloff between sea level and a ceiling altitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereConfig {
    /// [kg/m^3]
    pub sea_level_density: f64,
    /// [kg/m^3]
    pub ceiling_density: f64,
    /// [m]
    pub ceiling_altitude: f64,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            sea_level_density: SEA_LEVEL_DENSITY,
            ceiling_density: CEILING_DENSITY,
            ceiling_altitude: CEILING_ALTITUDE,
        }
    }
}

impl AtmosphereConfig {
    /// Air density at `altitude` metres, clamped to the sea level and ceiling values.
    pub fn density_at(&self, altitude: f64) -> f64 {
        let fraction = if self.ceiling_altitude > 0.0 {
            altitude / self.ceiling_altitude
        } else if altitude > 0.0 {
            1.0
        } else {
            0.0
        };
        lerp(self.sea_level_density, self.ceiling_density, fraction)
    }
}

/// Global tuning for the airfoil force model.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AerodynamicsConfig {
    /// Multiplier on every applied force
    pub force_scale: f64,
    /// Converts coefficient forces into engine force units
    pub unit_force_scale: f64,
    pub units_per_meter: f64,
    /// Length of the ground effect probe [engine units]
    pub ground_probe_distance: f64,
    /// Induced drag multiplier while in ground effect
    pub ground_effect_factor: f64,
    pub atmosphere: AtmosphereConfig,
    pub drag_axis: DragAxis,
    pub emit_debug_segments: bool,
}

impl Default for AerodynamicsConfig {
    fn default() -> Self {
        Self {
            force_scale: 1.0,
            unit_force_scale: UNIT_FORCE_SCALE,
            units_per_meter: UNITS_PER_METER,
            ground_probe_distance: GROUND_PROBE_DISTANCE,
            ground_effect_factor: GROUND_EFFECT_FACTOR,
            atmosphere: AtmosphereConfig::default(),
            drag_axis: DragAxis::default(),
            emit_debug_segments: true,
        }
    }
}

impl AerodynamicsConfig {
    pub fn with_force_scale(mut self, force_scale: f64) -> Self {
        self.force_scale = force_scale;
        self
    }

    pub fn with_drag_axis(mut self, drag_axis: DragAxis) -> Self {
        self.drag_axis = drag_axis;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.units_per_meter.is_finite() && self.units_per_meter > 0.0) {
            return Err(format!(
                "units_per_meter must be positive, got {}",
                self.units_per_meter
            ));
        }
        if self.ground_probe_distance < 0.0 {
            return Err(format!(
                "ground_probe_distance must not be negative, got {}",
                self.ground_probe_distance
            ));
        }
        if self.atmosphere.ceiling_altitude <= 0.0 {
            return Err(format!(
                "atmosphere ceiling_altitude must be positive, got {}",
                self.atmosphere.ceiling_altitude
            ));
        }
        Ok(())
    }
}
