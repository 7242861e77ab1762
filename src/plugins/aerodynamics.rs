use bevy::prelude::*;

use crate::config::AerodynamicsConfig;
use crate::systems::aerodynamics::{
    airfoil_force_system, apply_deflection_events, draw_aero_debug_segments, SetDeflection,
};

/// Aerodynamics stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum AerodynamicsSet {
    Deflection,
    Forces,
}

/// Adds airfoil force calculation to the fixed timestep.
#[derive(Debug, Clone, Default)]
pub struct AerodynamicsPlugin {
    pub config: AerodynamicsConfig,
    /// Render force segments with gizmos; needs bevy's gizmo plugin.
    pub draw_debug: bool,
}

impl AerodynamicsPlugin {
    pub fn new(config: AerodynamicsConfig) -> Self {
        Self {
            config,
            draw_debug: false,
        }
    }

    pub fn with_debug_draw(mut self) -> Self {
        self.draw_debug = true;
        self
    }
}

impl Plugin for AerodynamicsPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(reason) => {
                error!("Invalid aerodynamics config ({}), using defaults", reason);
                AerodynamicsConfig::default()
            }
        };
        info!(
            "Aerodynamics plugin built (force scale {}, drag axis {:?})",
            config.force_scale, config.drag_axis
        );

        app.add_event::<SetDeflection>().insert_resource(config);

        app.configure_sets(
            FixedUpdate,
            (AerodynamicsSet::Deflection, AerodynamicsSet::Forces).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                apply_deflection_events.in_set(AerodynamicsSet::Deflection),
                airfoil_force_system.in_set(AerodynamicsSet::Forces),
            ),
        );

        if self.draw_debug {
            app.add_systems(Update, draw_aero_debug_segments);
        }
    }
}
