use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AeroDebugSegments, DeflectionTable, ForceCategory, PhysicsComponent, SegmentCategory,
    SpatialComponent, SurfaceRegistry, SurfaceSockets,
};
use crate::config::AerodynamicsConfig;
use crate::resources::{GroundPlane, GroundProbe, OpenSky};
use crate::systems::aerodynamics::host::RigidBodyKinematics;
use crate::systems::aerodynamics::tick::{collect_segments, tick_surfaces};

/// Request to move a control surface of a vehicle.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SetDeflection {
    pub entity: Entity,
    pub surface: String,
    /// Signed deflection [deg]
    pub degrees: f64,
}

/// Writes pending deflection requests into the vehicles' tables, last write wins.
///
/// Requests naming a surface the vehicle does not have are dropped, so table keys
/// stay a subset of the registry.
pub fn apply_deflection_events(
    mut requests: EventReader<SetDeflection>,
    mut vehicles: Query<(&mut DeflectionTable, Option<&SurfaceRegistry>)>,
) {
    for request in requests.read() {
        let Ok((mut table, registry)) = vehicles.get_mut(request.entity) else {
            warn!(
                "Ignoring deflection of '{}' for {:?}: entity has no DeflectionTable",
                request.surface, request.entity
            );
            continue;
        };
        if let Some(Err(err)) = registry.map(|registry| registry.definition(&request.surface)) {
            warn!("Ignoring deflection for {:?}: {}", request.entity, err);
            continue;
        }
        table.set_deflection(request.surface.clone(), request.degrees);
    }
}

/// Replaces the aerodynamic forces of every vehicle with this tick's surface forces.
pub fn airfoil_force_system(
    mut vehicles: Query<(
        &SurfaceRegistry,
        Option<&DeflectionTable>,
        Option<&SurfaceSockets>,
        &SpatialComponent,
        &mut PhysicsComponent,
        Option<&mut AeroDebugSegments>,
    )>,
    config: Res<AerodynamicsConfig>,
    ground: Option<Res<GroundPlane>>,
    time: Res<Time>,
) {
    let delta_time = time.delta_secs_f64();
    let probe: &dyn GroundProbe = match ground.as_deref() {
        Some(plane) => plane as &dyn GroundProbe,
        None => &OpenSky,
    };
    let neutral = DeflectionTable::new();
    let unmounted = SurfaceSockets::new();

    for (registry, deflections, sockets, spatial, mut physics, debug) in vehicles.iter_mut() {
        physics.clear_category(&ForceCategory::Aerodynamic);

        let kinematics = RigidBodyKinematics {
            spatial,
            sockets: sockets.unwrap_or(&unmounted),
            mass: physics.mass,
        };
        let reports = tick_surfaces(
            registry,
            deflections.unwrap_or(&neutral),
            &kinematics,
            probe,
            &mut *physics,
            &config,
            delta_time,
        );

        if let Some(mut debug) = debug {
            debug.segments = collect_segments(&reports);
        }
    }
}

/// Draws the last tick's force segments as gizmo lines.
pub fn draw_aero_debug_segments(mut gizmos: Gizmos, vehicles: Query<&AeroDebugSegments>) {
    for debug in vehicles.iter() {
        for (_, segment) in &debug.segments {
            gizmos.line(
                to_render(&segment.start),
                to_render(&segment.end),
                segment_color(segment.category),
            );
        }
    }
}

fn to_render(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

fn segment_color(category: SegmentCategory) -> Color {
    match category {
        SegmentCategory::GroundProbe => Color::srgb(1.0, 0.85, 0.0),
        SegmentCategory::Lift => Color::srgb(0.0, 0.8, 0.2),
        SegmentCategory::Drag => Color::srgb(0.9, 0.1, 0.1),
        SegmentCategory::Total => Color::srgb(0.2, 0.4, 1.0),
    }
}
