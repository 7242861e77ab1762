mod force_system;
mod host;
mod solver;
mod tick;

pub use force_system::{
    airfoil_force_system, apply_deflection_events, draw_aero_debug_segments, SetDeflection,
};
pub use host::{ForceSink, KinematicsSource, RigidBodyKinematics};
pub use solver::{
    compute_surface_forces, AerodynamicOutput, AirflowSample, ForceBreakdown, KinematicSample,
    SurfaceFrame, SurfaceInput,
};
pub use tick::{collect_segments, tick_surfaces, total_force, SurfaceReport};
