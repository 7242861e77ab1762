pub mod aerodynamics;

pub use aerodynamics::{
    airfoil_force_system, apply_deflection_events, compute_surface_forces,
    draw_aero_debug_segments, tick_surfaces, SetDeflection,
};
