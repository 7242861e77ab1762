pub mod components;
pub mod config;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{AirfoilDefinition, DeflectionTable, KeyframeCurve, SurfaceRegistry};
pub use config::{AerodynamicsConfig, VehicleAeroConfig};
pub use plugins::{AerodynamicsPlugin, AerodynamicsSet};
pub use systems::aerodynamics::{compute_surface_forces, AerodynamicOutput, SetDeflection};
