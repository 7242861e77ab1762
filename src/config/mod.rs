pub mod aerodynamics;
pub mod loader;

pub use aerodynamics::{AerodynamicsConfig, AtmosphereConfig, DragAxis};
pub use loader::{ConfigError, VehicleAeroConfig};
