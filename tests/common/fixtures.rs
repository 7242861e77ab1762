use flyer_airfoil::{
    components::{AirfoilDefinition, KeyframeCurve, PhysicsComponent, SpatialComponent},
    config::VehicleAeroConfig,
};
use nalgebra::{UnitQuaternion, Vector3};
use std::path::PathBuf;

pub const DT: f64 = 1.0 / 64.0;

/// Path of the bundled trainer vehicle
pub fn trainer_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/vehicles/trainer.yaml")
}

pub fn load_trainer() -> VehicleAeroConfig {
    VehicleAeroConfig::from_file(trainer_path()).expect("bundled trainer config should load")
}

/// Wing with flat curves, convenient for hand-computed checks
pub fn reference_wing() -> AirfoilDefinition {
    AirfoilDefinition::new(20.0, 0.85, 7.0, 0.0, 0.01)
        .with_lift_curve(KeyframeCurve::constant(0.5))
        .with_form_drag_curve(KeyframeCurve::constant(0.02))
        .with_control_surface_curve(KeyframeCurve::constant(0.0))
}

/// Level flight along +x at `speed` m/s, `altitude` m above the origin
pub fn level_flight(speed: f64, altitude: f64) -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 0.0, altitude * 100.0),
        velocity: Vector3::new(speed * 100.0, 0.0, 0.0),
        attitude: UnitQuaternion::identity(),
        angular_velocity: Vector3::zeros(),
    }
}

pub fn trainer_physics() -> PhysicsComponent {
    PhysicsComponent::new(900.0)
}
