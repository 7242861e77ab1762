mod common;

use approx::assert_relative_eq;
use flyer_airfoil::{
    components::{DeflectionTable, ForceCategory, PhysicsComponent, SurfaceSockets},
    config::{AerodynamicsConfig, ConfigError, VehicleAeroConfig},
    resources::{GroundPlane, OpenSky},
    systems::aerodynamics::{
        compute_surface_forces, tick_surfaces, total_force, KinematicSample, RigidBodyKinematics,
        SurfaceInput,
    },
};
use nalgebra::{UnitQuaternion, Vector3};
use pretty_assertions::assert_eq;
use std::f64::consts::PI;
use std::io::Write;

use common::{
    assert_finite, assert_vector_eq, level_flight, load_trainer, reference_wing, trainer_path,
    trainer_physics, DT,
};

fn reference_input(definition: &flyer_airfoil::AirfoilDefinition, altitude_units: f64) -> SurfaceInput<'_> {
    SurfaceInput {
        surface: "wing",
        definition,
        kinematics: KinematicSample {
            position: Vector3::new(0.0, 0.0, altitude_units),
            orientation: UnitQuaternion::identity(),
            velocity: Vector3::new(5000.0, 0.0, 0.0),
        },
        deflection: 0.0,
        delta_time: DT,
        body_mass: 1000.0,
    }
}

#[test]
fn test_reference_wing_against_hand_computation() {
    let wing = reference_wing();
    let output = compute_surface_forces(
        &reference_input(&wing, 0.0),
        &AerodynamicsConfig::default(),
        &OpenSky,
    );

    let dynamic = 2500.0 * 1.225;
    let lift = 0.5 * dynamic * 20.0 * 50.0;
    let induced = 0.25 * dynamic / (PI * 7.0 * 0.85) * 50.0;
    let form = 0.03 * dynamic * 50.0;

    assert_vector_eq(&output.breakdown.lift, &Vector3::new(0.0, 0.0, lift), 1e-12);
    assert_vector_eq(&output.breakdown.induced_drag, &Vector3::new(0.0, 0.0, induced), 1e-12);
    assert_vector_eq(&output.breakdown.form_drag, &Vector3::new(0.0, 0.0, form), 1e-12);
    assert_vector_eq(
        &output.force,
        &Vector3::new(0.0, 0.0, (lift + induced + form) * DT),
        1e-12,
    );

    let airflow = output.airflow.expect("airflow is reported for solved surfaces");
    assert_relative_eq!(airflow.alpha, 0.0);
    assert_relative_eq!(airflow.stream_speed, 50.0);
    assert!(!airflow.in_ground_effect());
}

#[test]
fn test_ground_effect_only_scales_induced_drag() {
    let wing = reference_wing();
    let config = AerodynamicsConfig::default();
    let ground = GroundPlane::at_height(0.0);

    let free = compute_surface_forces(&reference_input(&wing, 5000.0), &config, &ground);
    let near = compute_surface_forces(&reference_input(&wing, 500.0), &config, &ground);

    assert!(near.airflow.as_ref().is_some_and(|a| a.in_ground_effect()));
    assert!(!free.airflow.as_ref().is_some_and(|a| a.in_ground_effect()));
    let density_ratio = near.airflow.as_ref().map_or(0.0, |a| a.density)
        / free.airflow.as_ref().map_or(1.0, |a| a.density);
    assert_relative_eq!(
        near.breakdown.induced_drag.z / free.breakdown.induced_drag.z,
        0.65 * density_ratio,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        near.breakdown.lift.z / free.breakdown.lift.z,
        density_ratio,
        max_relative = 1e-9
    );
}

#[test]
fn test_trainer_tick_is_symmetric() {
    let vehicle = load_trainer();
    let registry = vehicle.registry();
    let sockets = vehicle.sockets();
    let spatial = level_flight(45.0, 800.0);
    let mut physics = trainer_physics();

    let kinematics = RigidBodyKinematics {
        spatial: &spatial,
        sockets: &sockets,
        mass: physics.mass,
    };
    let reports = tick_surfaces(
        &registry,
        &DeflectionTable::new(),
        &kinematics,
        &OpenSky,
        &mut physics,
        &vehicle.aerodynamics,
        DT,
    );

    assert_eq!(reports.len(), 5);
    assert_eq!(physics.forces.len(), 5);
    for report in &reports {
        assert_finite(&report.output.force, &report.surface);
    }

    let net = physics.net_force(&ForceCategory::Aerodynamic);
    assert_vector_eq(&net, &total_force(&reports), 1e-12);
    assert!(net.z > 0.0);

    let moment = physics.net_moment_about(&ForceCategory::Aerodynamic, &spatial.position);
    assert_relative_eq!(moment.x, 0.0, epsilon = 1e-6);
}

#[test]
fn test_opposite_aileron_deflection_rolls() {
    let vehicle = load_trainer();
    let registry = vehicle.registry();
    let sockets = vehicle.sockets();
    let spatial = level_flight(45.0, 800.0);
    let mut physics = trainer_physics();

    let mut deflections = DeflectionTable::new();
    deflections.set_deflection("left_aileron", 10.0);
    deflections.set_deflection("right_aileron", -10.0);

    let kinematics = RigidBodyKinematics {
        spatial: &spatial,
        sockets: &sockets,
        mass: physics.mass,
    };
    tick_surfaces(
        &registry,
        &deflections,
        &kinematics,
        &OpenSky,
        &mut physics,
        &vehicle.aerodynamics,
        DT,
    );

    // More lift on the left (+y) side rolls right, positive about +x
    let moment = physics.net_moment_about(&ForceCategory::Aerodynamic, &spatial.position);
    assert!(moment.x > 0.0, "expected positive roll moment, got {}", moment.x);
}

#[test]
fn test_unmounted_surfaces_share_body_origin() {
    let vehicle = load_trainer();
    let registry = vehicle.registry();
    let spatial = level_flight(45.0, 800.0);
    let mut physics = PhysicsComponent::new(900.0);
    let sockets = SurfaceSockets::new();

    let kinematics = RigidBodyKinematics {
        spatial: &spatial,
        sockets: &sockets,
        mass: physics.mass,
    };
    tick_surfaces(
        &registry,
        &DeflectionTable::new(),
        &kinematics,
        &OpenSky,
        &mut physics,
        &vehicle.aerodynamics,
        DT,
    );

    assert!(physics
        .forces
        .iter()
        .all(|force| force.point == Some(spatial.position)));
}

#[test]
fn test_vehicle_file_round_trip_through_disk() {
    let vehicle = load_trainer();
    let yaml = vehicle.to_yaml_string().unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let reloaded = VehicleAeroConfig::from_file(file.path()).unwrap();
    assert_eq!(reloaded, vehicle);

    let mut names: Vec<&str> = reloaded.surfaces.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec!["elevator", "left_aileron", "left_wing", "right_aileron", "right_wing"]
    );
}

#[test]
fn test_missing_curve_rejected_at_load() {
    let yaml = std::fs::read_to_string(trainer_path())
        .unwrap()
        .replacen("    form_drag_curve:\n      keys: [[0.0, 0.012]]\n", "", 1);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    match VehicleAeroConfig::from_file(file.path()) {
        Err(ConfigError::ValidationError(msg)) => {
            assert!(msg.contains("elevator"), "unexpected message: {}", msg);
            assert!(msg.contains("form drag"), "unexpected message: {}", msg);
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = VehicleAeroConfig::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}
