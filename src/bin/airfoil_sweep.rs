use nalgebra::{UnitQuaternion, Vector3};
use std::env;

use flyer_airfoil::{
    components::AirfoilDefinition,
    config::{AerodynamicsConfig, VehicleAeroConfig},
    resources::OpenSky,
    systems::aerodynamics::{compute_surface_forces, KinematicSample, SurfaceInput},
    utils::deg_to_rad,
};

const DEFAULT_SPEED: f64 = 50.0; // m/s
const SWEEP_LIMIT: i32 = 20; // deg
const SWEEP_STEP: usize = 2; // deg

struct SweepRow {
    alpha: f64,
    coefficient_of_lift: f64,
    lift: f64,
    drag: f64,
}

fn usage() -> String {
    "usage: airfoil_sweep <vehicle.yaml> [speed_m_s] [--json]".to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    let path = positional.first().ok_or_else(usage)?;
    let speed = match positional.get(1) {
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|e| format!("invalid speed '{}': {}", raw, e))?,
        None => DEFAULT_SPEED,
    };

    let vehicle = VehicleAeroConfig::from_file(path.as_str())?;
    let registry = vehicle.registry();

    if json {
        let surfaces: serde_json::Map<String, serde_json::Value> = vehicle
            .surfaces
            .keys()
            .filter_map(|name| registry.get(name).map(|definition| (name, definition)))
            .map(|(name, definition)| {
                let rows = sweep(name, definition, &vehicle.aerodynamics, speed)
                    .iter()
                    .map(|row| {
                        serde_json::json!({
                            "alpha": row.alpha,
                            "cl": row.coefficient_of_lift,
                            "lift": row.lift,
                            "drag": row.drag,
                        })
                    })
                    .collect();
                (name.clone(), serde_json::Value::Array(rows))
            })
            .collect();
        let report = serde_json::json!({ "speed": speed, "surfaces": surfaces });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Alpha sweep at {:.1} m/s, sea level", speed);
    for name in vehicle.surfaces.keys() {
        let Some(definition) = registry.get(name) else {
            continue;
        };
        println!();
        println!("[{}]", name);
        println!("{:>8} {:>10} {:>16} {:>16} {:>10}", "alpha", "CL", "lift", "drag", "L/D");
        for row in sweep(name, definition, &vehicle.aerodynamics, speed) {
            let ratio = if row.drag.abs() > f64::EPSILON {
                row.lift / row.drag
            } else {
                f64::INFINITY
            };
            println!(
                "{:>8.1} {:>10.4} {:>16.1} {:>16.1} {:>10.2}",
                row.alpha, row.coefficient_of_lift, row.lift, row.drag, ratio
            );
        }
    }

    Ok(())
}

/// Evaluates a level surface at sea level over the alpha range.
fn sweep(
    name: &str,
    definition: &AirfoilDefinition,
    config: &AerodynamicsConfig,
    speed: f64,
) -> Vec<SweepRow> {
    (-SWEEP_LIMIT..=SWEEP_LIMIT)
        .step_by(SWEEP_STEP)
        .filter_map(|degrees| {
            let alpha = deg_to_rad(degrees as f64);
            let velocity =
                Vector3::new(alpha.cos(), 0.0, alpha.sin()) * speed * config.units_per_meter;
            let input = SurfaceInput {
                surface: name,
                definition,
                kinematics: KinematicSample {
                    position: Vector3::zeros(),
                    orientation: UnitQuaternion::identity(),
                    velocity,
                },
                deflection: 0.0,
                delta_time: 1.0,
                body_mass: 1.0,
            };
            let output = compute_surface_forces(&input, config, &OpenSky);
            let airflow = output.airflow?;
            Some(SweepRow {
                alpha: airflow.alpha,
                coefficient_of_lift: airflow.coefficient_of_lift,
                lift: output.breakdown.lift.norm(),
                drag: output.breakdown.drag().norm(),
            })
        })
        .collect()
}
