use nalgebra::Vector3;

use crate::components::{DebugSegment, DeflectionTable, SurfaceRegistry};
use crate::config::AerodynamicsConfig;
use crate::resources::GroundProbe;
use crate::systems::aerodynamics::host::{ForceSink, KinematicsSource};
use crate::systems::aerodynamics::solver::{compute_surface_forces, AerodynamicOutput, SurfaceInput};

/// Output of one surface during a vehicle tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceReport {
    pub surface: String,
    pub deflection: f64,
    pub output: AerodynamicOutput,
}

/// Evaluates every registered surface once and applies the resulting forces.
///
/// Surfaces are independent; iteration order is not defined. Skipped surfaces
/// apply no force but still appear in the returned reports.
pub fn tick_surfaces(
    registry: &SurfaceRegistry,
    deflections: &DeflectionTable,
    kinematics: &impl KinematicsSource,
    probe: &dyn GroundProbe,
    sink: &mut impl ForceSink,
    config: &AerodynamicsConfig,
    delta_time: f64,
) -> Vec<SurfaceReport> {
    let body_mass = kinematics.mass();

    registry
        .iter()
        .map(|(surface, definition)| {
            let deflection = deflections.deflection(surface);
            let input = SurfaceInput {
                surface,
                definition,
                kinematics: kinematics.sample(surface),
                deflection,
                delta_time,
                body_mass,
            };
            let output = compute_surface_forces(&input, config, probe);
            if !output.is_skipped() {
                sink.apply_force_at(output.force, output.application_point);
            }
            SurfaceReport {
                surface: surface.to_string(),
                deflection,
                output,
            }
        })
        .collect()
}

/// Sum of the applied forces in a set of reports.
pub fn total_force(reports: &[SurfaceReport]) -> Vector3<f64> {
    reports
        .iter()
        .fold(Vector3::zeros(), |acc, report| acc + report.output.force)
}

/// Flattens the debug segments of a set of reports, tagged by surface.
pub fn collect_segments(reports: &[SurfaceReport]) -> Vec<(String, DebugSegment)> {
    reports
        .iter()
        .flat_map(|report| {
            report
                .output
                .segments
                .iter()
                .map(move |segment| (report.surface.clone(), *segment))
        })
        .collect()
}
