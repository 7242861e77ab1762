use bevy::log::warn;
use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use crate::components::{AirfoilCurves, AirfoilDefinition, DebugSegment, SegmentCategory};
use crate::config::{AerodynamicsConfig, DragAxis};
use crate::resources::{GroundProbe, ProbeHit};
use crate::utils::constants::{DRAG_SEGMENT_OFFSET, MIN_STREAM_SPEED, TOTAL_SEGMENT_OFFSET};
use crate::utils::{rad_to_deg, rotate_about_axis, safe_normalize};

/// World-space state of one surface socket for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicSample {
    /// [engine units]
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    /// Velocity of the socket, angular contribution included [engine units/s]
    pub velocity: Vector3<f64>,
}

/// Orthonormal surface axes; (forward, up, right) is right-handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    pub forward: Vector3<f64>,
    pub up: Vector3<f64>,
    pub right: Vector3<f64>,
}

impl SurfaceFrame {
    /// Body axes are X forward, Y left, Z up.
    pub fn from_orientation(orientation: &UnitQuaternion<f64>) -> Self {
        let forward = orientation * Vector3::x();
        let up = orientation * Vector3::z();
        Self {
            forward,
            up,
            right: forward.cross(&up),
        }
    }
}

/// Everything the solver needs to evaluate one surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceInput<'a> {
    pub surface: &'a str,
    pub definition: &'a AirfoilDefinition,
    pub kinematics: KinematicSample,
    /// Control deflection [deg]
    pub deflection: f64,
    /// Tick duration [s]
    pub delta_time: f64,
    /// Mass of the body, only used to size debug segments [kg]
    pub body_mass: f64,
}

/// The unscaled force terms of one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub lift: Vector3<f64>,
    pub induced_drag: Vector3<f64>,
    pub form_drag: Vector3<f64>,
}

impl ForceBreakdown {
    pub fn zero() -> Self {
        Self {
            lift: Vector3::zeros(),
            induced_drag: Vector3::zeros(),
            form_drag: Vector3::zeros(),
        }
    }

    pub fn drag(&self) -> Vector3<f64> {
        self.induced_drag + self.form_drag
    }

    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.induced_drag + self.form_drag
    }
}

/// Local airflow and environment seen by a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirflowSample {
    /// [m]
    pub altitude: f64,
    /// [kg/m^3]
    pub density: f64,
    /// Speed along the surface forward axis [m/s]
    pub forward_speed: f64,
    /// Speed along the surface up axis [m/s]
    pub vertical_speed: f64,
    /// Sideslip speed along the right axis [m/s]; reported, not used in the force model
    pub lateral_speed: f64,
    /// Angle of attack [deg]
    pub alpha: f64,
    /// Magnitude of the in-plane airstream [m/s]
    pub stream_speed: f64,
    pub stream_forward: Vector3<f64>,
    pub stream_up: Vector3<f64>,
    pub coefficient_of_lift: f64,
    pub ground_hit: Option<ProbeHit>,
}

impl AirflowSample {
    pub fn in_ground_effect(&self) -> bool {
        self.ground_hit.is_some()
    }
}

/// Result of evaluating one surface for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AerodynamicOutput {
    /// Force to apply this tick: total force * force scale * delta time
    pub force: Vector3<f64>,
    /// World-space application point [engine units]
    pub application_point: Vector3<f64>,
    pub breakdown: ForceBreakdown,
    /// `None` when the surface was skipped
    pub airflow: Option<AirflowSample>,
    pub segments: Vec<DebugSegment>,
}

impl AerodynamicOutput {
    /// Output of a surface that contributes nothing this tick.
    pub fn zero(application_point: Vector3<f64>) -> Self {
        Self {
            force: Vector3::zeros(),
            application_point,
            breakdown: ForceBreakdown::zero(),
            airflow: None,
            segments: Vec::new(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.airflow.is_none()
    }
}

/// Computes the lift, induced drag and form drag of one surface.
///
/// A surface missing any of its three curves is skipped with a warning and yields
/// a zero force and no segments. Nothing else is validated: non-finite inputs
/// propagate into the output.
pub fn compute_surface_forces(
    input: &SurfaceInput,
    config: &AerodynamicsConfig,
    probe: &dyn GroundProbe,
) -> AerodynamicOutput {
    let position = input.kinematics.position;
    match input.definition.curves(input.surface) {
        Ok(curves) => solve(input, &curves, config, probe),
        Err(err) => {
            warn!("{}; surface skipped this tick", err);
            AerodynamicOutput::zero(position)
        }
    }
}

fn solve(
    input: &SurfaceInput,
    curves: &AirfoilCurves,
    config: &AerodynamicsConfig,
    probe: &dyn GroundProbe,
) -> AerodynamicOutput {
    let definition = input.definition;
    let position = input.kinematics.position;
    let unit_force = -config.unit_force_scale;

    // Environment
    let altitude = position.z / config.units_per_meter;
    let density = config.atmosphere.density_at(altitude);

    // Airflow in the surface frame, SI units
    let velocity = input.kinematics.velocity / config.units_per_meter;
    let frame = SurfaceFrame::from_orientation(&input.kinematics.orientation);
    let forward_speed = frame.forward.dot(&velocity);
    let vertical_speed = frame.up.dot(&velocity);
    let lateral_speed = frame.right.dot(&velocity);

    let alpha = rad_to_deg(vertical_speed.atan2(forward_speed));

    let air_stream = frame.forward * forward_speed + frame.up * vertical_speed;
    let stream_speed = air_stream.norm();
    let stream_forward = safe_normalize(&air_stream, MIN_STREAM_SPEED);
    let stream_up = safe_normalize(
        &rotate_about_axis(&stream_forward, &frame.right, -90.0),
        MIN_STREAM_SPEED,
    );
    let dynamic_term = stream_speed.powi(2) * density;

    // Lift
    let deflection_force = curves.control_surface.evaluate(alpha) * input.deflection;
    let coefficient_of_lift = curves.lift.evaluate(alpha) + deflection_force;
    let lift = coefficient_of_lift * dynamic_term * definition.area * unit_force * stream_up;

    // Ground effect
    let ground_hit = probe.cast(&position, &-frame.up, config.ground_probe_distance);
    let ground_effect = if ground_hit.is_some() {
        config.ground_effect_factor
    } else {
        1.0
    };

    // Drag
    let drag_axis = match config.drag_axis {
        DragAxis::StreamUp => stream_up,
        DragAxis::StreamForward => stream_forward,
    };
    let induced_drag = ground_effect * (coefficient_of_lift.powi(2) * dynamic_term)
        / (PI * definition.aspect_ratio * definition.efficiency)
        * unit_force
        * drag_axis;
    let form_coefficient = curves.form_drag.evaluate(alpha)
        + input.deflection.abs() * definition.deflection_drag
        + definition.skin_friction;
    let form_drag = form_coefficient * dynamic_term * unit_force * drag_axis;

    let breakdown = ForceBreakdown {
        lift,
        induced_drag,
        form_drag,
    };
    let force = breakdown.total() * config.force_scale * input.delta_time;

    let segments = if config.emit_debug_segments {
        debug_segments(input, &frame, &breakdown, &force, ground_hit.as_ref())
    } else {
        Vec::new()
    };

    AerodynamicOutput {
        force,
        application_point: position,
        breakdown,
        airflow: Some(AirflowSample {
            altitude,
            density,
            forward_speed,
            vertical_speed,
            lateral_speed,
            alpha,
            stream_speed,
            stream_forward,
            stream_up,
            coefficient_of_lift,
            ground_hit,
        }),
        segments,
    }
}

fn debug_segments(
    input: &SurfaceInput,
    frame: &SurfaceFrame,
    breakdown: &ForceBreakdown,
    applied: &Vector3<f64>,
    ground_hit: Option<&ProbeHit>,
) -> Vec<DebugSegment> {
    let position = input.kinematics.position;
    // A massless body collapses the force segments onto their start points
    let inv_mass = if input.body_mass > 0.0 {
        1.0 / input.body_mass
    } else {
        0.0
    };

    let mut segments = Vec::with_capacity(4);
    if let Some(hit) = ground_hit {
        segments.push(DebugSegment::new(
            position,
            hit.location,
            SegmentCategory::GroundProbe,
        ));
    }
    segments.push(DebugSegment::new(
        position,
        position + breakdown.lift * inv_mass,
        SegmentCategory::Lift,
    ));
    segments.push(DebugSegment::new(
        position + frame.right * DRAG_SEGMENT_OFFSET,
        position + breakdown.drag() * inv_mass,
        SegmentCategory::Drag,
    ));
    segments.push(DebugSegment::new(
        position + frame.right * TOTAL_SEGMENT_OFFSET,
        position + applied * inv_mass,
        SegmentCategory::Total,
    ));
    segments
}
