use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Result of a ground probe that hit something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    /// World-space hit point [engine units]
    pub location: Vector3<f64>,
    pub distance: f64,
}

/// Ray query against static world geometry.
pub trait GroundProbe {
    /// Casts from `start` along the unit vector `direction` for at most `max_distance`.
    fn cast(&self, start: &Vector3<f64>, direction: &Vector3<f64>, max_distance: f64)
        -> Option<ProbeHit>;
}

/// A world without static geometry; probes never hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSky;

impl GroundProbe for OpenSky {
    fn cast(&self, _: &Vector3<f64>, _: &Vector3<f64>, _: f64) -> Option<ProbeHit> {
        None
    }
}

/// Flat horizontal ground at a fixed height, the static geometry of the world.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundPlane {
    /// Z coordinate of the ground [engine units]
    pub height: f64,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self { height: 0.0 }
    }
}

impl GroundPlane {
    pub fn at_height(height: f64) -> Self {
        Self { height }
    }
}

impl GroundProbe for GroundPlane {
    fn cast(
        &self,
        start: &Vector3<f64>,
        direction: &Vector3<f64>,
        max_distance: f64,
    ) -> Option<ProbeHit> {
        // Rays parallel to the plane, or pointing away from it, never hit
        let approach = direction.z;
        let above = start.z - self.height;
        if approach.abs() < f64::EPSILON {
            return None;
        }
        let distance = -above / approach;
        if !(0.0..=max_distance).contains(&distance) {
            return None;
        }
        Some(ProbeHit {
            location: start + direction * distance,
            distance,
        })
    }
}
