use bevy::log::debug;
use nalgebra::Vector3;

use crate::components::{Force, ForceCategory, PhysicsComponent, SpatialComponent, SurfaceSockets};
use crate::systems::aerodynamics::solver::KinematicSample;

/// Supplies per-surface socket kinematics of the simulated body.
pub trait KinematicsSource {
    fn sample(&self, surface: &str) -> KinematicSample;

    /// Body mass [kg]
    fn mass(&self) -> f64;
}

/// Receives the point forces produced for the body.
pub trait ForceSink {
    fn apply_force_at(&mut self, force: Vector3<f64>, point: Vector3<f64>);
}

impl ForceSink for PhysicsComponent {
    fn apply_force_at(&mut self, force: Vector3<f64>, point: Vector3<f64>) {
        self.add_force(Force {
            vector: force,
            point: Some(point),
            category: ForceCategory::Aerodynamic,
        });
    }
}

/// Sockets rigidly attached to a body described by a [`SpatialComponent`].
pub struct RigidBodyKinematics<'a> {
    pub spatial: &'a SpatialComponent,
    pub sockets: &'a SurfaceSockets,
    pub mass: f64,
}

impl KinematicsSource for RigidBodyKinematics<'_> {
    fn sample(&self, surface: &str) -> KinematicSample {
        let (position, orientation) = match self.sockets.get(surface) {
            Some(mount) => (
                self.spatial.position + self.spatial.attitude * mount.offset,
                self.spatial.attitude * mount.orientation,
            ),
            None => {
                debug!("Surface '{}' has no socket, using the body origin", surface);
                (self.spatial.position, self.spatial.attitude)
            }
        };

        KinematicSample {
            position,
            orientation,
            velocity: self.spatial.velocity_at_point(&position),
        }
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}
