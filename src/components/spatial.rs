use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Component for storing the rigid-body state of a vehicle
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space, Z up [engine units]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [engine units/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// World-space velocity of a point rigidly attached to the body.
    pub fn velocity_at_point(&self, world_point: &Vector3<f64>) -> Vector3<f64> {
        let omega_world = self.attitude * self.angular_velocity;
        self.velocity + omega_world.cross(&(world_point - self.position))
    }
}
