use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Forces accumulated on a rigid body during one tick.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    /// [kg]
    pub mass: f64,
    pub forces: Vec<Force>,
}

/// A force in the world frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    /// World-space application point, `None` for the centre of mass
    pub point: Option<Vector3<f64>>,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Custom(String),
}

impl PhysicsComponent {
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            forces: Vec::new(),
        }
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
    }

    /// Sum of all forces of the given category.
    pub fn net_force(&self, category: &ForceCategory) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|f| &f.category == category)
            .fold(Vector3::zeros(), |acc, f| acc + f.vector)
    }

    /// Moment of the forces of `category` about `pivot` (world space).
    ///
    /// Forces without an application point act through the pivot.
    pub fn net_moment_about(&self, category: &ForceCategory, pivot: &Vector3<f64>) -> Vector3<f64> {
        self.forces
            .iter()
            .filter(|f| &f.category == category)
            .filter_map(|f| f.point.map(|p| (p - pivot).cross(&f.vector)))
            .fold(Vector3::zeros(), |acc, m| acc + m)
    }
}
