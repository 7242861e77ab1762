use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::components::{
    AeroDebugSegments, AirfoilConfig, DeflectionTable, KeyframeCurve, SurfaceRegistry,
    SurfaceSockets,
};
use crate::config::AerodynamicsConfig;
use crate::utils::CurveKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid vehicle configuration: {0}")]
    ValidationError(String),
}

/// Aerodynamic description of one vehicle as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAeroConfig {
    #[serde(default)]
    pub aerodynamics: AerodynamicsConfig,
    pub surfaces: BTreeMap<String, AirfoilConfig>,
}

impl VehicleAeroConfig {
    /// Reads and validates a vehicle file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&file_contents)?;
        info!(
            "Loaded {} airfoil surfaces from {}",
            config.surfaces.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Rejects missing or malformed curves and non-physical geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.aerodynamics
            .validate()
            .map_err(ConfigError::ValidationError)?;

        for (name, surface) in &self.surfaces {
            validate_surface(name, surface)?;
        }
        Ok(())
    }

    /// Builds the registry of the vehicle's surfaces.
    pub fn registry(&self) -> SurfaceRegistry {
        self.surfaces
            .iter()
            .fold(SurfaceRegistry::new(), |registry, (name, surface)| {
                registry.with_surface(name.clone(), surface.to_definition())
            })
    }

    /// Socket mounts for the surfaces that declare one.
    pub fn sockets(&self) -> SurfaceSockets {
        self.surfaces
            .iter()
            .filter_map(|(name, surface)| surface.socket.map(|socket| (name, socket)))
            .fold(SurfaceSockets::new(), |sockets, (name, socket)| {
                sockets.with_mount(name.clone(), socket.to_mount())
            })
    }

    /// Components to spawn on the vehicle entity, deflections all zero.
    pub fn vehicle_bundle(
        &self,
    ) -> (SurfaceRegistry, DeflectionTable, SurfaceSockets, AeroDebugSegments) {
        (
            self.registry(),
            DeflectionTable::new(),
            self.sockets(),
            AeroDebugSegments::default(),
        )
    }
}

fn validate_surface(name: &str, surface: &AirfoilConfig) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::ValidationError(format!("surface '{}': {}", name, reason));

    for (field, value) in [
        ("area", surface.area),
        ("efficiency", surface.efficiency),
        ("aspect_ratio", surface.aspect_ratio),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(invalid(format!("{} must be positive, got {}", field, value)));
        }
    }
    for (field, value) in [
        ("deflection_drag", surface.deflection_drag),
        ("skin_friction", surface.skin_friction),
    ] {
        if !value.is_finite() {
            return Err(invalid(format!("{} must be finite", field)));
        }
    }

    let curves: [(CurveKind, &Option<KeyframeCurve>); 3] = [
        (CurveKind::Lift, &surface.lift_curve),
        (CurveKind::FormDrag, &surface.form_drag_curve),
        (CurveKind::ControlSurface, &surface.control_surface_curve),
    ];
    for (kind, curve) in curves {
        let curve = curve
            .as_ref()
            .ok_or_else(|| invalid(format!("missing {} curve", kind)))?;
        curve
            .validate()
            .map_err(|reason| invalid(format!("{} curve: {}", kind, reason)))?;
    }
    Ok(())
}
