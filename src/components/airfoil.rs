use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::components::curve::{KeyframeCurve, ResponseCurve};
use crate::utils::{attitude_from_degrees, AeroError, CurveKind};

/// Shared handle to a response curve so definitions stay cheap to clone.
pub type CurveHandle = Arc<dyn ResponseCurve>;

/// Aerodynamic properties of one named surface (wing, tailplane, control surface).
#[derive(Clone)]
pub struct AirfoilDefinition {
    /// Reference area (m²).
    pub area: f64,
    /// Span efficiency factor, typically 0.7 - 1.0.
    pub efficiency: f64,
    pub aspect_ratio: f64,
    /// Form drag added per degree of control deflection.
    pub deflection_drag: f64,
    pub skin_friction: f64,
    pub lift_curve: Option<CurveHandle>,
    pub form_drag_curve: Option<CurveHandle>,
    pub control_surface_curve: Option<CurveHandle>,
}

/// Borrowed view of the three curves once they are known to be present.
pub struct AirfoilCurves<'a> {
    pub lift: &'a dyn ResponseCurve,
    pub form_drag: &'a dyn ResponseCurve,
    pub control_surface: &'a dyn ResponseCurve,
}

impl AirfoilDefinition {
    /// A definition with the given geometry and no curves attached.
    pub fn new(
        area: f64,
        efficiency: f64,
        aspect_ratio: f64,
        deflection_drag: f64,
        skin_friction: f64,
    ) -> Self {
        Self {
            area,
            efficiency,
            aspect_ratio,
            deflection_drag,
            skin_friction,
            lift_curve: None,
            form_drag_curve: None,
            control_surface_curve: None,
        }
    }

    pub fn with_lift_curve(mut self, curve: impl ResponseCurve + 'static) -> Self {
        self.lift_curve = Some(Arc::new(curve));
        self
    }

    pub fn with_form_drag_curve(mut self, curve: impl ResponseCurve + 'static) -> Self {
        self.form_drag_curve = Some(Arc::new(curve));
        self
    }

    pub fn with_control_surface_curve(mut self, curve: impl ResponseCurve + 'static) -> Self {
        self.control_surface_curve = Some(Arc::new(curve));
        self
    }

    /// Returns the curves, or the first missing one as an error.
    pub fn curves(&self, surface: &str) -> Result<AirfoilCurves<'_>, AeroError> {
        let missing = |curve| AeroError::MissingCurve {
            surface: surface.to_string(),
            curve,
        };
        Ok(AirfoilCurves {
            control_surface: self
                .control_surface_curve
                .as_deref()
                .ok_or_else(|| missing(CurveKind::ControlSurface))?,
            lift: self
                .lift_curve
                .as_deref()
                .ok_or_else(|| missing(CurveKind::Lift))?,
            form_drag: self
                .form_drag_curve
                .as_deref()
                .ok_or_else(|| missing(CurveKind::FormDrag))?,
        })
    }

    pub fn has_all_curves(&self) -> bool {
        self.lift_curve.is_some()
            && self.form_drag_curve.is_some()
            && self.control_surface_curve.is_some()
    }
}

impl fmt::Debug for AirfoilDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirfoilDefinition")
            .field("area", &self.area)
            .field("efficiency", &self.efficiency)
            .field("aspect_ratio", &self.aspect_ratio)
            .field("deflection_drag", &self.deflection_drag)
            .field("skin_friction", &self.skin_friction)
            .field("lift_curve", &self.lift_curve.is_some())
            .field("form_drag_curve", &self.form_drag_curve.is_some())
            .field("control_surface_curve", &self.control_surface_curve.is_some())
            .finish()
    }
}

/// Serializable form of an [`AirfoilDefinition`], as written in vehicle files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilConfig {
    pub area: f64,
    pub efficiency: f64,
    pub aspect_ratio: f64,
    #[serde(default)]
    pub deflection_drag: f64,
    #[serde(default)]
    pub skin_friction: f64,
    #[serde(default)]
    pub socket: Option<SocketConfig>,
    #[serde(default)]
    pub lift_curve: Option<KeyframeCurve>,
    #[serde(default)]
    pub form_drag_curve: Option<KeyframeCurve>,
    #[serde(default)]
    pub control_surface_curve: Option<KeyframeCurve>,
}

impl AirfoilConfig {
    pub fn to_definition(&self) -> AirfoilDefinition {
        let wrap = |curve: &Option<KeyframeCurve>| {
            curve
                .clone()
                .map(|curve| Arc::new(curve) as CurveHandle)
        };
        AirfoilDefinition {
            area: self.area,
            efficiency: self.efficiency,
            aspect_ratio: self.aspect_ratio,
            deflection_drag: self.deflection_drag,
            skin_friction: self.skin_friction,
            lift_curve: wrap(&self.lift_curve),
            form_drag_curve: wrap(&self.form_drag_curve),
            control_surface_curve: wrap(&self.control_surface_curve),
        }
    }
}

/// Surface name to definition, owned by the vehicle.
#[derive(Component, Debug, Clone, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, AirfoilDefinition>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a surface without validating its curves.
    pub fn insert(&mut self, name: impl Into<String>, definition: AirfoilDefinition) {
        self.surfaces.insert(name.into(), definition);
    }

    pub fn with_surface(mut self, name: impl Into<String>, definition: AirfoilDefinition) -> Self {
        self.insert(name, definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AirfoilDefinition> {
        self.surfaces.get(name)
    }

    /// Like [`SurfaceRegistry::get`] but reports an unknown name as an error.
    pub fn definition(&self, name: &str) -> Result<&AirfoilDefinition, AeroError> {
        self.get(name)
            .ok_or_else(|| AeroError::UnknownSurface(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AirfoilDefinition)> {
        self.surfaces.iter().map(|(name, def)| (name.as_str(), def))
    }
}

/// Current control deflection per surface, in signed degrees.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeflectionTable {
    deflections: HashMap<String, f64>,
}

impl DeflectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the deflection for a surface. No range checks; last write wins.
    pub fn set_deflection(&mut self, surface: impl Into<String>, degrees: f64) {
        self.deflections.insert(surface.into(), degrees);
    }

    /// Deflection of `surface`, zero when it was never set.
    pub fn deflection(&self, surface: &str) -> f64 {
        self.deflections.get(surface).copied().unwrap_or(0.0)
    }

    /// Number of surfaces with a stored deflection.
    pub fn len(&self) -> usize {
        self.deflections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deflections.is_empty()
    }
}

/// Where a surface is attached, relative to the body origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocketMount {
    /// Offset in the body frame [engine units]
    pub offset: Vector3<f64>,
    /// Socket rotation relative to the body
    pub orientation: UnitQuaternion<f64>,
}

impl Default for SocketMount {
    fn default() -> Self {
        Self {
            offset: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl SocketMount {
    pub fn at(offset: Vector3<f64>) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    pub fn with_orientation(mut self, orientation: UnitQuaternion<f64>) -> Self {
        self.orientation = orientation;
        self
    }
}

/// Socket placement as written in vehicle files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocketConfig {
    /// Body-frame offset [engine units]
    #[serde(default = "Vector3::zeros")]
    pub offset: Vector3<f64>,
    /// Roll, pitch and yaw relative to the body [deg]
    #[serde(default)]
    pub rotation: [f64; 3],
}

impl SocketConfig {
    pub fn to_mount(&self) -> SocketMount {
        let [roll, pitch, yaw] = self.rotation;
        SocketMount::at(self.offset).with_orientation(attitude_from_degrees(roll, pitch, yaw))
    }
}

/// Socket mounts of a vehicle's surfaces.
#[derive(Component, Debug, Clone, Default)]
pub struct SurfaceSockets {
    mounts: HashMap<String, SocketMount>,
}

impl SurfaceSockets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, surface: impl Into<String>, mount: SocketMount) {
        self.mounts.insert(surface.into(), mount);
    }

    pub fn with_mount(mut self, surface: impl Into<String>, mount: SocketMount) -> Self {
        self.insert(surface, mount);
        self
    }

    pub fn get(&self, surface: &str) -> Option<&SocketMount> {
        self.mounts.get(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_missing_deflection_defaults_to_zero() {
        let mut table = DeflectionTable::new();
        assert_eq!(table.deflection("elevator"), 0.0);

        table.set_deflection("elevator", 5.0);
        table.set_deflection("elevator", -12.5);
        assert_relative_eq!(table.deflection("elevator"), -12.5);
        assert_eq!(table.deflection("aileron_left"), 0.0);
    }

    #[test]
    fn test_curves_reports_missing_curve() {
        let def = AirfoilDefinition::new(10.0, 0.8, 6.0, 0.0, 0.0)
            .with_lift_curve(KeyframeCurve::constant(0.5))
            .with_control_surface_curve(KeyframeCurve::constant(0.0));

        let err = def.curves("wing").err();
        assert_eq!(
            err,
            Some(AeroError::MissingCurve {
                surface: "wing".to_string(),
                curve: CurveKind::FormDrag,
            })
        );
        assert!(!def.has_all_curves());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = SurfaceRegistry::new()
            .with_surface("wing", AirfoilDefinition::new(16.0, 0.85, 7.0, 0.0, 0.01));

        assert!(registry.get("wing").is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.definition("tail").is_err());
        assert_relative_eq!(registry.definition("wing").unwrap().area, 16.0);
    }

    #[test]
    fn test_config_to_definition_keeps_curves() {
        let config = AirfoilConfig {
            area: 2.0,
            efficiency: 0.9,
            aspect_ratio: 4.0,
            deflection_drag: 0.001,
            skin_friction: 0.005,
            socket: None,
            lift_curve: Some(KeyframeCurve::constant(0.3)),
            form_drag_curve: Some(KeyframeCurve::constant(0.01)),
            control_surface_curve: None,
        };

        let def = config.to_definition();
        assert!(def.lift_curve.is_some());
        assert!(def.control_surface_curve.is_none());
        assert_relative_eq!(def.lift_curve.unwrap().evaluate(12.0), 0.3);
    }

    #[test]
    fn test_socket_config_to_mount() {
        let socket = SocketConfig {
            offset: Vector3::new(-400.0, 0.0, 50.0),
            rotation: [0.0, 0.0, 90.0],
        };
        let mount = socket.to_mount();

        assert_eq!(mount.offset, Vector3::new(-400.0, 0.0, 50.0));
        assert_relative_eq!(
            mount.orientation * Vector3::x(),
            Vector3::y(),
            epsilon = 1e-12
        );
    }
}
