pub mod airfoil;
pub mod curve;
pub mod debug;
pub mod physics;
pub mod spatial;

pub use airfoil::{
    AirfoilConfig, AirfoilCurves, AirfoilDefinition, CurveHandle, DeflectionTable, SocketConfig,
    SocketMount, SurfaceRegistry, SurfaceSockets,
};
pub use curve::{Interpolation, KeyframeCurve, ResponseCurve};
pub use debug::{AeroDebugSegments, DebugSegment, SegmentCategory};
pub use physics::{Force, ForceCategory, PhysicsComponent};
pub use spatial::SpatialComponent;
