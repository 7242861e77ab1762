use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// What a debug segment illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentCategory {
    /// Surface to ground probe hit
    GroundProbe,
    Lift,
    /// Induced plus form drag
    Drag,
    /// Final scaled force
    Total,
}

/// Line segment for diagnostics; has no physical effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugSegment {
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
    pub category: SegmentCategory,
}

impl DebugSegment {
    pub fn new(start: Vector3<f64>, end: Vector3<f64>, category: SegmentCategory) -> Self {
        Self {
            start,
            end,
            category,
        }
    }
}

/// Segments produced for a vehicle during the last tick, keyed by surface.
#[derive(Component, Debug, Clone, Default)]
pub struct AeroDebugSegments {
    pub segments: Vec<(String, DebugSegment)>,
}

impl AeroDebugSegments {
    pub fn of_category(&self, category: SegmentCategory) -> impl Iterator<Item = &DebugSegment> {
        self.segments
            .iter()
            .map(|(_, segment)| segment)
            .filter(move |segment| segment.category == category)
    }
}
