pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const CEILING_DENSITY: f64 = 0.4; // kg/m^3
pub const CEILING_ALTITUDE: f64 = 15000.0; // m

pub const UNITS_PER_METER: f64 = 100.0; // engine units per metre
pub const UNIT_FORCE_SCALE: f64 = 50.0; // coefficient force -> engine force units

pub const GROUND_PROBE_DISTANCE: f64 = 1000.0; // engine units
pub const GROUND_EFFECT_FACTOR: f64 = 0.65; // induced drag multiplier in ground effect

pub const MIN_STREAM_SPEED: f64 = 1e-4; // m/s, below this the airstream has no direction

// Debug segment offsets along the right axis (engine units)
pub const DRAG_SEGMENT_OFFSET: f64 = 10.0;
pub const TOTAL_SEGMENT_OFFSET: f64 = 20.0;
