mod environment;

pub use environment::{GroundPlane, GroundProbe, OpenSky, ProbeHit};
