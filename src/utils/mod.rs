pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{AeroError, CurveKind};
pub use math::{attitude_from_degrees, deg_to_rad, lerp, rad_to_deg, rotate_about_axis, safe_normalize};
