use approx::assert_relative_eq;
use nalgebra::Vector3;

/// Assert that every component of a vector is finite
#[track_caller]
pub fn assert_finite(v: &Vector3<f64>, what: &str) {
    assert!(v.iter().all(|x| x.is_finite()), "{} is not finite: {:?}", what, v);
}

/// Assert two vectors are equal to a relative tolerance
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, max_relative: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9, max_relative = max_relative);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9, max_relative = max_relative);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-9, max_relative = max_relative);
}
