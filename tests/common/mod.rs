#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_finite, assert_vector_eq};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
