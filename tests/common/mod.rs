#![allow(dead_code)]

mod fixtures;

// Re-export
pub use assertions::{assert_output_finite, assert_output_zero, assert_vector_eq};
pub use fixtures::*;
pub use test_app::TestAppBuilder;
