//! Common utilities for integration tests
#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ConstantGrowth, ExponentialDecay};
pub use test_helpers::{
    assert_fields_close,
    create_scenario,
    gaussian_scenario,
    relative_error,
};
