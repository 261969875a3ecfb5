//! Common utilities for integration tests

#![allow(dead_code, unused_imports)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{LinearRamp, Saturating};
pub use test_helpers::{
    aquifer,
    assert_all_zero,
    assert_non_negative,
    column,
    continuous,
    continuous_capable,
    init_logging,
    max_abs_difference,
    relative_error,
    river_reach,
    scenario,
    short,
};
