//! Evaluation machinery
//!
//! This module holds the numerical machinery shared by every evaluator and
//! the dispatcher that picks an evaluator for a scenario.
//!
//! # Core Concepts
//!
//! ## WHAT vs HOW
//!
//! 1. **Scenario** (`Scenario`) - WHAT to evaluate
//!    - Dimensionality, source geometry, release mode
//!    - Transport parameters and flow frame
//!
//! 2. **Models** (`crate::models`) - the closed forms and aggregates
//!
//! 3. **Numerics** (this module) - HOW to evaluate
//!    - [`TimeIntegrator`]: fixed-step quadrature over release age
//!    - [`evaluate_points`]: point-wise evaluation, parallel above
//!      [`PARALLEL_THRESHOLD`](crate::constants::PARALLEL_THRESHOLD) with the
//!      `parallel` feature
//!    - [`validate_field`]: NaN / Inf detection on results
//!
//! # Dispatch Table
//!
//! | dimensionality | geometry | release | evaluator |
//! |---|---|---|---|
//! | 1 | point | instantaneous | Green kernel |
//! | 1 | point | continuous | inlet closed form (erfc) |
//! | 1 | point | short | inlet closed form + superposition |
//! | 2 | point | instantaneous | Green kernel + rotation |
//! | 2 | point | continuous / short | quadrature (+ superposition) + rotation |
//! | 2 | area | all | sub-point aggregate (+ superposition) + rotation |
//! | 3 | point | instantaneous | Green kernel |
//! | 3 | point | continuous / short | quadrature (+ superposition) |
//!
//! Every other combination is rejected with
//! [`TransportError::UnsupportedScenario`](crate::error::TransportError).
//!
//! # Quick Start Example
//!
//! ```rust
//! use plume_rs::physics::{Dispersion, FlowFrame, QueryGrid, Release, TransportParameters};
//! use plume_rs::solver::{Dimensionality, Scenario, SourceGeometry};
//!
//! let params = TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.0), 0.1);
//! let scenario = Scenario::new(
//!     Dimensionality::Two,
//!     SourceGeometry::Point,
//!     Release::Continuous { concentration: 100.0, flow: 1.0 },
//!     params,
//! )
//! .with_frame(FlowFrame::new(0.0, 0.0, 45.0));
//!
//! let grid = QueryGrid::mesh_2d(&[0.0, 10.0, 20.0], &[0.0, 10.0]);
//! let field = scenario.evaluate(&grid, 100.0).unwrap();
//! assert_eq!(field.shape(), vec![2, 3]);
//! ```

mod quadrature;
mod scenario;

use crate::error::TransportError;
use crate::physics::FieldData;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_THRESHOLD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use quadrature::TimeIntegrator;
pub use scenario::{Dimensionality, Scenario, ScenarioKey, SourceGeometry};

// =================================================================================================
// Point-wise Execution
// =================================================================================================

/// Evaluate `f(i)` for `i in 0..n`, collecting in index order
///
/// Runs on rayon when compiled with the `parallel` feature and `n` exceeds
/// [`PARALLEL_THRESHOLD`](crate::constants::PARALLEL_THRESHOLD). Results are
/// identical either way: every index is computed independently.
#[cfg(feature = "parallel")]
pub fn evaluate_points<F>(n: usize, f: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    if n > PARALLEL_THRESHOLD {
        (0..n).into_par_iter().map(f).collect()
    } else {
        (0..n).map(f).collect()
    }
}

/// Evaluate `f(i)` for `i in 0..n`, collecting in index order
#[cfg(not(feature = "parallel"))]
pub fn evaluate_points<F>(n: usize, f: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    (0..n).map(f).collect()
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Check a field for NaN or Inf values
///
/// Analytical kernels only produce non-finite values from non-physical
/// inputs (e.g. a zero porosity or section); this turns them into an
/// error naming the scenario and time instead of a silently corrupt field.
pub(crate) fn validate_field(field: &FieldData, label: &str, t: f64) -> Result<(), TransportError> {
    let values = field.values();

    if values.iter().any(|c| c.is_nan()) {
        return Err(TransportError::NonFinite {
            scenario: label.to_string(),
            time: t,
            detail: "NaN detected, check for zero porosity or section".to_string(),
        });
    }

    if values.iter().any(|c| c.is_infinite()) {
        return Err(TransportError::NonFinite {
            scenario: label.to_string(),
            time: t,
            detail: "Infinity detected, check for overflow or division by zero".to_string(),
        });
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
