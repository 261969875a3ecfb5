//! Concentration models
//!
//! All groundwater models implement the
//! [`ConcentrationModel`](crate::physics::ConcentrationModel) trait. They are
//! built from one shared Green kernel and differ only in how the kernel is
//! combined:
//!
//! # Available Models
//!
//! ## [`InstantaneousPoint`]: slug release
//!
//! Mass times the kernel, in 1D, 2D or 3D.
//!
//! ## [`ContinuousPoint`]: constant-rate release
//!
//! Rate times the kernel, integrated over release age by the
//! [`TimeIntegrator`](crate::solver::TimeIntegrator). Used in 2D and 3D.
//!
//! ## [`InletContinuous`]: fixed inlet concentration (1D)
//!
//! Exact erfc solution on a semi-infinite column.
//!
//! ## [`AreaSource`]: rectangular footprint (2D)
//!
//! Equal-share superposition of point kernels over a sub-point grid.
//!
//! ## [`ShortDuration`]: finite release
//!
//! Wraps any continuous model and subtracts the same release delayed by its
//! duration.
//!
//! # Surface water
//!
//! [`RiverSteadyState`] and [`shoreline_plume`] are steady profiles and do
//! not depend on time.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod area;
pub mod continuous_1d;
pub mod kernel;
pub mod point;
pub mod river;
pub mod short_duration;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use area::{AreaRelease, AreaSource};
pub use continuous_1d::InletContinuous;
pub use kernel::{DispersionAxis, GreenKernel};
pub use point::{ContinuousPoint, InstantaneousPoint};
pub use river::{
    shoreline_field,
    shoreline_plume,
    RiverClassification,
    RiverRegime,
    RiverSteadyState,
};
pub use short_duration::ShortDuration;
