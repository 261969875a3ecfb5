//! Physical inputs and field containers
//!
//! This module holds the value types every evaluation is built from:
//!
//! - **[`FieldData`]**: scalar / vector / matrix / n-D array container used for
//!   query coordinates and concentration fields alike
//! - **[`QueryGrid`]**: the evaluation coordinates
//! - **[`FlowFrame`]**: source anchor and flow direction (coordinate transform)
//! - **[`TransportParameters`]**, **[`Release`]**: aquifer parameters and
//!   source term
//! - **[`RiverSteadyParameters`]**, **[`ShorelineParameters`]**: surface water
//! - **[`ConcentrationModel`]**: the trait all evaluators implement
//!
//! None of these persist beyond a single call.
//!
//! # Example
//!
//! ```rust
//! use plume_rs::physics::{Dispersion, FlowFrame, QueryGrid, Release, TransportParameters};
//!
//! let params = TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.0), 0.1)
//!     .with_decay(0.001);
//! let release = Release::Instantaneous { mass: 100.0 };
//! let frame = FlowFrame::new(0.0, 0.0, 30.0);
//! let grid = QueryGrid::mesh_2d(&[0.0, 5.0, 10.0], &[-2.0, 0.0, 2.0]);
//!
//! assert!(params.validate(2).is_ok());
//! assert!(release.validate().is_ok());
//! assert_eq!(grid.shape(), vec![3, 3]);
//! # let _ = frame;
//! ```

pub mod data;
pub mod frame;
pub mod grid;
pub mod params;
pub mod traits;

pub use data::FieldData;
pub use frame::FlowFrame;
pub use grid::QueryGrid;
pub use params::{
    Dispersion,
    Release,
    ReleaseKind,
    RiverSteadyParameters,
    ShorelineParameters,
    TransportParameters,
};
pub use traits::ConcentrationModel;

/// Output of every evaluator: one non-negative value per query point
pub type ConcentrationField = FieldData;
