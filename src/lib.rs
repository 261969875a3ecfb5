//! plume-rs: Analytical Contaminant Transport
//!
//! Closed-form and semi-analytical solutions of the advection-dispersion-
//! reaction equation for groundwater releases, plus steady-state mixing
//! solutions for rivers.
//!
//! # Architecture
//!
//! plume-rs is built on two core principles:
//!
//! 1. **One kernel, many sources**
//!    - A single Green kernel covers 1D, 2D and 3D instantaneous releases
//!    - Continuous, area and short-duration sources are built from it by
//!      time integration and superposition
//!
//! 2. **Stateless evaluation**
//!    - Every evaluation is a pure function of its inputs
//!    - Scenario dispatch is an exhaustive match over
//!      (dimensionality, geometry, release)
//!
//! # Quick Start
//!
//! ```rust
//! use plume_rs::prelude::*;
//!
//! # fn main() -> Result<(), TransportError> {
//! // 1. Describe the aquifer and the release
//! let params = TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.0), 0.1)
//!     .with_decay(0.001);
//! let scenario = Scenario::new(
//!     Dimensionality::Two,
//!     SourceGeometry::Area { length: 20.0, width: 10.0 },
//!     Release::ShortDuration { concentration: 100.0, flow: 0.5, duration: 30.0 },
//!     params,
//! )
//! .with_frame(FlowFrame::new(50.0, 50.0, 45.0));
//!
//! // 2. Choose where and when
//! let x: Vec<f64> = (0..=20).map(|i| i as f64 * 10.0).collect();
//! let y: Vec<f64> = (0..=20).map(|i| i as f64 * 10.0).collect();
//! let grid = QueryGrid::mesh_2d(&x, &y);
//!
//! // 3. Evaluate
//! let field = scenario.evaluate(&grid, 180.0)?;
//! assert_eq!(field.shape(), vec![21, 21]);
//!
//! // 4. Summarise against a limit
//! let summary = AreaSummary::from_mesh(&field, cell_area(&x, &y)?, 0.5, 0.01);
//! println!("Exceeded area: {} m²", summary.exceeded_area);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: inputs, query grids and the model trait
//! - [`models`]: kernels, sources and river solutions
//! - [`solver`]: quadrature, point-wise execution and scenario dispatch
//! - [`analysis`]: exceedance and site-boundary summaries
//! - [`config`]: JSON scenario configuration
//! - [`output`]: CSV export and JSON records
//!
//! # Features
//!
//! - `parallel`: evaluate large grids on rayon

// Core modules
pub mod constants;
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

// Outer layers
pub mod analysis;
pub mod config;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use plume_rs::prelude::*;
    //! ```
    pub use crate::analysis::{cell_area, AreaSummary, ProfileSummary};
    pub use crate::config::ScenarioConfig;
    pub use crate::error::TransportError;
    pub use crate::models::{RiverRegime, RiverSteadyState};
    pub use crate::physics::{
        ConcentrationModel,
        Dispersion,
        FieldData,
        FlowFrame,
        QueryGrid,
        Release,
        RiverSteadyParameters,
        TransportParameters,
    };
    pub use crate::solver::{Dimensionality, Scenario, SourceGeometry};
}
