//! Post-processing of evaluated fields
//!
//! - [`exceedance`]: maxima and limit-exceedance ranges/areas
//! - [`boundary`]: concentrations along a site boundary polyline

pub mod boundary;
pub mod exceedance;

pub use boundary::{boundary_maximum, sample_polyline};
pub use exceedance::{cell_area, AreaSummary, ProfileSummary};
