//! Regulatory-limit summaries
//!
//! Profiles (concentration against distance or time) and plan-view meshes are
//! reduced to the figures a site assessment reports: the maximum
//! concentration and where the field exceeds a quality limit or a detection
//! limit.

use crate::error::TransportError;
use crate::physics::FieldData;

/// Summary of a 1D profile (distance profile or time history)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileSummary {
    /// Maximum concentration (0 for an empty profile)
    pub max: f64,
    /// Coordinate of the maximum
    pub max_at: Option<f64>,
    /// First and last coordinate with concentration > limit
    pub exceedance: Option<(f64, f64)>,
    /// First and last coordinate with concentration > detection limit
    pub affected: Option<(f64, f64)>,
}

impl ProfileSummary {
    /// Summarise `values` sampled at `coords`
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` when the slices differ in length.
    pub fn from_profile(
        coords: &[f64],
        values: &[f64],
        limit: f64,
        detection_limit: f64,
    ) -> Result<Self, TransportError> {
        if coords.len() != values.len() {
            return Err(TransportError::ShapeMismatch {
                expected: vec![coords.len()],
                actual: vec![values.len()],
            });
        }

        let (max, max_at) = coords
            .iter()
            .zip(values.iter())
            .fold((0.0, None), |(best, at), (&x, &c)| {
                if at.is_none() || c > best { (c, Some(x)) } else { (best, at) }
            });

        Ok(Self {
            max,
            max_at,
            exceedance: range_above(coords, values, limit),
            affected: range_above(coords, values, detection_limit),
        })
    }

    /// Length of the exceedance range (0 when never exceeded)
    pub fn exceedance_length(&self) -> f64 {
        self.exceedance.map_or(0.0, |(first, last)| last - first)
    }

    pub fn is_exceeded(&self) -> bool {
        self.exceedance.is_some()
    }
}

/// First and last coordinate whose value is strictly above `threshold`
fn range_above(coords: &[f64], values: &[f64], threshold: f64) -> Option<(f64, f64)> {
    let mut above = coords
        .iter()
        .zip(values.iter())
        .filter(|&(_, &c)| c > threshold)
        .map(|(&x, _)| x);

    let first = above.next()?;
    let last = above.last().unwrap_or(first);
    Some((first, last))
}

/// Summary of a plan-view field on a regular mesh
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaSummary {
    pub max: f64,
    /// Cells with concentration > limit
    pub exceeded_cells: usize,
    /// Cells with concentration > detection limit
    pub affected_cells: usize,
    /// exceeded_cells × cell area
    pub exceeded_area: f64,
    /// affected_cells × cell area
    pub affected_area: f64,
}

impl AreaSummary {
    pub fn from_mesh(field: &FieldData, cell_area: f64, limit: f64, detection_limit: f64) -> Self {
        let values = field.values();
        let exceeded_cells = values.iter().filter(|&&c| c > limit).count();
        let affected_cells = values.iter().filter(|&&c| c > detection_limit).count();

        Self {
            max: field.max().unwrap_or(0.0),
            exceeded_cells,
            affected_cells,
            exceeded_area: exceeded_cells as f64 * cell_area,
            affected_area: affected_cells as f64 * cell_area,
        }
    }
}

/// Area of one cell of a uniform mesh
///
/// # Errors
///
/// `InvalidParameter` when an axis has fewer than two coordinates.
pub fn cell_area(x_axis: &[f64], y_axis: &[f64]) -> Result<f64, TransportError> {
    match (x_axis, y_axis) {
        ([x0, x1, ..], [y0, y1, ..]) => Ok(((x1 - x0) * (y1 - y0)).abs()),
        _ => Err(TransportError::invalid(
            "mesh axes",
            "need at least two coordinates per axis",
        )),
    }
}
