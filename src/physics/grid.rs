//! Query grids
//!
//! A [`QueryGrid`] is the set of points at which a concentration field is
//! requested. It stores one [`FieldData`] per coordinate axis; all components
//! share a variant and shape, and that shape is the shape of every field
//! evaluated on the grid.

use nalgebra::{DMatrix, DVector};
use ndarray::{ArrayD, IxDyn};

use crate::error::TransportError;
use crate::physics::FieldData;

/// Evaluation coordinates (x, optional y, optional z)
///
/// Missing components read as zero, so a 2D or 3D kernel evaluated on a
/// `line` query runs along the plume centre line.
///
/// # Example
///
/// ```rust
/// use plume_rs::physics::QueryGrid;
///
/// // 3 × 2 mesh: rows follow y, columns follow x
/// let grid = QueryGrid::mesh_2d(&[0.0, 10.0, 20.0], &[-5.0, 5.0]);
/// assert_eq!(grid.shape(), vec![2, 3]);
/// assert_eq!(grid.point(1), [0.0, 5.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryGrid {
    x: FieldData,
    y: Option<FieldData>,
    z: Option<FieldData>,
    /// Flattened (storage order) copies used by the point-wise evaluators
    flat: [Vec<f64>; 3],
}

impl QueryGrid {
    /// Build a grid from coordinate components
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` when `y` or `z` differ from `x` in variant or shape.
    pub fn new(
        x: FieldData,
        y: Option<FieldData>,
        z: Option<FieldData>,
    ) -> Result<Self, TransportError> {
        for component in [&y, &z].into_iter().flatten() {
            if !component.same_layout(&x) {
                return Err(TransportError::ShapeMismatch {
                    expected: x.shape(),
                    actual: component.shape(),
                });
            }
        }

        let n = x.len();
        let flat = [
            x.values(),
            y.as_ref().map(FieldData::values).unwrap_or_else(|| vec![0.0; n]),
            z.as_ref().map(FieldData::values).unwrap_or_else(|| vec![0.0; n]),
        ];

        Ok(Self { x, y, z, flat })
    }

    /// Single observation point
    pub fn scalar(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: FieldData::Scalar(x),
            y: Some(FieldData::Scalar(y)),
            z: Some(FieldData::Scalar(z)),
            flat: [vec![x], vec![y], vec![z]],
        }
    }

    /// Distance profile along the local x axis
    pub fn line(x: &[f64]) -> Self {
        let n = x.len();
        Self {
            x: FieldData::from_vec(x.to_vec()),
            y: None,
            z: None,
            flat: [x.to_vec(), vec![0.0; n], vec![0.0; n]],
        }
    }

    /// Paired (x, y) points, e.g. samples along a site boundary
    pub fn scattered_2d(x: &[f64], y: &[f64]) -> Result<Self, TransportError> {
        Self::new(
            FieldData::from_vec(x.to_vec()),
            Some(FieldData::from_vec(y.to_vec())),
            None,
        )
    }

    /// Paired (x, y, z) points
    pub fn scattered_3d(x: &[f64], y: &[f64], z: &[f64]) -> Result<Self, TransportError> {
        Self::new(
            FieldData::from_vec(x.to_vec()),
            Some(FieldData::from_vec(y.to_vec())),
            Some(FieldData::from_vec(z.to_vec())),
        )
    }

    /// Plan-view mesh, `meshgrid(x, y)` convention: row i is `y[i]`, column j is `x[j]`
    pub fn mesh_2d(x_axis: &[f64], y_axis: &[f64]) -> Self {
        let (nx, ny) = (x_axis.len(), y_axis.len());
        let xs = DMatrix::from_fn(ny, nx, |_, j| x_axis[j]);
        let ys = DMatrix::from_fn(ny, nx, |i, _| y_axis[i]);

        let x = FieldData::from_matrix(xs);
        let y = FieldData::from_matrix(ys);
        let flat = [x.values(), y.values(), vec![0.0; nx * ny]];

        Self { x, y: Some(y), z: None, flat }
    }

    /// Volume mesh with shape `[ny, nx, nz]` (`meshgrid(x, y, z)` convention)
    pub fn mesh_3d(x_axis: &[f64], y_axis: &[f64], z_axis: &[f64]) -> Self {
        let shape = IxDyn(&[y_axis.len(), x_axis.len(), z_axis.len()]);
        let xs = ArrayD::from_shape_fn(shape.clone(), |idx| x_axis[idx[1]]);
        let ys = ArrayD::from_shape_fn(shape.clone(), |idx| y_axis[idx[0]]);
        let zs = ArrayD::from_shape_fn(shape, |idx| z_axis[idx[2]]);

        let x = FieldData::from_array(xs);
        let y = FieldData::from_array(ys);
        let z = FieldData::from_array(zs);
        let flat = [x.values(), y.values(), z.values()];

        Self { x, y: Some(y), z: Some(z), flat }
    }

    /// Number of query points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True for a grid without points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Shape shared by every component and every output field
    pub fn shape(&self) -> Vec<usize> {
        self.x.shape()
    }

    /// x component
    pub fn x(&self) -> &FieldData {
        &self.x
    }

    /// y component, if any
    pub fn y(&self) -> Option<&FieldData> {
        self.y.as_ref()
    }

    /// z component, if any
    pub fn z(&self) -> Option<&FieldData> {
        self.z.as_ref()
    }

    /// Coordinates of the point at flat index `index`
    #[inline]
    pub fn point(&self, index: usize) -> [f64; 3] {
        [self.flat[0][index], self.flat[1][index], self.flat[2][index]]
    }

    /// All-zero field with the grid's shape
    pub fn zeros(&self) -> FieldData {
        self.x.zeros_like()
    }

    /// Field with the grid's shape built from values in flat order
    pub fn field(&self, values: Vec<f64>) -> FieldData {
        self.x.with_values(values)
    }
}

impl From<DVector<f64>> for QueryGrid {
    fn from(x: DVector<f64>) -> Self {
        Self::line(x.as_slice())
    }
}
