//! Field data types
//!
//! This module provides one container for everything the evaluators read and
//! write: query coordinate components and concentration fields. A query can be
//! a single point, a profile, a 2D mesh or a 3D mesh, and the output of every
//! evaluator has exactly the shape of its query.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array, ArrayD, IxDyn};
use std::fmt;


/// Field data container supporting scalar to n-dimensional arrays
///
/// # Storage Types
///
/// - **Scalar**: Single value (one observation point)
/// - **Vector**: 1D array (distance profile, scattered points, boundary samples)
/// - **Matrix**: 2D array (`meshgrid` over x and y, rows follow y)
/// - **Array**: 3D+ multidimensional array (`[ny, nx, nz]` meshes)
///
/// # Flat Order
///
/// [`values`](Self::values) and [`with_values`](Self::with_values) use the
/// storage order of each variant (column-major for `Matrix`, logical row-major
/// for `Array`). Two fields with the same variant and shape therefore line up
/// element by element, which is what the point-wise evaluators rely on.
///
/// # Examples
///
/// ```rust
/// use ndarray::Array;
/// use plume_rs::physics::FieldData;
///
/// // 3D mesh: 20 × 30 × 5 nodes
/// let field = FieldData::from_array(
///     Array::from_elem((20, 30, 5), 0.0).into_dyn()
/// );
/// assert_eq!(field.shape(), vec![20, 30, 5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldData {
    /// Scalar value (0D)
    Scalar(f64),

    /// Vector (1D)
    Vector(DVector<f64>),

    /// Matrix (2D), A[row = y, column = x] for meshes
    Matrix(DMatrix<f64>),

    /// Multidimensional array (3D+)
    Array(ArrayD<f64>),
}

impl FieldData {

    // ======================================= constructors =======================================

    /// Create from scalar
    pub fn from_scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    /// Create from vector
    pub fn from_vec(vector: Vec<f64>) -> Self {
        Self::Vector(DVector::from_vec(vector))
    }

    /// Create from DVector
    pub fn from_vector(vector: DVector<f64>) -> Self {
        Self::Vector(vector)
    }

    /// Create from DMatrix
    pub fn from_matrix(matrix: DMatrix<f64>) -> Self {
        Self::Matrix(matrix)
    }

    /// Create from array
    pub fn from_array(array: ArrayD<f64>) -> Self {
        Self::Array(array)
    }

    /// Create uniform vector
    pub fn uniform_vector(size: usize, value: f64) -> Self {
        Self::Vector(DVector::from_element(size, value))
    }

    /// Create uniform matrix
    pub fn uniform_matrix(rows: usize, columns: usize, value: f64) -> Self {
        Self::Matrix(DMatrix::from_element(rows, columns, value))
    }

    /// Create uniform n-D array from shape
    pub fn uniform_array(shape: &[usize], value: f64) -> Self {
        Self::Array(Array::from_elem(IxDyn(shape), value))
    }

    /// All-zero field with the variant and shape of `self`
    pub fn zeros_like(&self) -> Self {
        match self {
            FieldData::Scalar(_) => FieldData::Scalar(0.0),
            FieldData::Vector(v) => FieldData::Vector(DVector::zeros(v.len())),
            FieldData::Matrix(m) => FieldData::Matrix(DMatrix::zeros(m.nrows(), m.ncols())),
            FieldData::Array(a) => FieldData::Array(ArrayD::zeros(a.raw_dim())),
        }
    }

    // ========================================== Queries ==========================================

    /// Check data is scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Check data is a vector
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    /// Check data is a matrix
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    /// Check data is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Get data dimension
    ///
    /// Returns: 0 (scalar), 1 (vector), 2 (matrix), 3+ (array)
    pub fn ndim(&self) -> usize {
        match self {
            FieldData::Scalar(_) => 0,
            FieldData::Vector(_) => 1,
            FieldData::Matrix(_) => 2,
            FieldData::Array(a) => a.ndim(),
        }
    }

    /// Get shape as a vector
    pub fn shape(&self) -> Vec<usize> {
        match self {
            FieldData::Scalar(_) => vec![],
            FieldData::Vector(v) => vec![v.len()],
            FieldData::Matrix(m) => vec![m.nrows(), m.ncols()],
            FieldData::Array(a) => a.shape().to_vec(),
        }
    }

    /// Get length
    pub fn len(&self) -> usize {
        match self {
            FieldData::Scalar(_) => 1,
            FieldData::Vector(v) => v.len(),
            FieldData::Matrix(m) => m.len(),
            FieldData::Array(a) => a.len(),
        }
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when both fields have the same variant and shape
    pub fn same_layout(&self, other: &FieldData) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.shape() == other.shape()
    }

    /// Largest element, `None` for an empty field
    pub fn max(&self) -> Option<f64> {
        self.values().into_iter().reduce(f64::max)
    }

    /// Smallest element, `None` for an empty field
    pub fn min(&self) -> Option<f64> {
        self.values().into_iter().reduce(f64::min)
    }

    // ======================================== Extractions ========================================

    /// Extract as a scalar (panic if not)
    pub fn as_scalar(&self) -> f64 {
        match self {
            FieldData::Scalar(value) => *value,
            _ => panic!("Not a scalar value"),
        }
    }

    /// Try to extract as a scalar
    pub fn try_as_scalar(&self) -> Option<f64> {
        match self {
            FieldData::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Extract as a DVector (panic if not)
    pub fn as_vector(&self) -> &DVector<f64> {
        match self {
            FieldData::Vector(value) => value,
            _ => panic!("Not a vector value"),
        }
    }

    /// Try to extract as a DVector
    pub fn try_as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            FieldData::Vector(value) => Some(value),
            _ => None,
        }
    }

    /// Extract as a DMatrix (panic if not)
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        match self {
            FieldData::Matrix(value) => value,
            _ => panic!("Not a matrix value"),
        }
    }

    /// Try to extract as a DMatrix
    pub fn try_as_matrix(&self) -> Option<&DMatrix<f64>> {
        match self {
            FieldData::Matrix(value) => Some(value),
            _ => None,
        }
    }

    /// Extract as an array (panic if not)
    pub fn as_array(&self) -> &ArrayD<f64> {
        match self {
            FieldData::Array(value) => value,
            _ => panic!("Not an array value"),
        }
    }

    /// Try to extract as an array
    pub fn try_as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            FieldData::Array(value) => Some(value),
            _ => None,
        }
    }

    // ====================================== Flat access ==========================================

    /// Elements in storage order
    pub fn values(&self) -> Vec<f64> {
        match self {
            FieldData::Scalar(value) => vec![*value],
            FieldData::Vector(v) => v.as_slice().to_vec(),
            FieldData::Matrix(m) => m.as_slice().to_vec(),
            FieldData::Array(a) => a.iter().copied().collect(),
        }
    }

    /// Build a field with the variant and shape of `self` from elements in
    /// storage order.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != self.len()`.
    pub fn with_values(&self, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            self.len(),
            "Value count {} does not match field length {}",
            values.len(),
            self.len()
        );

        match self {
            FieldData::Scalar(_) => FieldData::Scalar(values[0]),
            FieldData::Vector(_) => FieldData::Vector(DVector::from_vec(values)),
            FieldData::Matrix(m) => FieldData::Matrix(DMatrix::from_vec(m.nrows(), m.ncols(), values)),
            FieldData::Array(a) => {
                let array = ArrayD::from_shape_vec(a.raw_dim(), values)
                    .unwrap_or_else(|_| unreachable!("length checked above"));
                FieldData::Array(array)
            }
        }
    }
}

// =================================================================================================
// Display
// =================================================================================================

impl fmt::Display for FieldData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            FieldData::Scalar(_) => "scalar",
            FieldData::Vector(_) => "profile",
            FieldData::Matrix(_) => "plan-view mesh",
            FieldData::Array(_) => "volume mesh",
        };
        let shape = self
            .shape()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" × ");
        if shape.is_empty() {
            write!(f, "{}", kind)
        } else {
            write!(f, "{} [{}]", kind, shape)
        }
    }
}

// ==================== Tests ====================
