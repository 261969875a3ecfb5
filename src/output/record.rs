//! Persisted calculation records
//!
//! A calculation is stored as a flat parameter map plus named result fields.
//! Each field is flattened in row-major order next to its axis coordinate
//! vectors, so any consumer can rebuild the mesh without knowing how it was
//! evaluated.
//!
//! ```json
//! {
//!   "parameters": { "mass": 100.0, "porosity": 0.3 },
//!   "results": {
//!     "t=100": { "axes": [[0.0, 10.0]], "shape": [2], "values": [0.01, 0.2] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::output::export::ExportError;
use crate::physics::FieldData;

/// One field with its axis coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlattenedField {
    /// Axis coordinates in the order of `shape`
    pub axes: Vec<Vec<f64>>,
    pub shape: Vec<usize>,
    /// Row-major values
    pub values: Vec<f64>,
}

impl FlattenedField {
    /// Flatten `field`, checking it against `axes`
    ///
    /// `axes` follow the field's shape: `[x]` for a profile, `[y, x]` for a
    /// `mesh_2d` field, `[y, x, z]` for a `mesh_3d` field.
    pub fn from_field(field: &FieldData, axes: Vec<Vec<f64>>) -> Result<Self, ExportError> {
        let shape = field.shape();
        let axis_lengths: Vec<usize> = axes.iter().map(Vec::len).collect();

        // A scalar field has an empty shape and carries no axes
        if axis_lengths != shape {
            return Err(ExportError::LengthMismatch(format!(
                "axes {:?} do not match field shape {:?}",
                axis_lengths, shape
            )));
        }

        Ok(Self {
            axes,
            shape,
            values: row_major(field),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn row_major(field: &FieldData) -> Vec<f64> {
    match field {
        FieldData::Matrix(m) => m.transpose().as_slice().to_vec(),
        other => other.values(),
    }
}

/// Inputs and outputs of one calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub parameters: BTreeMap<String, f64>,
    pub results: BTreeMap<String, FlattenedField>,
}

impl CalculationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: add a parameter
    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Store a result field under `name`
    pub fn insert_result(&mut self, name: impl Into<String>, field: FlattenedField) {
        self.results.insert(name.into(), field);
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;
    use tempfile::NamedTempFile;

    #[test]
    fn test_matrix_flattened_row_major() {
        let field = FieldData::from_matrix(DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
        let flat = FlattenedField::from_field(&field, vec![vec![0.0, 1.0], vec![0.0, 5.0, 10.0]]).unwrap();
        assert_eq!(flat.shape, vec![2, 3]);
        assert_eq!(flat.values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_axes_checked() {
        let field = FieldData::from_vec(vec![1.0, 2.0]);
        assert!(FlattenedField::from_field(&field, vec![vec![0.0]]).is_err());
        assert!(FlattenedField::from_field(&FieldData::from_scalar(1.0), vec![]).is_ok());
    }

    #[test]
    fn test_record_file_round_trip() {
        let mut record = CalculationRecord::new()
            .with_parameter("mass", 100.0)
            .with_parameter("porosity", 0.3);
        let field = FieldData::from_vec(vec![0.5, 0.25]);
        record.insert_result("t=100", FlattenedField::from_field(&field, vec![vec![0.0, 10.0]]).unwrap());

        let file = NamedTempFile::new().unwrap();
        record.save(file.path()).unwrap();
        let loaded = CalculationRecord::load(file.path()).unwrap();

        assert_eq!(loaded, record);
        assert!(record.to_json().unwrap().contains("\"porosity\": 0.3"));
    }
}
