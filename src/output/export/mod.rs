//! Export of evaluated fields
//!
//! # Available formats
//!
//! | Format | Module | Content |
//! |--------|--------|---------|
//! | CSV    | [`csv`] | profiles, time series, plan-view grids |
//!
//! JSON persistence of a whole calculation lives in
//! [`record`](crate::output::record).
//!
//! # Usage example
//!
//! ```rust,no_run
//! use plume_rs::output::export::{export_profile_csv, CsvConfig};
//!
//! let x = vec![0.0, 10.0, 20.0];
//! let c = vec![1.2, 0.8, 0.1];
//! export_profile_csv(&x, &c, "profile.csv", Some(&CsvConfig::european())).unwrap();
//! ```

pub mod csv;

pub use csv::{
    export_grid_csv,
    export_profile_csv,
    export_series_csv,
    CsvConfig,
    CsvMetadata,
};

use thiserror::Error;

/// Errors raised while exporting results
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to write
    #[error("Empty data: {0}")]
    Empty(String),

    /// Paired series or axes disagree in length
    #[error("Data length mismatch: {0}")]
    LengthMismatch(String),

    /// NaN or Inf in the data
    #[error("Invalid data: NaN or Inf detected in {0}")]
    NonFinite(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reject empty or non-finite series
pub(crate) fn check_series(label: &str, values: &[f64]) -> Result<(), ExportError> {
    if values.is_empty() {
        return Err(ExportError::Empty(format!("{} must not be empty", label)));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ExportError::NonFinite(label.to_string()));
    }
    Ok(())
}
