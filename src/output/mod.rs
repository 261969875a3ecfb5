//! Output of evaluation results
//!
//! The evaluators themselves never touch files. This module is the outer
//! layer that does:
//! - **Export**: CSV tables for external analysis
//! - **Record**: JSON persistence of parameters and flattened result fields
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── record.rs           ← CalculationRecord / FlattenedField
//! └── export/             ← Data export
//!     ├── mod.rs          ← ExportError
//!     └── csv.rs
//! ```
//!
//! Both accept plain `&[f64]` slices or [`FieldData`](crate::physics::FieldData).

pub mod export;
pub mod record;

pub use export::{
    export_grid_csv,
    export_profile_csv,
    export_series_csv,
    CsvConfig,
    CsvMetadata,
    ExportError,
};
pub use record::{CalculationRecord, FlattenedField};
