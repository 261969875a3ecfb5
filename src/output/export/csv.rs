//! CSV export of concentration results
//!
//! This module writes evaluated fields to CSV (Comma-Separated Values), which
//! opens in spreadsheets, pandas and most GIS tools.
//!
//! # Features
//!
//! - **Profiles**: distance (or any coordinate) against concentration
//! - **Time series**: one time column and one column per observation point
//! - **Grids**: plan-view meshes in long format (`x, y, concentration`)
//! - **Metadata**: optional `#` comment header with scenario parameters
//! - **Locale**: configurable delimiter and decimal separator
//! - **Validation**: empty data, mismatched lengths, NaN/Inf
//!
//! # Quick Example
//!
//! ```rust,no_run
//! use plume_rs::output::export::{export_profile_csv, CsvConfig, CsvMetadata};
//!
//! let x = vec![0.0, 10.0, 20.0, 30.0];
//! let c = vec![0.0, 0.5, 1.0, 0.5];
//!
//! let metadata = CsvMetadata {
//!     scenario: Some("1D point instantaneous".to_string()),
//!     time: Some(100.0),
//!     ..Default::default()
//! };
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_profile_csv(&x, &c, "profile.csv", Some(&config)).unwrap();
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! # Contaminant Transport Evaluation
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Scenario: 1D point instantaneous
//! # Time: 100
//! #
//! Distance (m),Concentration (mg/L)
//! 0.000000,0.000000
//! 10.000000,0.500000
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::output::export::{check_series, ExportError};
use crate::physics::FieldData;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use plume_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.decimal_separator, '.');
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    pub metadata: Option<CsvMetadata>,

    /// Header of the coordinate column of a profile (default: "Distance (m)")
    pub coordinate_header: String,

    /// Header of the time column of a series (default: "Time (d)")
    pub time_header: String,

    /// Header of concentration columns (default: "Concentration (mg/L)")
    pub concentration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            coordinate_header: "Distance (m)".to_string(),
            time_header: "Time (d)".to_string(),
            concentration_header: "Concentration (mg/L)".to_string(),
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter and decimal comma
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Scenario key, e.g. "2D area continuous"
    pub scenario: Option<String>,

    /// Evaluator name
    pub model_name: Option<String>,

    /// Elapsed time of the field
    pub time: Option<f64>,

    pub porosity: Option<f64>,

    pub velocity: Option<f64>,

    pub decay: Option<f64>,

    /// Additional parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    pub fn for_scenario(scenario: &str, time: f64) -> Self {
        Self {
            scenario: Some(scenario.to_string()),
            time: Some(time),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<(), ExportError> {
    writeln!(out, "# Contaminant Transport Evaluation")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(scenario) = &metadata.scenario {
        writeln!(out, "# Scenario: {}", scenario)?;
    }
    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(time) = metadata.time {
        writeln!(out, "# Time: {}", time)?;
    }
    if let Some(porosity) = metadata.porosity {
        writeln!(out, "# Porosity: {}", porosity)?;
    }
    if let Some(u) = metadata.velocity {
        writeln!(out, "# Velocity: {}", u)?;
    }
    if let Some(decay) = metadata.decay {
        writeln!(out, "# Decay: {}", decay)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Create the file and write the optional metadata header
fn open(path: &Path, config: &CsvConfig) -> Result<BufWriter<File>, ExportError> {
    let mut out = BufWriter::new(File::create(path)?);
    if config.include_metadata
        && let Some(metadata) = &config.metadata
    {
        write_metadata_header(&mut out, metadata)?;
    }
    Ok(out)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a concentration profile
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
pub fn export_profile_csv(
    coordinates: &[f64],
    concentrations: &[f64],
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<(), ExportError> {
    // ============================= Validation =============================

    check_series("coordinates", coordinates)?;
    check_series("concentrations", concentrations)?;
    if coordinates.len() != concentrations.len() {
        return Err(ExportError::LengthMismatch(format!(
            "{} coordinates versus {} concentrations",
            coordinates.len(),
            concentrations.len()
        )));
    }

    let default = CsvConfig::default();
    let config = config.unwrap_or(&default);

    // ============================= Write ==================================

    let mut out = open(path.as_ref(), config)?;
    writeln!(
        out,
        "{}{}{}",
        config.coordinate_header, config.delimiter, config.concentration_header
    )?;

    for (x, c) in coordinates.iter().zip(concentrations) {
        writeln!(
            out,
            "{}{}{}",
            format_number(*x, config),
            config.delimiter,
            format_number(*c, config)
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Export concentration histories sharing one time axis
///
/// One column per entry of `series`, headed by the matching entry of `names`.
pub fn export_series_csv(
    times: &[f64],
    series: &[Vec<f64>],
    names: &[&str],
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<(), ExportError> {
    // ============================= Validation =============================

    check_series("times", times)?;
    if series.is_empty() {
        return Err(ExportError::Empty("no concentration series".to_string()));
    }
    if series.len() != names.len() {
        return Err(ExportError::LengthMismatch(format!(
            "{} series versus {} names",
            series.len(),
            names.len()
        )));
    }
    for (values, name) in series.iter().zip(names) {
        if values.len() != times.len() {
            return Err(ExportError::LengthMismatch(format!(
                "series {} has {} values for {} times",
                name,
                values.len(),
                times.len()
            )));
        }
        check_series(name, values)?;
    }

    let default = CsvConfig::default();
    let config = config.unwrap_or(&default);

    // ============================= Write ==================================

    let mut out = open(path.as_ref(), config)?;

    write!(out, "{}", config.time_header)?;
    for name in names {
        write!(out, "{}{}", config.delimiter, name)?;
    }
    writeln!(out)?;

    for (i, t) in times.iter().enumerate() {
        write!(out, "{}", format_number(*t, config))?;
        for values in series {
            write!(out, "{}{}", config.delimiter, format_number(values[i], config))?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

/// Export a plan-view field in long format (`x, y, concentration`)
///
/// `field` must be the `ny × nx` matrix produced on
/// [`QueryGrid::mesh_2d`](crate::physics::QueryGrid::mesh_2d) of the same axes.
/// Rows are written y-major.
pub fn export_grid_csv(
    x_axis: &[f64],
    y_axis: &[f64],
    field: &FieldData,
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<(), ExportError> {
    // ============================= Validation =============================

    check_series("x axis", x_axis)?;
    check_series("y axis", y_axis)?;

    let matrix = field
        .try_as_matrix()
        .ok_or_else(|| ExportError::LengthMismatch(format!("expected a 2D mesh field, got {}", field)))?;

    if matrix.nrows() != y_axis.len() || matrix.ncols() != x_axis.len() {
        return Err(ExportError::LengthMismatch(format!(
            "field is {} × {}, axes are {} × {}",
            matrix.nrows(),
            matrix.ncols(),
            y_axis.len(),
            x_axis.len()
        )));
    }
    if matrix.iter().any(|c| !c.is_finite()) {
        return Err(ExportError::NonFinite("concentration field".to_string()));
    }

    let default = CsvConfig::default();
    let config = config.unwrap_or(&default);

    // ============================= Write ==================================

    let mut out = open(path.as_ref(), config)?;
    let d = config.delimiter;
    writeln!(out, "x (m){}y (m){}{}", d, d, config.concentration_header)?;

    for (i, y) in y_axis.iter().enumerate() {
        for (j, x) in x_axis.iter().enumerate() {
            writeln!(
                out,
                "{}{}{}{}{}",
                format_number(*x, config),
                d,
                format_number(*y, config),
                d,
                format_number(matrix[(i, j)], config)
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;
    use std::fs;
    use tempfile::NamedTempFile;

    fn read(file: &NamedTempFile) -> String {
        fs::read_to_string(file.path()).unwrap()
    }

    #[test]
    fn test_profile_export() {
        let file = NamedTempFile::new().unwrap();
        export_profile_csv(&[0.0, 10.0], &[1.5, 0.25], file.path(), None).unwrap();

        let content = read(&file);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Distance (m),Concentration (mg/L)");
        assert_eq!(lines[1], "0.000000,1.500000");
        assert_eq!(lines[2], "10.000000,0.250000");
    }

    #[test]
    fn test_european_format() {
        let file = NamedTempFile::new().unwrap();
        let config = CsvConfig::european().precision(2);
        export_profile_csv(&[1.5], &[0.25], file.path(), Some(&config)).unwrap();
        assert!(read(&file).contains("1,50;0,25"));
    }

    #[test]
    fn test_metadata_header() {
        let file = NamedTempFile::new().unwrap();
        let mut metadata = CsvMetadata::for_scenario("2D point continuous", 365.0);
        metadata.add_custom("Limit", "0.5 mg/L");
        let config = CsvConfig::default().with_metadata(metadata);

        export_profile_csv(&[0.0], &[1.0], file.path(), Some(&config)).unwrap();
        let content = read(&file);
        assert!(content.starts_with("# Contaminant Transport Evaluation"));
        assert!(content.contains("# Scenario: 2D point continuous"));
        assert!(content.contains("# Time: 365"));
        assert!(content.contains("# Limit: 0.5 mg/L"));
    }

    #[test]
    fn test_profile_validation() {
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(
            export_profile_csv(&[], &[], file.path(), None),
            Err(ExportError::Empty(_))
        ));
        assert!(matches!(
            export_profile_csv(&[0.0, 1.0], &[1.0], file.path(), None),
            Err(ExportError::LengthMismatch(_))
        ));
        assert!(matches!(
            export_profile_csv(&[0.0], &[f64::NAN], file.path(), None),
            Err(ExportError::NonFinite(_))
        ));
    }

    #[test]
    fn test_series_export() {
        let file = NamedTempFile::new().unwrap();
        export_series_csv(
            &[1.0, 2.0],
            &[vec![0.1, 0.2], vec![0.3, 0.4]],
            &["MW-1", "MW-2"],
            file.path(),
            Some(&CsvConfig::default().precision(1)),
        )
        .unwrap();

        let content = read(&file);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["Time (d),MW-1,MW-2", "1.0,0.1,0.3", "2.0,0.2,0.4"]);
    }

    #[test]
    fn test_series_name_mismatch() {
        let file = NamedTempFile::new().unwrap();
        let result = export_series_csv(&[1.0], &[vec![0.1]], &[], file.path(), None);
        assert!(matches!(result, Err(ExportError::LengthMismatch(_))));
    }

    #[test]
    fn test_grid_export() {
        let file = NamedTempFile::new().unwrap();
        // rows follow y, columns follow x
        let field = FieldData::from_matrix(DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
        export_grid_csv(
            &[0.0, 1.0, 2.0],
            &[10.0, 20.0],
            &field,
            file.path(),
            Some(&CsvConfig::default().precision(0)),
        )
        .unwrap();

        let content = read(&file);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "0,10,1");
        assert_eq!(lines[3], "2,10,3");
        assert_eq!(lines[4], "0,20,4");
    }

    #[test]
    fn test_grid_shape_checked() {
        let file = NamedTempFile::new().unwrap();
        let field = FieldData::uniform_matrix(2, 2, 1.0);
        let result = export_grid_csv(&[0.0, 1.0, 2.0], &[0.0, 1.0], &field, file.path(), None);
        assert!(matches!(result, Err(ExportError::LengthMismatch(_))));
    }
}
