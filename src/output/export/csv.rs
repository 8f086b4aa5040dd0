//! CSV export of simulation results
//!
//! This module writes simulation data to CSV (Comma-Separated Values), which
//! is readable by spreadsheets, Python pandas, MATLAB and most data analysis
//! tools.
//!
//! # Features
//!
//! - **Field export**: one row per mesh node, optionally with the exact
//!   solution and the pointwise error
//! - **Convergence export**: one row per grid of a refinement study
//! - **Metadata support**: optional `#` comment header with run parameters
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: shape mismatch, empty data, NaN / Inf values
//!
//! # Quick Example
//!
//! ```rust
//! use convdiff_rs::mesh::{Mesh, MeshConfig};
//! use convdiff_rs::output::export::{CsvExporter, Exporter};
//! use convdiff_rs::physics::ConcentrationField;
//!
//! let mesh = Mesh::new(&MeshConfig::uniform(3)).unwrap();
//! let field = ConcentrationField::uniform(3, 3, 0.5);
//!
//! let file = tempfile::NamedTempFile::new().unwrap();
//! let path = file.path().to_str().unwrap();
//! CsvExporter::default().export_field(&mesh, &field, None, path).unwrap();
//! ```
//!
//! **Output**:
//! ```csv
//! x,y,c
//! 0.000000,0.000000,0.500000
//! 1.000000,0.000000,0.500000
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```csv
//! # Convection-Diffusion Simulation Data
//! # Generated: 2026-10-16T09:30:00+00:00
//! # Model: Convection-Diffusion 2D (central differences)
//! # Solver: Forward Euler
//! # Mesh: [301, 301]
//! # Final Time: 0.5
//! # Time Steps: 556
//! #
//! x,y,c,c_exact,abs_error
//! ...
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};

use thiserror::Error;

use crate::analysis::ConvergenceStudy;
use crate::mesh::Mesh;
use crate::physics::ConcentrationField;
use crate::simulation::SimulationOutcome;

use super::Exporter;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while writing CSV files
#[derive(Debug, Error)]
pub enum CsvError {
    /// Nothing to write
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Field and mesh (or exact field) disagree on shape
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// NaN or Inf in the data
    #[error("Invalid data: NaN or Inf detected in {0}")]
    NonFinite(String),

    /// File creation or write failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with simulation info
/// - `metadata`: Simulation metadata to include
///
/// # Example
///
/// ```rust
/// use convdiff_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(10);
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
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
/// Only fields that are set end up in the header.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    pub model_name: Option<String>,
    pub solver_name: Option<String>,
    /// Mesh shape `[ndim1, ndim2]`
    pub mesh: Option<(usize, usize)>,
    pub final_time: Option<f64>,
    pub time_steps: Option<usize>,
    pub dt: Option<f64>,
    /// L2 and Linf error
    pub error: Option<(f64, f64)>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing a finished run
    pub fn from_outcome(outcome: &SimulationOutcome) -> Self {
        let result = &outcome.result;
        Self {
            model_name: result.get_metadata("model").map(str::to_string),
            solver_name: result.get_metadata("solver").map(str::to_string),
            mesh: Some(outcome.mesh.shape()),
            final_time: Some(result.final_time),
            time_steps: Some(result.steps),
            dt: Some(result.dt),
            error: Some((outcome.error.l2, outcome.error.linf)),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> io::Result<()> {
    writeln!(out, "# Convection-Diffusion Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some((ndim1, ndim2)) = metadata.mesh {
        writeln!(out, "# Mesh: [{}, {}]", ndim1, ndim2)?;
    }
    if let Some(final_time) = metadata.final_time {
        writeln!(out, "# Final Time: {}", final_time)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", time_steps)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(out, "# dt: {:e}", dt)?;
    }
    if let Some((l2, linf)) = metadata.error {
        writeln!(out, "# Error: L2={:.6}, Linf={:.6}", l2, linf)?;
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

/// Writes one delimited row
fn write_row<W: Write>(out: &mut W, values: &[String], delimiter: char) -> io::Result<()> {
    let mut separator = String::new();
    for value in values {
        write!(out, "{}{}", separator, value)?;
        separator = delimiter.to_string();
    }
    writeln!(out)
}

// =============================================================================
// CSV Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    fn open(&self, path: &str) -> Result<BufWriter<File>, CsvError> {
        let mut out = BufWriter::new(File::create(path)?);
        if self.config.include_metadata
            && let Some(metadata) = &self.config.metadata
        {
            write_metadata_header(&mut out, metadata)?;
        }
        Ok(out)
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_field(
        &self,
        mesh: &Mesh,
        field: &ConcentrationField,
        exact: Option<&ConcentrationField>,
        path: &str,
    ) -> Result<(), CsvError> {

        // ============================= Validation =============================

        if field.is_empty() {
            return Err(CsvError::EmptyData("field has no nodes".to_string()));
        }
        if field.shape() != mesh.shape() {
            return Err(CsvError::ShapeMismatch { expected: mesh.shape(), found: field.shape() });
        }
        if !field.is_finite() {
            return Err(CsvError::NonFinite("numerical field".to_string()));
        }
        if let Some(exact) = exact {
            if exact.shape() != mesh.shape() {
                return Err(CsvError::ShapeMismatch { expected: mesh.shape(), found: exact.shape() });
            }
            if !exact.is_finite() {
                return Err(CsvError::NonFinite("exact field".to_string()));
            }
        }

        // ============================= Write ==================================

        let config = &self.config;
        let mut out = self.open(path)?;

        let mut header = vec!["x".to_string(), "y".to_string(), "c".to_string()];
        if exact.is_some() {
            header.push("c_exact".to_string());
            header.push("abs_error".to_string());
        }
        write_row(&mut out, &header, config.delimiter)?;

        let (ndim1, ndim2) = mesh.shape();
        for i in 0..ndim1 {
            for j in 0..ndim2 {
                let (x, y) = mesh.coordinates(i, j);
                let c = field[(i, j)];

                let mut row = vec![format_number(x, config), format_number(y, config), format_number(c, config)];
                if let Some(exact) = exact {
                    let e = exact[(i, j)];
                    row.push(format_number(e, config));
                    row.push(format_number((c - e).abs(), config));
                }
                write_row(&mut out, &row, config.delimiter)?;
            }
        }

        out.flush()?;
        Ok(())
    }

    fn export_convergence(&self, study: &ConvergenceStudy, path: &str) -> Result<(), CsvError> {
        if study.records.is_empty() {
            return Err(CsvError::EmptyData("convergence study has no records".to_string()));
        }
        if study
            .records
            .iter()
            .any(|r| !(r.spacing.is_finite() && r.l2.is_finite() && r.linf.is_finite()))
        {
            return Err(CsvError::NonFinite("convergence records".to_string()));
        }

        let config = &self.config;
        let mut out = self.open(path)?;

        let header = ["points", "spacing", "l2", "linf", "order_l2", "order_linf"].map(String::from);
        write_row(&mut out, &header, config.delimiter)?;

        let orders = study.observed_orders();
        for (k, record) in study.records.iter().enumerate() {
            // No order for the coarsest grid
            let (order_l2, order_linf) = match k.checked_sub(1).and_then(|p| orders.get(p)) {
                Some(order) => (format_number(order.l2, config), format_number(order.linf, config)),
                None => (String::new(), String::new()),
            };

            let row = [
                record.points.to_string(),
                format_number(record.spacing, config),
                format_number(record.l2, config),
                format_number(record.linf, config),
                order_l2,
                order_linf,
            ];
            write_row(&mut out, &row, config.delimiter)?;
        }

        out.flush()?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
