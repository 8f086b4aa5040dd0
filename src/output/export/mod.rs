//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file.
//!
//! # Available formats
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use convdiff_rs::config::SimulationConfig;
//! use convdiff_rs::output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter};
//! use convdiff_rs::physics::AnalyticSolution;
//! use convdiff_rs::simulation;
//!
//! let outcome = simulation::run(&SimulationConfig::default()).unwrap();
//! let exact = outcome.exact.sample(&outcome.mesh, outcome.result.final_time);
//!
//! let exporter = CsvExporter::new(
//!     CsvConfig::default().with_metadata(CsvMetadata::from_outcome(&outcome)),
//! );
//! exporter.export_field(&outcome.mesh, &outcome.field, Some(&exact), "field.csv").unwrap();
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata};

use crate::analysis::ConvergenceStudy;
use crate::mesh::Mesh;
use crate::physics::ConcentrationField;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the caller
/// can react to the precise failure without downcasting.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a field on its mesh, one record per node.
    ///
    /// With `exact`, each record also carries the exact value and the
    /// absolute pointwise error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the field (or exact field) shape differs from the mesh
    /// - the data contains NaN or Inf
    /// - the path is invalid or the directory does not exist
    fn export_field(
        &self,
        mesh: &Mesh,
        field: &ConcentrationField,
        exact: Option<&ConcentrationField>,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Exports the records of a grid-refinement study with observed orders.
    fn export_convergence(&self, study: &ConvergenceStudy, path: &str) -> Result<(), Self::Error>;
}
