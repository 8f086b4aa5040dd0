//! Grid-refinement study
//!
//! Runs the same configuration on a sequence of grids and reports the error
//! norms and the observed order of accuracy between consecutive grids:
//!
//! ```text
//! p_k = log(e_k / e_{k+1}) / log(h_k / h_{k+1})
//! ```
//!
//! With a stability-limited step (`dt ∝ dx²`) the scheme is expected to show
//! p ≈ 2.

use log::info;

use crate::config::SimulationConfig;
use crate::error::{ConvectionError, Result};
use crate::simulation;

/// Error norms measured on one grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceRecord {
    /// Nodes per axis
    pub points: usize,
    /// Grid spacing along x
    pub spacing: f64,
    pub l2: f64,
    pub linf: f64,
}

/// Observed order between two consecutive grids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedOrder {
    pub l2: f64,
    pub linf: f64,
}

/// Results of a refinement study, coarsest grid first
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceStudy {
    pub records: Vec<ConvergenceRecord>,
}

impl ConvergenceStudy {
    /// Run `base` once per entry of `resolutions` (square grids)
    ///
    /// Everything except the grid size is taken from `base`.
    ///
    /// # Errors
    ///
    /// [`InvalidConfiguration`](ConvectionError::InvalidConfiguration) unless
    /// `resolutions` holds at least two strictly increasing values; any error of
    /// the underlying runs is propagated.
    pub fn run(base: &SimulationConfig, resolutions: &[usize]) -> Result<Self> {
        if resolutions.len() < 2 {
            return Err(ConvectionError::InvalidConfiguration(format!(
                "A convergence study needs at least 2 resolutions, got {}",
                resolutions.len()
            )));
        }
        if resolutions.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ConvectionError::InvalidConfiguration(format!(
                "Resolutions must be strictly increasing, got {:?}",
                resolutions
            )));
        }

        let mut records = Vec::with_capacity(resolutions.len());
        for &points in resolutions {
            let outcome = simulation::run(&base.clone().with_points(points))?;
            info!("Convergence study, {} points: {}", points, outcome.error);

            records.push(ConvergenceRecord {
                points,
                spacing: outcome.mesh.dx(),
                l2: outcome.error.l2,
                linf: outcome.error.linf,
            });
        }

        Ok(Self { records })
    }

    /// Observed orders between consecutive records
    pub fn observed_orders(&self) -> Vec<ObservedOrder> {
        self.records
            .windows(2)
            .map(|pair| {
                let (coarse, fine) = (&pair[0], &pair[1]);
                let ratio = (coarse.spacing / fine.spacing).ln();
                ObservedOrder {
                    l2: (coarse.l2 / fine.l2).ln() / ratio,
                    linf: (coarse.linf / fine.linf).ln() / ratio,
                }
            })
            .collect()
    }

    /// Ratios `e_k / e_{k+1}` of the L2 norm
    pub fn l2_ratios(&self) -> Vec<f64> {
        self.records.windows(2).map(|pair| pair[0].l2 / pair[1].l2).collect()
    }
}
