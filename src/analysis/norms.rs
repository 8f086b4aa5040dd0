//! Discrete error norms
//!
//! For a numerical field `c` and a reference `c_exact` sampled on the same
//! `ndim1 × ndim2` mesh:
//!
//! ```text
//! L2   = sqrt( Σ (c - c_exact)² / (ndim1 · ndim2) )
//! Linf = max |c - c_exact|
//! ```
//!
//! The L2 norm is the root mean square over all nodes, boundary included, so
//! its value does not grow with the number of nodes. A NaN anywhere in either
//! field makes both norms NaN.

use std::fmt;

use crate::error::{ConvectionError, Result};
use crate::mesh::Mesh;
use crate::physics::{AnalyticSolution, ConcentrationField};

/// Pair of discrete error norms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormError {
    /// Root mean square of the pointwise error
    pub l2: f64,
    /// Largest pointwise error
    pub linf: f64,
}

impl fmt::Display for NormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L2={:.6}, Linf={:.6}", self.l2, self.linf)
    }
}

/// Norms of `field - exact`
///
/// # Errors
///
/// [`ShapeMismatch`](ConvectionError::ShapeMismatch) when the shapes differ,
/// [`InvalidMesh`](ConvectionError::InvalidMesh) for empty fields.
///
/// # Example
///
/// ```rust
/// use convdiff_rs::analysis::norm_error;
/// use convdiff_rs::physics::ConcentrationField;
///
/// let numerical = ConcentrationField::uniform(2, 2, 1.0);
/// let mut exact = ConcentrationField::uniform(2, 2, 1.0);
/// exact[(0, 1)] = 3.0;
///
/// let error = norm_error(&numerical, &exact).unwrap();
/// assert_eq!(error.linf, 2.0);
/// assert_eq!(error.l2, 1.0); // sqrt(4 / 4)
/// ```
pub fn norm_error(field: &ConcentrationField, exact: &ConcentrationField) -> Result<NormError> {
    if field.shape() != exact.shape() {
        return Err(ConvectionError::ShapeMismatch {
            expected: exact.shape(),
            found: field.shape(),
        });
    }
    if field.is_empty() {
        return Err(ConvectionError::InvalidMesh("Cannot measure an empty field".to_string()));
    }

    let (sum_sq, linf) = field
        .iter()
        .zip(exact.iter())
        .map(|(c, e)| (c - e).abs())
        .fold((0.0_f64, 0.0_f64), |(sum, max), d| {
            // f64::max would skip NaN
            let max = if d.is_nan() || d > max { d } else { max };
            (sum + d * d, max)
        });

    Ok(NormError {
        l2: (sum_sq / field.len() as f64).sqrt(),
        linf,
    })
}

/// Norms of `field` against `solution` sampled on `mesh` at time `t`
///
/// The exact field is sampled into an owned temporary; neither `field` nor
/// `mesh` is modified.
pub fn evaluate_error(
    mesh: &Mesh,
    solution: &dyn AnalyticSolution,
    t: f64,
    field: &ConcentrationField,
) -> Result<NormError> {
    mesh.check_shape(field.shape())?;
    let exact = solution.sample(mesh, t);
    norm_error(field, &exact)
}
