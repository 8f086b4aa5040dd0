//! Accuracy analysis
//!
//! - [`norms`]: L2 / Linf error of a numerical field against an exact solution
//! - [`convergence`]: grid-refinement studies and observed order of accuracy

pub mod convergence;
pub mod norms;

pub use convergence::{ConvergenceRecord, ConvergenceStudy, ObservedOrder};
pub use norms::{evaluate_error, norm_error, NormError};
