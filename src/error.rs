//! Error types
//!
//! Every fallible operation of the crate returns [`Result`], whose error side
//! is [`ConvectionError`]. Errors fall in two families:
//!
//! - **Precondition violations**: invalid mesh, physics or solver
//!   configuration, or a field whose shape does not match the mesh. These are
//!   reported when the offending value is constructed or first used.
//! - **Numerical instability**: a time step above the stability limit, or NaN /
//!   Inf values appearing during integration.
//!
//! Allocation failure is not represented: the global allocator aborts the
//! process, which is the intended behaviour for this batch computation.

use thiserror::Error;

/// Errors raised by mesh construction, physics validation and the solver
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvectionError {
    /// Mesh parameters cannot describe a uniform grid
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Physical constants outside their valid range
    #[error("Invalid physics: {0}")]
    InvalidPhysics(String),

    /// Solver or simulation configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A field does not share the shape of the mesh it is used with
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Requested time step exceeds the explicit scheme stability limit
    #[error("Time step {dt:e} exceeds the stability limit {limit:e}")]
    UnstableTimeStep { dt: f64, limit: f64 },

    /// Non-finite values or an unusable time step during integration
    #[error("Numerical instability at step {step} (t = {time}): {reason}")]
    NumericalInstability {
        step: usize,
        time: f64,
        reason: String,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, ConvectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConvectionError::InvalidPhysics("Dx must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid physics: Dx must be positive");

        let err = ConvectionError::ShapeMismatch {
            expected: (3, 3),
            found: (3, 4),
        };
        assert!(err.to_string().contains("(3, 4)"));
    }

    #[test]
    fn test_instability_message_mentions_step() {
        let err = ConvectionError::NumericalInstability {
            step: 12,
            time: 0.25,
            reason: "NaN detected".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("step 12"));
        assert!(message.contains("NaN detected"));
    }
}
