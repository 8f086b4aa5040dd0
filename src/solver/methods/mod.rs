//! Numerical methods for time integration
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The abstract solver interface lives in `solver::traits`, the concrete
//! schemes here. A new scheme is added as a new file without touching the
//! trait or the models.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler with Dirichlet boundaries re-imposed
//!   after every step
//!   - Order: first order in time
//!   - Cost: 1 operator evaluation per step, one scratch field per solve
//!   - Stability: conditional, step chosen from the model limit

pub mod euler;

// Re-exports for convenience
pub use euler::EulerSolver;
