//! Physical models for 2D transport
//!
//! All discrete operators implement [`PhysicalModel`](crate::physics::PhysicalModel).
//! The solver calls `compute_physics` at each time step. Models are responsible
//! for the physics (advection, diffusion, stability bound), the solver for the
//! time integration and the boundary values.
//!
//! # Available Models
//!
//! ## [`ConvectionDiffusion2d`]
//!
//! Constant-coefficient convection-diffusion discretised with second-order
//! central differences.
//!
//! ## [`GaussianPulse`]
//!
//! Closed-form travelling Gaussian, used both as the initial condition of
//! [`ConvectionDiffusion2d`] and as the exact solution that drives the
//! Dirichlet boundaries and the error norms.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod convection_diffusion;
pub mod gaussian;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use convection_diffusion::ConvectionDiffusion2d;
pub use gaussian::GaussianPulse;
