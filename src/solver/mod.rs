//! Numerical solvers
//!
//! This module provides traits and implementations for numerical solvers.
//! A numerical solver applies a numerical method to the equations provided by
//! a physical model within a specific scenario.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (discrete operator on a mesh)
//!    - Domain boundaries (Dirichlet values from an exact solution)
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Target time
//!    - Time step control (stability-limited or fixed)
//!    - Optional snapshots
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Advances the caller's field in place
//!    - Independent of physics
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `TimeStepControl`, `SolverConfiguration`,
//!   `SimulationResult`
//! - **`boundary`**: `DomainBoundaries` and the domain `Edge`s
//! - **`scenario`**: `Scenario`, model + boundaries
//! - **`methods`**: `EulerSolver`
//!
//! # Quick Start Example
//!
//! ```rust
//! use convdiff_rs::mesh::{Mesh, MeshConfig};
//! use convdiff_rs::models::ConvectionDiffusion2d;
//! use convdiff_rs::physics::{PhysicalModel, Physics};
//! use convdiff_rs::solver::{DomainBoundaries, EulerSolver, Scenario, Solver, SolverConfiguration};
//!
//! // 1. Create scenario (WHAT to solve)
//! let mesh = Mesh::new(&MeshConfig::uniform(51)).unwrap();
//! let model = ConvectionDiffusion2d::new(mesh, Physics::default());
//! let boundaries = DomainBoundaries::dirichlet(Box::new(model.exact_solution()));
//! let mut field = model.setup_initial_state();
//! let scenario = Scenario::new(Box::new(model), boundaries);
//!
//! // 2. Create configuration (HOW to solve)
//! let config = SolverConfiguration::time_evolution(0.25).with_safety_factor(0.9);
//!
//! // 3. Solve
//! let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();
//! println!("Simulation completed in {} steps", result.steps);
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │  Physical Model │  (operator + mesh)
//! └────────┬────────┘
//!          │
//!          ├──────────────┐
//!          │              │
//! ┌────────▼────────┐ ┌──▼──────────────┐
//! │ Domain          │ │ Scenario        │ ← WHAT to solve
//! │ Boundaries      │ │ (model + bounds)│
//! └─────────────────┘ └────────┬────────┘
//!                              │
//!                     ┌────────▼─────────────┐
//!                     │ Solver Configuration │ ← HOW to solve
//!                     │ (time + step policy) │
//!                     └────────┬─────────────┘
//!                              │
//!                     ┌────────▼────────┐
//!                     │ Numerical Solver│ ← The method
//!                     │ (Forward Euler) │
//!                     └────────┬────────┘
//!                              │
//!                     ┌────────▼────────────┐
//!                     │ Field (in place) +  │ ← The solution
//!                     │ Simulation Result   │
//!                     └─────────────────────┘
//! ```
//!
//! # Error Handling
//!
//! Solvers return [`Result`](crate::error::Result). Common errors:
//! - Invalid configuration (NaN final time, safety factor out of range)
//! - Field shape different from the mesh
//! - Fixed time step above the stability limit
//! - Numerical instability (NaN or Inf values)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod boundary;
mod scenario;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    DEFAULT_SAFETY_FACTOR,
    SimulationResult,
    Snapshot,
    Solver,
    SolverConfiguration,
    TimeStepControl,
};

pub use boundary::{DomainBoundaries, Edge};
pub use scenario::Scenario;

pub use methods::EulerSolver;
pub use methods::euler::MAX_STEPS;

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{ConvectionError, Result};
use crate::physics::ConcentrationField;

/// Validate a field for numerical issues
///
/// Checks that the field does not contain NaN or Inf values, which would
/// indicate numerical instability.
///
/// # Arguments
///
/// * `field` - Field to validate
/// * `step` - Current time step (for error reporting)
/// * `time` - Time reached by the field
pub(crate) fn validate_state(field: &ConcentrationField, step: usize, time: f64) -> Result<()> {
    // NaN can arise from 0/0, Inf - Inf, or other undefined operations
    if field.has_nan() {
        return Err(ConvectionError::NumericalInstability {
            step,
            time,
            reason: "NaN detected in concentration. Try reducing the time step".to_string(),
        });
    }

    // Inf indicates overflow
    if field.has_inf() {
        return Err(ConvectionError::NumericalInstability {
            step,
            time,
            reason: "Infinity detected in concentration. Try reducing the time step".to_string(),
        });
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
