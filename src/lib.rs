//! convdiff-rs: 2D Convection-Diffusion Verification Solver
//!
//! Solves the constant-coefficient convection-diffusion equation on a uniform
//! rectangular grid and measures the discrete L2 / Linf error against the
//! closed-form travelling Gaussian.
//!
//! # Architecture
//!
//! convdiff-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define the spatial operator (what to solve)
//!    - Numerical solvers provide the time integration (how to solve)
//!
//! 2. **Explicit configuration**
//!    - Every constant of the reference case lives in [`config::SimulationConfig`]
//!    - Invalid meshes, physics or step sizes are reported as
//!      [`error::ConvectionError`] values
//!
//! # Quick Start
//!
//! ```rust
//! use convdiff_rs::prelude::*;
//!
//! // 1. Configure the run (reference case on a coarser grid)
//! let config = SimulationConfig::default().with_points(101).with_final_time(0.1);
//!
//! // 2. Run simulation
//! let outcome = simulation::run(&config).unwrap();
//!
//! // 3. Access results
//! println!("The Mesh Grid, [{}, {}]", outcome.mesh.ndim1(), outcome.mesh.ndim2());
//! println!("The Norm Error, {}", outcome.error);
//! ```
//!
//! # Modules
//!
//! - [`mesh`]: Uniform grid and coordinates
//! - [`physics`]: Field type, physical constants, model traits
//! - [`models`]: Convection-diffusion operator and Gaussian exact solution
//! - [`solver`]: Scenario, boundaries and Forward Euler integration
//! - [`analysis`]: Error norms and convergence studies
//! - [`simulation`]: End-to-end driver
//! - [`output`]: CSV export and profile plots

// Core modules
pub mod error;
pub mod mesh;
pub mod physics;

pub mod models;
pub mod solver;

pub mod analysis;
pub mod config;
pub mod simulation;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use convdiff_rs::prelude::*;
    //! ```
    pub use crate::analysis::{evaluate_error, ConvergenceStudy, NormError};
    pub use crate::config::SimulationConfig;
    pub use crate::error::{ConvectionError, Result};
    pub use crate::mesh::{Mesh, MeshConfig};
    pub use crate::models::{ConvectionDiffusion2d, GaussianPulse};
    pub use crate::physics::{AnalyticSolution,
                             ConcentrationField,
                             PhysicalModel,
                             Physics};
    pub use crate::simulation::{self, SimulationOutcome};
    pub use crate::solver::{DomainBoundaries,
                            EulerSolver,
                            Scenario,
                            SimulationResult,
                            Solver,
                            SolverConfiguration,
                            TimeStepControl};
}
