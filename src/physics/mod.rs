//! Physical models
//!
//! This module provides the data model of the transport problem and the
//! traits through which physics is exposed to the numerics.
//!
//! # Core Concepts
//!
//! - **Physics**: immutable constants `(u, v, Dx, Dy, x0, y0)`
//! - **ConcentrationField**: dense 2D scalar field on the mesh index space
//! - **PhysicalModel**: discrete spatial operator `dc/dt = f(c)`
//! - **AnalyticSolution**: closed-form `c(x, y, t)` for boundaries and errors
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (spatial operator, stability bound)
//! - The solver provides the **method** to integrate them (time stepping)
//!
//! # Example
//!
//! ```rust
//! use convdiff_rs::mesh::{Mesh, MeshConfig};
//! use convdiff_rs::models::ConvectionDiffusion2d;
//! use convdiff_rs::physics::{PhysicalModel, Physics};
//!
//! let mesh = Mesh::new(&MeshConfig::uniform(51)).unwrap();
//! let model = ConvectionDiffusion2d::new(mesh, Physics::default());
//!
//! let initial_state = model.setup_initial_state();
//! let mut rhs = initial_state.clone();
//! model.compute_physics(&initial_state, &mut rhs);
//! ```

// module declaration
pub mod data;
pub mod params;
pub mod traits;

// re-export commonly used types for convenience
pub use data::ConcentrationField;
pub use params::Physics;
pub use traits::{AnalyticSolution, PhysicalModel};
