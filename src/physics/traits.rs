//! Physical model traits
//!
//! This module defines the two seams between the physics and the numerics:
//! - `PhysicalModel`: the discrete spatial operator of a PDE on a mesh
//! - `AnalyticSolution`: a closed-form solution used for boundary values and
//!   for measuring the error of a numerical run

use crate::mesh::Mesh;
use crate::physics::data::ConcentrationField;

// ==================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for semi-discretised physical models
///
/// # Responsibility
/// Computes the right-hand side `f(c)` of `dc/dt = f(c)` on a mesh.
/// Does NOT integrate it in time (that's the Solver's job).
///
/// The model provides the "physics" (spatial operator), the Solver provides
/// the "numerics" (time stepping and boundary enforcement).
pub trait PhysicalModel: Send + Sync {

    /// Mesh the model is discretised on
    fn mesh(&self) -> &Mesh;

    /// Shape of the fields the model operates on
    ///
    /// Used by the solver to allocate its scratch buffer
    fn shape(&self) -> (usize, usize) {
        self.mesh().shape()
    }

    /// Computes the physics at a given state
    ///
    /// # Arguments
    /// * `state` - Current field, same shape as the mesh
    /// * `rhs` - Output buffer receiving `dc/dt` on interior nodes
    ///
    /// # Contract
    ///
    /// - `rhs` is fully overwritten; boundary entries are set to 0
    /// - `state` is only read, so `rhs` never aliases it
    fn compute_physics(&self, state: &ConcentrationField, rhs: &mut ConcentrationField);

    /// Creates the initial field for this model
    fn setup_initial_state(&self) -> ConcentrationField;

    /// Largest stable time step of an explicit Euler integration, if bounded
    fn max_dt(&self) -> Option<f64> {
        None
    }

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Analytic Solution Trait
// =================================================================================================

/// Closed-form solution `c(x, y, t)` of a transport problem
///
/// Implementations are pure: evaluating twice at the same point yields the
/// same value.
pub trait AnalyticSolution: Send + Sync {

    /// Value at position `(x, y)` and time `t >= 0`
    fn evaluate(&self, x: f64, y: f64, t: f64) -> f64;

    /// Name of the solution (used for logging and export headers)
    fn name(&self) -> &str;

    /// Sample the solution on every node of `mesh` at time `t`
    fn sample(&self, mesh: &Mesh, t: f64) -> ConcentrationField {
        let (x, y) = (mesh.x(), mesh.y());
        ConcentrationField::from_fn(mesh.ndim1(), mesh.ndim2(), |i, j| {
            self.evaluate(x[(i, j)], y[(i, j)], t)
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
