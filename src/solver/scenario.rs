//! Simulation scenario definition
//!
//! A scenario combines a physical model with boundary conditions.
use crate::error::{ConvectionError, Result};
use crate::mesh::Mesh;
use crate::physics::traits::PhysicalModel;
use crate::solver::boundary::DomainBoundaries;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (spatial operator on its mesh)
/// - Boundary conditions (Dirichlet values on the domain edge)
///
/// # Design
///
/// The same scenario can be solved with different configurations.
/// This is the "WHAT to solve" (not "HOW to solve").
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// Conditions and boundaries
    pub conditions: DomainBoundaries,
}

impl Scenario {

    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, conditions: DomainBoundaries) -> Self {
        Self { model, conditions }
    }

    /// Verifying scenario content
    ///
    /// The model must be defined on a mesh with at least one node per axis
    /// and its stability bound, when present, must be a positive number.
    pub fn validate(&self) -> Result<()> {
        if self.mesh().is_empty() {
            return Err(ConvectionError::InvalidMesh("Scenario mesh has no nodes".to_string()));
        }
        if let Some(limit) = self.model.max_dt()
            && !(limit.is_finite() && limit > 0.0)
        {
            return Err(ConvectionError::NumericalInstability {
                step: 0,
                time: 0.0,
                reason: format!("Model stability limit is not a positive number: {}", limit),
            });
        }
        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Mesh of the model
    pub fn mesh(&self) -> &Mesh {
        self.model.mesh()
    }

    /// Shape of the fields this scenario operates on
    pub fn shape(&self) -> (usize, usize) {
        self.model.shape()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("shape", &self.shape())
            .field("stability limit", &self.model.max_dt())
            .field("Boundaries / conditions", &self.conditions)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
