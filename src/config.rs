//! Simulation configuration
//!
//! [`SimulationConfig`] gathers everything a run needs: the mesh, the physical
//! constants, the target time and the time-step policy. Its `Default` is the
//! reference case (301 × 301 nodes on `[0, 2]²`, u = v = 1, Dx = Dy = 0.01,
//! pulse at (0.5, 0.5), integrated to t = 0.5 at 90% of the stability limit).
//!
//! # Example
//!
//! ```rust
//! use convdiff_rs::config::SimulationConfig;
//!
//! let config = SimulationConfig::default()
//!     .with_points(101)
//!     .with_final_time(0.25)
//!     .with_safety_factor(0.5);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.mesh.ndim1, 101);
//! ```

use crate::error::Result;
use crate::mesh::MeshConfig;
use crate::physics::Physics;
use crate::solver::{SolverConfiguration, TimeStepControl};

/// Target time of the reference run
pub const REFERENCE_FINAL_TIME: f64 = 0.5;

/// Everything needed to run one simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Grid definition
    pub mesh: MeshConfig,

    /// Transport coefficients and pulse centre
    pub physics: Physics,

    /// Target time; non-positive values leave the initial field unchanged
    pub final_time: f64,

    /// Step size policy
    pub time_step: TimeStepControl,

    /// Keep a copy of the field every `n` steps
    pub snapshot_interval: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mesh: MeshConfig::default(),
            physics: Physics::default(),
            final_time: REFERENCE_FINAL_TIME,
            time_step: TimeStepControl::default(),
            snapshot_interval: None,
        }
    }
}

impl SimulationConfig {
    /// Builder pattern: square grid with `points` nodes per axis
    pub fn with_points(mut self, points: usize) -> Self {
        self.mesh = self.mesh.with_points(points, points);
        self
    }

    /// Builder pattern: full mesh configuration
    pub fn with_mesh(mut self, mesh: MeshConfig) -> Self {
        self.mesh = mesh;
        self
    }

    /// Builder pattern: physical constants
    pub fn with_physics(mut self, physics: Physics) -> Self {
        self.physics = physics;
        self
    }

    /// Builder pattern: target time
    pub fn with_final_time(mut self, final_time: f64) -> Self {
        self.final_time = final_time;
        self
    }

    /// Builder pattern: stability-limited step with the given factor
    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        self.time_step = TimeStepControl::StabilityLimited { safety_factor };
        self
    }

    /// Builder pattern: fixed time step
    pub fn with_fixed_dt(mut self, dt: f64) -> Self {
        self.time_step = TimeStepControl::Fixed { dt };
        self
    }

    /// Builder pattern: snapshot every `interval` steps
    pub fn with_snapshots(mut self, interval: usize) -> Self {
        self.snapshot_interval = Some(interval);
        self
    }

    /// Solver part of the configuration
    pub fn solver_configuration(&self) -> SolverConfiguration {
        SolverConfiguration {
            final_time: self.final_time,
            time_step: self.time_step,
            snapshot_interval: self.snapshot_interval,
        }
    }

    /// Check every part of the configuration
    pub fn validate(&self) -> Result<()> {
        self.mesh.validate()?;
        self.physics.validate()?;
        self.solver_configuration().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvectionError;

    #[test]
    fn test_default_is_reference_case() {
        let config = SimulationConfig::default();

        assert_eq!((config.mesh.ndim1, config.mesh.ndim2), (301, 301));
        assert_eq!(config.final_time, 0.5);
        assert_eq!(config.physics, Physics::default());
        assert_eq!(config.time_step, TimeStepControl::StabilityLimited { safety_factor: 0.9 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = SimulationConfig::default()
            .with_points(51)
            .with_fixed_dt(1e-3)
            .with_snapshots(10);

        let solver = config.solver_configuration();
        assert_eq!(config.mesh.ndim2, 51);
        assert_eq!(solver.time_step, TimeStepControl::Fixed { dt: 1e-3 });
        assert_eq!(solver.snapshot_interval, Some(10));
    }

    #[test]
    fn test_invalid_parts_rejected() {
        let too_coarse = SimulationConfig::default().with_points(1);
        assert!(matches!(too_coarse.validate(), Err(ConvectionError::InvalidMesh(_))));

        let bad_factor = SimulationConfig::default().with_safety_factor(2.0);
        assert!(matches!(bad_factor.validate(), Err(ConvectionError::InvalidConfiguration(_))));

        let bad_time = SimulationConfig::default().with_final_time(f64::INFINITY);
        assert!(bad_time.validate().is_err());
    }
}
