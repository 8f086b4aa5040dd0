//! End-to-end driver
//!
//! [`run`] wires the pieces together:
//!
//! ```text
//! SimulationConfig ─► Mesh ─► ConvectionDiffusion2d ─► Scenario ─► EulerSolver
//!                                   │                                  │
//!                                   └── GaussianPulse ── boundaries    ▼
//!                                              └──────────────► evaluate_error
//! ```

use log::info;

use crate::analysis::{evaluate_error, NormError};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::mesh::Mesh;
use crate::models::{ConvectionDiffusion2d, GaussianPulse};
use crate::physics::{ConcentrationField, PhysicalModel};
use crate::solver::{DomainBoundaries, EulerSolver, Scenario, SimulationResult, Solver};

/// Everything produced by one run
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Grid the field lives on
    pub mesh: Mesh,

    /// Numerical field at `result.final_time`
    pub field: ConcentrationField,

    /// Time grid and solver diagnostics
    pub result: SimulationResult,

    /// Error against the exact solution at `result.final_time`
    pub error: NormError,

    /// Exact solution used for boundaries and error
    pub exact: GaussianPulse,
}

/// Run a complete simulation
///
/// # Example
///
/// ```rust
/// use convdiff_rs::config::SimulationConfig;
/// use convdiff_rs::simulation;
///
/// let config = SimulationConfig::default().with_points(81).with_final_time(0.1);
/// let outcome = simulation::run(&config).unwrap();
///
/// assert_eq!(outcome.field.shape(), (81, 81));
/// assert!(outcome.error.l2 < 0.05);
/// ```
pub fn run(config: &SimulationConfig) -> Result<SimulationOutcome> {
    config.validate()?;

    let mesh = Mesh::new(&config.mesh)?;
    let model = ConvectionDiffusion2d::new(mesh.clone(), config.physics);
    let exact = model.exact_solution();

    let mut field = model.setup_initial_state();
    let boundaries = DomainBoundaries::dirichlet(Box::new(exact));
    let scenario = Scenario::new(Box::new(model), boundaries);

    let result = EulerSolver::new().solve(&scenario, &mut field, &config.solver_configuration())?;
    let error = evaluate_error(&mesh, &exact, result.final_time, &field)?;

    info!(
        "Run on [{}, {}] finished at t = {}: {}",
        mesh.ndim1(),
        mesh.ndim2(),
        result.final_time,
        error
    );

    Ok(SimulationOutcome {
        mesh,
        field,
        result,
        error,
        exact,
    })
}
