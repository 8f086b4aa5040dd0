//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! After spatial discretisation the transport equation becomes a large system
//! of ordinary differential equations, one per mesh node:
//!
//! ```text
//! dc/dt = f(c)
//! ```
//!
//! The Forward Euler scheme approximates the field at t_{n+1} = t_n + h with:
//!
//! ```text
//! c_{n+1} = c_n + h * f(c_n)
//! ```
//!
//! Combined with the central-difference operator of
//! [`ConvectionDiffusion2d`](crate::models::ConvectionDiffusion2d) this is the
//! classical FTCS scheme (Forward in Time, Centred in Space).
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space. With
//!   `dt ∝ dx²` (diffusion-limited step) the global error is O(dx²)
//! - **Stability**: conditional, see [`PhysicalModel::max_dt`](crate::physics::PhysicalModel::max_dt)
//! - **Complexity**: 1 operator evaluation per step
//! - **Memory**: one scratch field, allocated once per solve
//!
//! # Boundary Handling
//!
//! After every update the Dirichlet values of the scenario, evaluated at the
//! new time, are written on the domain edge. The interior is only touched by
//! the operator.
//!
//! # Example
//!
//! ```rust
//! use convdiff_rs::mesh::{Mesh, MeshConfig};
//! use convdiff_rs::models::ConvectionDiffusion2d;
//! use convdiff_rs::physics::{PhysicalModel, Physics};
//! use convdiff_rs::solver::{DomainBoundaries, EulerSolver, Scenario, Solver, SolverConfiguration};
//!
//! let mesh = Mesh::new(&MeshConfig::uniform(41)).unwrap();
//! let model = ConvectionDiffusion2d::new(mesh, Physics::default());
//! let boundaries = DomainBoundaries::dirichlet(Box::new(model.exact_solution()));
//! let mut field = model.setup_initial_state();
//! let scenario = Scenario::new(Box::new(model), boundaries);
//!
//! let config = SolverConfiguration::time_evolution(0.1);
//! let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();
//!
//! assert_eq!(result.final_time, 0.1);
//! assert_eq!(field.shape(), (41, 41));
//! ```

use log::{debug, info, trace, warn};

use crate::error::{ConvectionError, Result};
use crate::physics::ConcentrationField;
use crate::solver;
use crate::solver::{Scenario, SimulationResult, Snapshot, Solver, SolverConfiguration, TimeStepControl};

/// Relative slack when deciding whether `final_time` is a multiple of `dt`
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest number of steps a single solve may take
///
/// The time grid is stored in full, so the step count bounds memory as well
/// as run time.
pub const MAX_STEPS: usize = 10_000_000;

// =================================================================================================
// Time grid helpers
// =================================================================================================

/// Number of steps needed to reach `final_time` with step `dt`
///
/// `ceil(final_time / dt)`, except that a ratio within a relative 1e-9 of an
/// integer is rounded to that integer.
///
/// # Errors
///
/// [`InvalidConfiguration`](ConvectionError::InvalidConfiguration) when the
/// ratio is not finite or the count exceeds [`MAX_STEPS`].
pub(crate) fn step_count(final_time: f64, dt: f64) -> Result<usize> {
    let ratio = final_time / dt;
    // Checked before the cast, which saturates instead of failing
    if !ratio.is_finite() || ratio > 2.0 * MAX_STEPS as f64 {
        return Err(ConvectionError::InvalidConfiguration(format!(
            "Reaching t = {} with dt = {:e} needs more than {} steps",
            final_time, dt, MAX_STEPS
        )));
    }

    let nearest = ratio.round();
    let steps = if (ratio - nearest).abs() <= STEP_COUNT_TOLERANCE * ratio.max(1.0) {
        nearest as usize
    } else {
        ratio.ceil() as usize
    };

    if steps > MAX_STEPS {
        return Err(ConvectionError::InvalidConfiguration(format!(
            "Reaching t = {} with dt = {:e} needs {} steps, more than {}",
            final_time, dt, steps, MAX_STEPS
        )));
    }

    Ok(steps.max(1))
}

/// Time reached after `step` steps, computed from the index
///
/// The last step lands exactly on `final_time`.
#[inline]
pub(crate) fn step_time(step: usize, steps: usize, dt: f64, final_time: f64) -> f64 {
    if step >= steps {
        final_time
    } else {
        (step as f64 * dt).min(final_time)
    }
}

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Algorithm
///
/// 1. Validate configuration, scenario and field shape
/// 2. Choose `dt` from the [`TimeStepControl`] and the model stability limit
/// 3. For each step k = 0, 1, ..., N-1 with `h = t_{k+1} - t_k`:
///    - scratch ← f(c_k)
///    - scratch ← c_k + h·scratch
///    - boundary values at t_{k+1} written into scratch
///    - swap scratch and the caller's field
///    - reject NaN / Inf
/// 4. Return the time grid and diagnostics
///
/// The caller's field is never aliased by the operator output.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use convdiff_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Time step used for `scenario` under `control`
    ///
    /// # Errors
    ///
    /// - [`UnstableTimeStep`](ConvectionError::UnstableTimeStep) when a fixed
    ///   step exceeds the model limit
    /// - [`InvalidConfiguration`](ConvectionError::InvalidConfiguration) when a
    ///   stability-limited step is requested from an unbounded model
    /// - [`NumericalInstability`](ConvectionError::NumericalInstability) when the
    ///   resulting step is not a positive finite number
    pub fn time_step(&self, scenario: &Scenario, control: &TimeStepControl) -> Result<f64> {
        let limit = scenario.model.max_dt();
        if let Some(limit) = limit {
            debug!("Stability limit of {}: dt <= {:e}", scenario.get_model_name(), limit);
        }

        let dt = match *control {
            TimeStepControl::StabilityLimited { safety_factor } => {
                let limit = limit.ok_or_else(|| {
                    ConvectionError::InvalidConfiguration(format!(
                        "{} has no stability limit, use a fixed time step",
                        scenario.get_model_name()
                    ))
                })?;
                safety_factor * limit
            }
            TimeStepControl::Fixed { dt } => {
                if let Some(limit) = limit
                    && dt > limit
                {
                    return Err(ConvectionError::UnstableTimeStep { dt, limit });
                }
                dt
            }
        };

        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConvectionError::NumericalInstability {
                step: 0,
                time: 0.0,
                reason: format!("Computed time step is not a positive number: {}", dt),
            });
        }

        Ok(dt)
    }
}

impl Solver for EulerSolver {

    fn solve(
        &self,
        scenario: &Scenario,
        state: &mut ConcentrationField,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult> {

        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let mesh = scenario.mesh();
        mesh.check_shape(state.shape())?;

        let final_time = config.final_time;
        if final_time <= 0.0 {
            warn!("Final time {} is not positive, field left unchanged", final_time);
            let mut result = SimulationResult::unchanged();
            result.add_metadata("solver", self.name());
            return Ok(result);
        }

        // ====== Step 2: Setup ======

        let dt = self.time_step(scenario, &config.time_step)?;
        let steps = step_count(final_time, dt)?;

        let last_step = final_time - step_time(steps - 1, steps, dt, final_time);
        if last_step < 0.5 * dt {
            warn!(
                "Last step shortened to {:e} (dt = {:e}) to land on t = {}",
                last_step, dt, final_time
            );
        }

        info!(
            "{}: {} on {}x{} nodes, dt = {:e}, {} steps to t = {}",
            self.name(),
            scenario.get_model_name(),
            mesh.ndim1(),
            mesh.ndim2(),
            dt,
            steps,
            final_time
        );

        let (rows, columns) = state.shape();
        let mut scratch = ConcentrationField::zeros(rows, columns);

        let capacity = steps.checked_add(1).ok_or_else(|| {
            ConvectionError::InvalidConfiguration(format!("Step count {} overflows the time grid", steps))
        })?;
        let mut time_points = Vec::with_capacity(capacity);
        time_points.push(0.0);
        let mut snapshots = Vec::new();

        // ====== Step 3: Time Integration ======

        for step in 0..steps {
            let t = step_time(step, steps, dt, final_time);
            let t_next = step_time(step + 1, steps, dt, final_time);
            let h = t_next - t;

            scenario.model.compute_physics(state, &mut scratch);
            scratch.euler_update_from(state, h);
            scenario.conditions.apply(mesh, &mut scratch, t_next)?;
            state.swap(&mut scratch);

            solver::validate_state(state, step + 1, t_next)?;

            time_points.push(t_next);
            trace!("step {}/{}: t = {:.6}", step + 1, steps, t_next);

            if let Some(interval) = config.snapshot_interval
                && ((step + 1) % interval == 0 || step + 1 == steps)
            {
                debug!("Snapshot at step {} (t = {:.6})", step + 1, t_next);
                snapshots.push(Snapshot {
                    step: step + 1,
                    time: t_next,
                    field: state.clone(),
                });
            }
        }

        // ====== Step 4: Build Result ======

        let mut result = SimulationResult::new(time_points, dt);
        result.snapshots = snapshots;

        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("time step control", config.time_step.name());
        result.add_metadata("time steps", &steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("final time", &final_time.to_string());

        info!("{} finished at t = {} after {} steps", self.name(), final_time, steps);

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{Mesh, MeshConfig};
    use crate::models::ConvectionDiffusion2d;
    use crate::physics::{AnalyticSolution, PhysicalModel, Physics};
    use crate::solver::DomainBoundaries;
    use approx::assert_relative_eq;

    // ====== Mock Models for Testing ======

    /// dc/dt = rate on every interior node, no stability limit
    struct ConstantGrowth {
        mesh: Mesh,
        rate: f64,
    }

    impl PhysicalModel for ConstantGrowth {
        fn mesh(&self) -> &Mesh {
            &self.mesh
        }

        fn compute_physics(&self, _state: &ConcentrationField, rhs: &mut ConcentrationField) {
            let (rows, columns) = self.shape();
            rhs.fill(0.0);
            for j in 1..columns - 1 {
                for i in 1..rows - 1 {
                    rhs[(i, j)] = self.rate;
                }
            }
        }

        fn setup_initial_state(&self) -> ConcentrationField {
            let (rows, columns) = self.shape();
            ConcentrationField::zeros(rows, columns)
        }

        fn name(&self) -> &str {
            "Constant Growth"
        }
    }

    /// dc/dt = rate everywhere, which blows up for huge rates
    struct Explosive {
        mesh: Mesh,
    }

    impl PhysicalModel for Explosive {
        fn mesh(&self) -> &Mesh {
            &self.mesh
        }

        fn compute_physics(&self, state: &ConcentrationField, rhs: &mut ConcentrationField) {
            rhs.fill(0.0);
            rhs[(1, 1)] = state[(1, 1)] * 1e300;
        }

        fn setup_initial_state(&self) -> ConcentrationField {
            ConcentrationField::uniform(3, 3, 1e10)
        }

        fn max_dt(&self) -> Option<f64> {
            Some(1.0)
        }

        fn name(&self) -> &str {
            "Explosive"
        }
    }

    struct Zero;

    impl AnalyticSolution for Zero {
        fn evaluate(&self, _x: f64, _y: f64, _t: f64) -> f64 {
            0.0
        }

        fn name(&self) -> &str {
            "Zero"
        }
    }

    fn growth_scenario(points: usize, rate: f64) -> Scenario {
        let mesh = Mesh::new(&MeshConfig::uniform(points)).unwrap();
        Scenario::new(
            Box::new(ConstantGrowth { mesh, rate }),
            DomainBoundaries::dirichlet(Box::new(Zero)),
        )
    }

    fn gaussian_scenario(points: usize) -> (Scenario, ConcentrationField) {
        let mesh = Mesh::new(&MeshConfig::uniform(points)).unwrap();
        let model = ConvectionDiffusion2d::new(mesh, Physics::default());
        let boundaries = DomainBoundaries::dirichlet(Box::new(model.exact_solution()));
        let field = model.setup_initial_state();
        (Scenario::new(Box::new(model), boundaries), field)
    }

    // ====== Time grid ======

    #[test]
    fn test_step_count_exact_multiple() {
        assert_eq!(step_count(1.0, 0.1).unwrap(), 10);
        assert_eq!(step_count(0.5, 0.9 / 900.0).unwrap(), 500);
        assert_eq!(step_count(0.3, 0.1).unwrap(), 3);
    }

    #[test]
    fn test_step_count_rounds_up() {
        assert_eq!(step_count(1.0, 0.3).unwrap(), 4);
        assert_eq!(step_count(0.05, 1.0).unwrap(), 1);
    }

    #[test]
    fn test_step_count_bounded() {
        assert_eq!(step_count(1.0, 1.0 / MAX_STEPS as f64).unwrap(), MAX_STEPS);
        assert!(matches!(step_count(1.0, 1e-300), Err(ConvectionError::InvalidConfiguration(_))));
        assert!(matches!(step_count(f64::MAX, 1e-10), Err(ConvectionError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_tiny_fixed_step_rejected() {
        let scenario = growth_scenario(5, 1.0);
        let mut field = ConcentrationField::zeros(5, 5);
        let before = field.clone();
        let config = SolverConfiguration::fixed_step(1.0, 1e-300);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config);

        assert!(matches!(result, Err(ConvectionError::InvalidConfiguration(_))));
        assert_eq!(field, before);
    }

    #[test]
    fn test_step_time_lands_on_final_time() {
        let steps = step_count(1.0, 0.3).unwrap();
        assert_eq!(step_time(0, steps, 0.3, 1.0), 0.0);
        assert_relative_eq!(step_time(3, steps, 0.3, 1.0), 0.9, epsilon = 1e-15);
        assert_eq!(step_time(steps, steps, 0.3, 1.0), 1.0);
    }

    // ====== Time step selection ======

    #[test]
    fn test_stability_limited_step() {
        let (scenario, _) = gaussian_scenario(101);
        let dt = EulerSolver::new()
            .time_step(&scenario, &TimeStepControl::StabilityLimited { safety_factor: 0.5 })
            .unwrap();
        assert_relative_eq!(dt, 0.005, epsilon = 1e-12);
    }

    #[test]
    fn test_fixed_step_above_limit_rejected() {
        let (scenario, mut field) = gaussian_scenario(101);
        let before = field.clone();
        let config = SolverConfiguration::fixed_step(0.1, 0.02);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config);

        match result {
            Err(ConvectionError::UnstableTimeStep { dt, limit }) => {
                assert_eq!(dt, 0.02);
                assert_relative_eq!(limit, 0.01, epsilon = 1e-12);
            }
            other => panic!("expected UnstableTimeStep, got {:?}", other),
        }
        assert_eq!(field, before);
    }

    #[test]
    fn test_stability_limited_without_limit_rejected() {
        let scenario = growth_scenario(5, 1.0);
        let mut field = ConcentrationField::zeros(5, 5);
        let config = SolverConfiguration::time_evolution(1.0);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config);
        assert!(matches!(result, Err(ConvectionError::InvalidConfiguration(_))));
    }

    // ====== Integration ======

    #[test]
    fn test_constant_growth_is_exact() {
        let scenario = growth_scenario(5, 2.0);
        let mut field = ConcentrationField::zeros(5, 5);
        let config = SolverConfiguration::fixed_step(1.0, 0.3);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();

        assert_eq!(result.steps, 4);
        assert_eq!(result.final_time, 1.0);
        assert_eq!(result.time_points.len(), 5);
        assert_relative_eq!(field[(2, 2)], 2.0, epsilon = 1e-12);
        assert_eq!(field[(0, 2)], 0.0);
        assert_eq!(field[(4, 4)], 0.0);
    }

    #[test]
    fn test_time_points_monotonic() {
        let scenario = growth_scenario(4, 1.0);
        let mut field = ConcentrationField::zeros(4, 4);
        let config = SolverConfiguration::fixed_step(0.7, 0.1);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();

        assert_eq!(result.steps, 7);
        assert!(result.time_points.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(*result.time_points.last().unwrap(), 0.7);
    }

    #[test]
    fn test_non_positive_final_time_is_noop() {
        let (scenario, mut field) = gaussian_scenario(21);
        let before = field.clone();

        for final_time in [0.0, -1.0] {
            let config = SolverConfiguration::time_evolution(final_time);
            let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();
            assert_eq!(result.steps, 0);
            assert_eq!(field, before);
        }
    }

    #[test]
    fn test_nan_final_time_rejected() {
        let (scenario, mut field) = gaussian_scenario(11);
        let config = SolverConfiguration::time_evolution(f64::NAN);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config);
        assert!(matches!(result, Err(ConvectionError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let (scenario, _) = gaussian_scenario(11);
        let mut field = ConcentrationField::zeros(11, 10);
        let config = SolverConfiguration::time_evolution(0.1);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config);
        assert!(matches!(result, Err(ConvectionError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_overflow_detected() {
        let mesh = Mesh::new(&MeshConfig::uniform(3)).unwrap();
        let model = Explosive { mesh };
        let mut field = model.setup_initial_state();
        let scenario = Scenario::new(Box::new(model), DomainBoundaries::dirichlet(Box::new(Zero)));
        let config = SolverConfiguration::fixed_step(1.0, 1.0);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config);

        match result {
            Err(ConvectionError::NumericalInstability { step, time, .. }) => {
                assert_eq!(step, 1);
                assert_eq!(time, 1.0);
            }
            other => panic!("expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_boundaries_follow_exact_solution() {
        let (scenario, mut field) = gaussian_scenario(41);
        let config = SolverConfiguration::time_evolution(0.2);

        EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();

        let mesh = scenario.mesh();
        let exact = scenario.conditions.solution();
        for j in 0..41 {
            let (x, y) = mesh.coordinates(0, j);
            assert_eq!(field[(0, j)], exact.evaluate(x, y, 0.2));
        }
    }

    #[test]
    fn test_snapshots_recorded() {
        let scenario = growth_scenario(4, 1.0);
        let mut field = ConcentrationField::zeros(4, 4);
        let config = SolverConfiguration::fixed_step(1.0, 0.1).with_snapshots(4);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();

        let steps: Vec<usize> = result.snapshots.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![4, 8, 10]);
        assert_relative_eq!(result.snapshots[0].field[(1, 1)], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_metadata() {
        let scenario = growth_scenario(4, 1.0);
        let mut field = ConcentrationField::zeros(4, 4);
        let config = SolverConfiguration::fixed_step(0.5, 0.1);

        let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();

        assert_eq!(result.get_metadata("solver"), Some("Forward Euler"));
        assert_eq!(result.get_metadata("time steps"), Some("5"));
        assert_eq!(result.get_metadata("time step control"), Some("Fixed"));
    }
}
