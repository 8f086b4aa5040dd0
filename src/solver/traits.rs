//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - Central enum `TimeStepControl` defines how the step size is chosen
//! - `SolverConfiguration` carries the target time and the step control
//! - `SimulationResult` reports what the integration did; the field itself
//!   is mutated in place and stays owned by the caller

use std::collections::HashMap;

use crate::error::{ConvectionError, Result};
use crate::physics::ConcentrationField;
use crate::solver::scenario::Scenario;

/// Fraction of the stability limit used by default
pub const DEFAULT_SAFETY_FACTOR: f64 = 0.9;

// ============================================================================
// Time step control
// ============================================================================

/// How the solver picks its time step
///
/// # Examples
///
/// ```rust
/// use convdiff_rs::solver::TimeStepControl;
///
/// // 90% of the model's stability limit
/// let control = TimeStepControl::StabilityLimited { safety_factor: 0.9 };
/// assert!(control.validate().is_ok());
///
/// // User-chosen step, checked against the limit at solve time
/// let control = TimeStepControl::Fixed { dt: 1e-3 };
/// assert_eq!(control.name(), "Fixed");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeStepControl {
    /// `dt = safety_factor · max_dt`, computed once before stepping
    ///
    /// `safety_factor` must lie in `(0, 1]`
    StabilityLimited { safety_factor: f64 },

    /// Constant user step; rejected if it exceeds the stability limit
    Fixed { dt: f64 },
}

impl Default for TimeStepControl {
    fn default() -> Self {
        Self::StabilityLimited {
            safety_factor: DEFAULT_SAFETY_FACTOR,
        }
    }
}

impl TimeStepControl {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            TimeStepControl::StabilityLimited { .. } => "StabilityLimited",
            TimeStepControl::Fixed { .. } => "Fixed",
        }
    }

    /// Validate that parameters are meaningful
    pub fn validate(&self) -> Result<()> {
        match self {
            TimeStepControl::StabilityLimited { safety_factor } => {
                if !(*safety_factor > 0.0 && *safety_factor <= 1.0) {
                    return Err(ConvectionError::InvalidConfiguration(format!(
                        "Safety factor must lie in (0, 1], got {}",
                        safety_factor
                    )));
                }
                Ok(())
            }
            TimeStepControl::Fixed { dt } => {
                if !(dt.is_finite() && *dt > 0.0) {
                    return Err(ConvectionError::InvalidConfiguration(format!(
                        "Fixed time step must be positive and finite, got {}",
                        dt
                    )));
                }
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for a time-evolution solve
///
/// A non-positive `final_time` is accepted and turns the solve into a no-op.
///
/// # Examples
///
/// ```rust
/// use convdiff_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::time_evolution(0.5)
///     .with_safety_factor(0.5)
///     .with_snapshots(100);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Target time reached by the last step
    pub final_time: f64,

    /// Step size policy
    pub time_step: TimeStepControl,

    /// Keep a copy of the field every `n` steps (and at the final step)
    pub snapshot_interval: Option<usize>,
}

impl SolverConfiguration {
    /// Stability-limited integration up to `final_time`
    pub fn time_evolution(final_time: f64) -> Self {
        Self {
            final_time,
            time_step: TimeStepControl::default(),
            snapshot_interval: None,
        }
    }

    /// Fixed-step integration up to `final_time`
    pub fn fixed_step(final_time: f64, dt: f64) -> Self {
        Self {
            final_time,
            time_step: TimeStepControl::Fixed { dt },
            snapshot_interval: None,
        }
    }

    /// Builder pattern: set the fraction of the stability limit
    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        self.time_step = TimeStepControl::StabilityLimited { safety_factor };
        self
    }

    /// Builder pattern: record a snapshot every `interval` steps
    pub fn with_snapshots(mut self, interval: usize) -> Self {
        self.snapshot_interval = Some(interval);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.final_time.is_finite() {
            return Err(ConvectionError::InvalidConfiguration(format!(
                "Final time must be finite, got {}",
                self.final_time
            )));
        }
        if self.snapshot_interval == Some(0) {
            return Err(ConvectionError::InvalidConfiguration(
                "Snapshot interval must be greater than 0".to_string(),
            ));
        }
        self.time_step.validate()
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Copy of the field at a given time
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub step: usize,
    pub time: f64,
    pub field: ConcentrationField,
}

/// Summary of a time-evolution solve
///
/// `time_points[0]` is 0 and `time_points[k]` is the time reached after step
/// `k`, so `time_points.len() == steps + 1`.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Times reached, starting at 0
    pub time_points: Vec<f64>,

    /// Number of steps taken
    pub steps: usize,

    /// Nominal step size (the last step may be shorter)
    pub dt: f64,

    /// Time reached by the field
    pub final_time: f64,

    /// Field copies, if requested
    pub snapshots: Vec<Snapshot>,

    /// Free-form diagnostics
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    pub fn new(time_points: Vec<f64>, dt: f64) -> Self {
        let steps = time_points.len().saturating_sub(1);
        let final_time = time_points.last().copied().unwrap_or(0.0);
        Self {
            time_points,
            steps,
            dt,
            final_time,
            snapshots: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Result of a solve that did not move the field
    pub fn unchanged() -> Self {
        Self::new(vec![0.0], 0.0)
    }

    /// Number of recorded time points
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Time integrator for a [`Scenario`]
///
/// The solver advances `state` in place from t = 0 to
/// `config.final_time`. The shape of `state` never changes.
pub trait Solver {
    fn solve(
        &self,
        scenario: &Scenario,
        state: &mut ConcentrationField,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult>;

    fn name(&self) -> &str;
}
