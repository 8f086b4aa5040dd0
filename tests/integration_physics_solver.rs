//! Integration tests: physics, solver and analysis modules together
//!
//! These tests run the full pipeline on the Gaussian pulse and on pointwise
//! mock models with known solutions.

use convdiff_rs::analysis::evaluate_error;
use convdiff_rs::config::SimulationConfig;
use convdiff_rs::error::ConvectionError;
use convdiff_rs::physics::{AnalyticSolution, Physics};
use convdiff_rs::simulation;
use convdiff_rs::solver::{EulerSolver, Solver, SolverConfiguration};

mod common;
use common::{assert_fields_close, create_scenario, gaussian_scenario, relative_error};
use common::{ConstantGrowth, ExponentialDecay};

// =================================================================================================
// Reference case
// =================================================================================================

#[test]
fn test_reference_run() {
    let outcome = simulation::run(&SimulationConfig::default()).unwrap();

    println!("The Mesh Grid, [{}, {}]", outcome.mesh.ndim1(), outcome.mesh.ndim2());
    println!("The Norm Error, {}", outcome.error);

    assert_eq!(outcome.mesh.shape(), (301, 301));
    assert_eq!(outcome.result.final_time, 0.5);
    assert!(outcome.error.l2 < 0.01, "L2 = {}", outcome.error.l2);
    assert!(outcome.error.l2 <= outcome.error.linf);
}

#[test]
fn test_norm_error_line() {
    let config = SimulationConfig::default().with_points(41).with_final_time(0.05);
    let outcome = simulation::run(&config).unwrap();

    let line = format!("The Norm Error, {}", outcome.error);
    let expected = format!(
        "The Norm Error, L2={:.6}, Linf={:.6}",
        outcome.error.l2, outcome.error.linf
    );

    assert_eq!(line, expected);
    assert!(!line.contains('<') && !line.contains('>'));
}

#[test]
fn test_numerical_peak_follows_exact_decay() {
    let config = SimulationConfig::default().with_points(201).with_final_time(0.25);
    let outcome = simulation::run(&config).unwrap();

    let expected = outcome.exact.peak_amplitude(0.25);
    let error = relative_error(outcome.field.max(), expected);
    assert!(error < 0.05, "Peak {} vs exact {}", outcome.field.max(), expected);
}

#[test]
fn test_linf_matches_pointwise_maximum() {
    let config = SimulationConfig::default().with_points(61).with_final_time(0.2);
    let outcome = simulation::run(&config).unwrap();

    let exact = outcome.exact.sample(&outcome.mesh, outcome.result.final_time);
    let max_abs = outcome
        .field
        .iter()
        .zip(exact.iter())
        .map(|(c, e)| (c - e).abs())
        .fold(0.0, f64::max);

    assert_eq!(outcome.error.linf, max_abs);
    assert!(outcome.error.l2 >= 0.0);
}

// =================================================================================================
// Solver properties
// =================================================================================================

#[test]
fn test_runs_are_deterministic() {
    let config = SimulationConfig::default().with_points(61).with_final_time(0.2);

    let first = simulation::run(&config).unwrap();
    let second = simulation::run(&config).unwrap();

    assert_eq!(first.field, second.field);
    assert_eq!(first.error, second.error);
}

#[test]
fn test_shape_preserved() {
    let physics = Physics::new(0.5, -0.25, 0.02, 0.01, 1.0, 1.0).unwrap();
    let (scenario, mut field) = gaussian_scenario(33, physics);

    EulerSolver::new()
        .solve(&scenario, &mut field, &SolverConfiguration::time_evolution(0.1))
        .unwrap();

    assert_eq!(field.shape(), (33, 33));
    assert!(field.is_finite());
}

#[test]
fn test_non_positive_final_time_is_noop() {
    let (scenario, mut field) = gaussian_scenario(31, Physics::default());
    let initial = field.clone();

    let result = EulerSolver::new()
        .solve(&scenario, &mut field, &SolverConfiguration::time_evolution(-0.5))
        .unwrap();

    assert_eq!(result.steps, 0);
    assert_eq!(field, initial);

    let error = evaluate_error(scenario.mesh(), scenario.conditions.solution(), 0.0, &field).unwrap();
    assert!(error.linf < 1e-12);
}

#[test]
fn test_fixed_dt_above_limit_is_rejected() {
    // 101 points: every stability bound equals 0.01
    let config = SimulationConfig::default().with_points(101).with_fixed_dt(0.011);

    match simulation::run(&config) {
        Err(ConvectionError::UnstableTimeStep { dt, limit }) => {
            assert_eq!(dt, 0.011);
            assert!((limit - 0.01).abs() < 1e-12);
        }
        other => panic!("expected UnstableTimeStep, got {:?}", other.map(|o| o.error)),
    }
}

#[test]
fn test_tiny_fixed_dt_is_rejected() {
    let config = SimulationConfig::default().with_points(5).with_fixed_dt(1e-300);

    let result = simulation::run(&config);
    assert!(matches!(result, Err(ConvectionError::InvalidConfiguration(_))));
}

#[test]
fn test_fixed_dt_below_limit_runs() {
    let config = SimulationConfig::default().with_points(101).with_fixed_dt(0.005).with_final_time(0.1);
    let outcome = simulation::run(&config).unwrap();

    assert_eq!(outcome.result.steps, 20);
    assert_eq!(outcome.result.final_time, 0.1);
}

// =================================================================================================
// Mock models
// =================================================================================================

#[test]
fn test_euler_is_exact_for_constant_growth() {
    let model = ConstantGrowth::new(6, 2.5);
    let exact = model.solution();
    let (scenario, mut field) = create_scenario(Box::new(model), Box::new(exact));

    let config = SolverConfiguration::fixed_step(2.0, 0.3);
    EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();

    let expected = exact.sample(scenario.mesh(), 2.0);
    assert_fields_close(&field, &expected, 1e-12, "constant growth");
}

#[test]
fn test_euler_with_exponential_decay() {
    let model = ExponentialDecay::new(4, 0.1);
    let exact = model.solution();
    let (scenario, mut field) = create_scenario(Box::new(model), Box::new(exact));

    let config = SolverConfiguration::fixed_step(10.0, 0.01);
    let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();

    assert_eq!(result.time_points.len(), 1001);
    assert!(result.time_points[0].abs() < 1e-10);
    assert_eq!(*result.time_points.last().unwrap(), 10.0);

    // Euler with dt = 0.01 should have ~1% error
    let error = relative_error(field[(1, 1)], exact.evaluate(0.0, 0.0, 10.0));
    assert!(error < 0.02, "Error {} too large", error);
}

#[test]
fn test_stability_limited_step_on_mock() {
    let model = ExponentialDecay::new(4, 4.0);
    let exact = model.solution();
    let (scenario, mut field) = create_scenario(Box::new(model), Box::new(exact));

    // max_dt = 0.5, factor 0.5 → dt = 0.25, 4 steps
    let config = SolverConfiguration::time_evolution(1.0).with_safety_factor(0.5);
    let result = EulerSolver::new().solve(&scenario, &mut field, &config).unwrap();

    assert_eq!(result.steps, 4);
    assert_eq!(result.dt, 0.25);
    // (1 - 4·0.25)^4 = 0
    assert_eq!(field[(1, 1)], 0.0);
}
