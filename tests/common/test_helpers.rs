//! Helper functions for integration tests

use convdiff_rs::mesh::{Mesh, MeshConfig};
use convdiff_rs::models::ConvectionDiffusion2d;
use convdiff_rs::physics::{AnalyticSolution, ConcentrationField, PhysicalModel, Physics};
use convdiff_rs::solver::{DomainBoundaries, Scenario};

/// Assert that two fields are close (within tolerance) at every node
pub fn assert_fields_close(
    field1: &ConcentrationField,
    field2: &ConcentrationField,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(field1.shape(), field2.shape(), "{}: Dimension mismatch", message);

    for (k, (&v1, &v2)) in field1.iter().zip(field2.iter()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, k, diff, tolerance
        );
    }
}

/// Scenario from a model and its exact solution, plus the initial field
pub fn create_scenario(
    model: Box<dyn PhysicalModel>,
    solution: Box<dyn AnalyticSolution>,
) -> (Scenario, ConcentrationField) {
    let initial = model.setup_initial_state();
    let scenario = Scenario::new(model, DomainBoundaries::dirichlet(solution));
    (scenario, initial)
}

/// Gaussian pulse scenario on a `points × points` reference grid
pub fn gaussian_scenario(points: usize, physics: Physics) -> (Scenario, ConcentrationField) {
    let mesh = Mesh::new(&MeshConfig::uniform(points)).unwrap();
    let model = ConvectionDiffusion2d::new(mesh, physics);
    let exact = model.exact_solution();
    create_scenario(Box::new(model), Box::new(exact))
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
