//! Mock physical models for testing
//!
//! These models act pointwise on interior nodes and come with their exact
//! solution, which doubles as the Dirichlet boundary value. They isolate the
//! time integration from the spatial operator.

use convdiff_rs::mesh::{Mesh, MeshConfig};
use convdiff_rs::physics::{AnalyticSolution, ConcentrationField, PhysicalModel};

fn interior(mesh: &Mesh) -> impl Iterator<Item = (usize, usize)> {
    let (rows, columns) = mesh.shape();
    (1..columns.saturating_sub(1)).flat_map(move |j| (1..rows.saturating_sub(1)).map(move |i| (i, j)))
}

// =================================================================================================
// Exponential Decay: dc/dt = -k*c
// =================================================================================================

/// Exponential decay model: dc/dt = -k*c on every interior node
///
/// Exact solution: c(t) = exp(-k*t) everywhere. Forward Euler is stable for
/// dt <= 2/k.
pub struct ExponentialDecay {
    pub mesh: Mesh,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(points: usize, decay_rate: f64) -> Self {
        let mesh = Mesh::new(&MeshConfig::uniform(points)).unwrap();
        Self { mesh, decay_rate }
    }

    pub fn solution(&self) -> DecaySolution {
        DecaySolution { decay_rate: self.decay_rate }
    }
}

impl PhysicalModel for ExponentialDecay {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn compute_physics(&self, state: &ConcentrationField, rhs: &mut ConcentrationField) {
        rhs.fill(0.0);
        for (i, j) in interior(&self.mesh) {
            rhs[(i, j)] = -self.decay_rate * state[(i, j)];
        }
    }

    fn setup_initial_state(&self) -> ConcentrationField {
        let (rows, columns) = self.shape();
        ConcentrationField::uniform(rows, columns, 1.0)
    }

    fn max_dt(&self) -> Option<f64> {
        Some(2.0 / self.decay_rate)
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

/// c(x, y, t) = exp(-k*t)
#[derive(Clone, Copy)]
pub struct DecaySolution {
    pub decay_rate: f64,
}

impl AnalyticSolution for DecaySolution {
    fn evaluate(&self, _x: f64, _y: f64, t: f64) -> f64 {
        (-self.decay_rate * t).exp()
    }

    fn name(&self) -> &str {
        "Exponential Decay (exact)"
    }
}

// =================================================================================================
// Constant Growth: dc/dt = r
// =================================================================================================

/// Constant growth model: dc/dt = r on every interior node
///
/// Exact solution: c(t) = r*t. Forward Euler is exact for any step.
pub struct ConstantGrowth {
    pub mesh: Mesh,
    pub growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(points: usize, growth_rate: f64) -> Self {
        let mesh = Mesh::new(&MeshConfig::uniform(points)).unwrap();
        Self { mesh, growth_rate }
    }

    pub fn solution(&self) -> GrowthSolution {
        GrowthSolution { growth_rate: self.growth_rate }
    }
}

impl PhysicalModel for ConstantGrowth {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn compute_physics(&self, _state: &ConcentrationField, rhs: &mut ConcentrationField) {
        rhs.fill(0.0);
        for (i, j) in interior(&self.mesh) {
            rhs[(i, j)] = self.growth_rate;
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

/// c(x, y, t) = r*t
#[derive(Clone, Copy)]
pub struct GrowthSolution {
    pub growth_rate: f64,
}

impl AnalyticSolution for GrowthSolution {
    fn evaluate(&self, _x: f64, _y: f64, t: f64) -> f64 {
        self.growth_rate * t
    }

    fn name(&self) -> &str {
        "Constant Growth (exact)"
    }
}
