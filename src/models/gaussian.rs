//! Travelling Gaussian pulse
//!
//! Closed-form solution of the constant-coefficient convection-diffusion
//! equation for a Gaussian initial bump on an unbounded domain.
//!
//! # Formula
//!
//! ```text
//! c(x, y, 0) = exp(-(x - x0)²/Dx - (y - y0)²/Dy)
//!
//! c(x, y, t) = exp(-(x - x0 - u·t)² / (Dx·(4t + 1)))
//!            · exp(-(y - y0 - v·t)² / (Dy·(4t + 1)))
//!            / (4t + 1)
//! ```
//!
//! The centre travels with velocity `(u, v)`, the variance grows linearly in
//! time and the peak amplitude decays as `1/(4t + 1)`.
//!
//! # Example
//!
//! ```rust
//! use convdiff_rs::models::GaussianPulse;
//! use convdiff_rs::physics::{AnalyticSolution, Physics};
//!
//! let pulse = GaussianPulse::new(Physics::default());
//!
//! // Peak follows the flow
//! assert_eq!(pulse.center(0.5), (1.0, 1.0));
//! assert!((pulse.evaluate(1.0, 1.0, 0.5) - 1.0 / 3.0).abs() < 1e-12);
//! ```

use crate::mesh::Mesh;
use crate::physics::{AnalyticSolution, ConcentrationField, Physics};

/// Exact solution of the reference transport problem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianPulse {
    physics: Physics,
}

impl GaussianPulse {
    pub fn new(physics: Physics) -> Self {
        Self { physics }
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    /// Initial bump at `(x, y)`
    #[inline]
    pub fn initial_value(&self, x: f64, y: f64) -> f64 {
        let p = &self.physics;
        (-(x - p.x0()).powi(2) / p.diffusivity_x() - (y - p.y0()).powi(2) / p.diffusivity_y()).exp()
    }

    /// Initial field on `mesh`
    pub fn initial_field(&self, mesh: &Mesh) -> ConcentrationField {
        let (x, y) = (mesh.x(), mesh.y());
        ConcentrationField::from_fn(mesh.ndim1(), mesh.ndim2(), |i, j| {
            self.initial_value(x[(i, j)], y[(i, j)])
        })
    }

    /// Value at the pulse centre, `1/(4t + 1)`
    pub fn peak_amplitude(&self, t: f64) -> f64 {
        1.0 / (4.0 * t + 1.0)
    }

    /// Position of the pulse centre at time `t`
    pub fn center(&self, t: f64) -> (f64, f64) {
        (
            self.physics.x0() + self.physics.u() * t,
            self.physics.y0() + self.physics.v() * t,
        )
    }
}

impl AnalyticSolution for GaussianPulse {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, t: f64) -> f64 {
        let p = &self.physics;
        let spread = 4.0 * t + 1.0;

        let cx = (-(x - p.x0() - p.u() * t).powi(2) / (p.diffusivity_x() * spread)).exp();
        let cy = (-(y - p.y0() - p.v() * t).powi(2) / (p.diffusivity_y() * spread)).exp();

        cx * cy / spread
    }

    fn name(&self) -> &str {
        "Gaussian Pulse"
    }
}
