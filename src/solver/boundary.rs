//! Dirichlet domain boundaries
//!
//! # Design
//!
//! The only boundary condition of this crate prescribes the value of the
//! field on the four edges of the rectangle from an
//! [`AnalyticSolution`] evaluated at the current time. For the travelling
//! Gaussian this is consistent with the unbounded-domain solution the
//! numerical result is compared against.
//!
//! ```text
//!              North (i = ndim1 - 1)
//!          ┌───────────────────────────┐
//!          │                           │
//!   West   │        interior           │  East
//!  (j = 0) │   (updated by the model)  │ (j = ndim2 - 1)
//!          │                           │
//!          └───────────────────────────┘
//!              South (i = 0)
//! ```

use std::fmt;

use crate::error::Result;
use crate::mesh::Mesh;
use crate::physics::{AnalyticSolution, ConcentrationField};

// =================================================================================================
// Edges
// =================================================================================================

/// One side of the rectangular domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// y = ymin (row 0)
    South,
    /// y = ymax (last row)
    North,
    /// x = xmin (column 0)
    West,
    /// x = xmax (last column)
    East,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::South, Edge::North, Edge::West, Edge::East];

    /// Node indices `(i, j)` on this edge, corners included
    pub fn nodes(self, mesh: &Mesh) -> Vec<(usize, usize)> {
        let (ndim1, ndim2) = mesh.shape();
        match self {
            Edge::South => (0..ndim2).map(|j| (0, j)).collect(),
            Edge::North => (0..ndim2).map(|j| (ndim1 - 1, j)).collect(),
            Edge::West => (0..ndim1).map(|i| (i, 0)).collect(),
            Edge::East => (0..ndim1).map(|i| (i, ndim2 - 1)).collect(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::South => "south",
            Edge::North => "north",
            Edge::West => "west",
            Edge::East => "east",
        };
        write!(f, "{}", name)
    }
}

// =================================================================================================
// Domain Boundaries
// =================================================================================================

/// Dirichlet values on the whole domain edge, taken from an exact solution
///
/// # Examples
///
/// ```rust
/// use convdiff_rs::mesh::{Mesh, MeshConfig};
/// use convdiff_rs::models::GaussianPulse;
/// use convdiff_rs::physics::{ConcentrationField, Physics};
/// use convdiff_rs::solver::DomainBoundaries;
///
/// let mesh = Mesh::new(&MeshConfig::uniform(11)).unwrap();
/// let boundaries = DomainBoundaries::dirichlet(Box::new(GaussianPulse::new(Physics::default())));
///
/// let mut field = ConcentrationField::uniform(11, 11, 7.0);
/// boundaries.apply(&mesh, &mut field, 0.0).unwrap();
///
/// assert!(field[(0, 0)] < 1e-6);   // corner far from the bump
/// assert_eq!(field[(5, 5)], 7.0);  // interior untouched
/// ```
pub struct DomainBoundaries {
    solution: Box<dyn AnalyticSolution>,
}

impl DomainBoundaries {
    /// Boundary values from `solution`
    pub fn dirichlet(solution: Box<dyn AnalyticSolution>) -> Self {
        Self { solution }
    }

    /// The solution providing the boundary values
    pub fn solution(&self) -> &dyn AnalyticSolution {
        self.solution.as_ref()
    }

    /// Boundary value at node `(i, j)` and time `t`
    #[inline]
    pub fn value_at(&self, mesh: &Mesh, i: usize, j: usize, t: f64) -> f64 {
        let (x, y) = mesh.coordinates(i, j);
        self.solution.evaluate(x, y, t)
    }

    /// Write the boundary values at time `t` into `field`
    ///
    /// Interior entries are left untouched.
    ///
    /// # Errors
    ///
    /// [`ShapeMismatch`](crate::error::ConvectionError::ShapeMismatch) if
    /// `field` does not have the mesh shape.
    pub fn apply(&self, mesh: &Mesh, field: &mut ConcentrationField, t: f64) -> Result<()> {
        mesh.check_shape(field.shape())?;

        let (ndim1, ndim2) = mesh.shape();
        let last_row = ndim1 - 1;
        let last_col = ndim2 - 1;

        for j in 0..ndim2 {
            field[(0, j)] = self.value_at(mesh, 0, j, t);
            field[(last_row, j)] = self.value_at(mesh, last_row, j, t);
        }
        for i in 1..last_row {
            field[(i, 0)] = self.value_at(mesh, i, 0, t);
            field[(i, last_col)] = self.value_at(mesh, i, last_col, t);
        }

        Ok(())
    }

    /// Largest deviation between `field` and the boundary values on `edge`
    pub fn edge_deviation(&self, mesh: &Mesh, field: &ConcentrationField, edge: Edge, t: f64) -> f64 {
        edge.nodes(mesh)
            .into_iter()
            .map(|(i, j)| (field[(i, j)] - self.value_at(mesh, i, j, t)).abs())
            .fold(0.0, f64::max)
    }
}

impl fmt::Debug for DomainBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainBoundaries")
            .field("kind", &"Dirichlet")
            .field("solution", &self.solution.name())
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvectionError;
    use crate::mesh::MeshConfig;

    struct Linear;

    impl AnalyticSolution for Linear {
        fn evaluate(&self, x: f64, y: f64, t: f64) -> f64 {
            x - y + 10.0 * t
        }

        fn name(&self) -> &str {
            "Linear"
        }
    }

    #[test]
    fn test_edge_nodes() {
        let mesh = Mesh::new(&MeshConfig::uniform(2).with_points(3, 4)).unwrap();

        assert_eq!(Edge::South.nodes(&mesh), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(Edge::East.nodes(&mesh), vec![(0, 3), (1, 3), (2, 3)]);
        assert_eq!(Edge::North.nodes(&mesh).len(), 4);
        assert_eq!(Edge::West.nodes(&mesh).len(), 3);
    }

    #[test]
    fn test_apply_sets_every_edge() {
        let mesh = Mesh::new(&MeshConfig::uniform(6)).unwrap();
        let boundaries = DomainBoundaries::dirichlet(Box::new(Linear));
        let mut field = ConcentrationField::uniform(6, 6, -100.0);

        boundaries.apply(&mesh, &mut field, 0.5).unwrap();

        for edge in Edge::ALL {
            assert_eq!(boundaries.edge_deviation(&mesh, &field, edge, 0.5), 0.0, "{} edge", edge);
        }
        for i in 1..5 {
            for j in 1..5 {
                assert_eq!(field[(i, j)], -100.0);
            }
        }
    }

    #[test]
    fn test_apply_rejects_wrong_shape() {
        let mesh = Mesh::new(&MeshConfig::uniform(6)).unwrap();
        let boundaries = DomainBoundaries::dirichlet(Box::new(Linear));
        let mut field = ConcentrationField::zeros(6, 5);

        let result = boundaries.apply(&mesh, &mut field, 0.0);
        assert!(matches!(result, Err(ConvectionError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_debug_shows_solution_name() {
        let boundaries = DomainBoundaries::dirichlet(Box::new(Linear));
        assert!(format!("{:?}", boundaries).contains("Linear"));
    }
}
