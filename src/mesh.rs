//! Uniform structured mesh
//!
//! The mesh covers an axis-aligned rectangle `[xmin, xmax] × [ymin, ymax]`
//! with evenly spaced nodes, both ends included:
//!
//! ```text
//! dx = (xmax - xmin) / (ndim2 - 1)
//! dy = (ymax - ymin) / (ndim1 - 1)
//!
//! x[i][j] = xmin + j·dx        (column index ↔ x)
//! y[i][j] = ymin + i·dy        (row index    ↔ y)
//! ```
//!
//! The coordinate fields are built once by [`Mesh::new`] and are read-only for
//! the lifetime of the mesh.
//!
//! # Example
//!
//! ```rust
//! use convdiff_rs::mesh::{Mesh, MeshConfig};
//!
//! let mesh = Mesh::new(&MeshConfig::uniform(301)).unwrap();
//! assert_eq!(mesh.shape(), (301, 301));
//! assert!((mesh.dx() - 2.0 / 300.0).abs() < 1e-15);
//! ```

use nalgebra::DMatrix;

use crate::error::{ConvectionError, Result};

/// Number of points per axis in the reference configuration
pub const REFERENCE_POINTS: usize = 301;

// =================================================================================================
// Domain bounds
// =================================================================================================

/// Physical extent of the rectangular domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for DomainBounds {
    /// The reference domain `[0, 2] × [0, 2]`
    fn default() -> Self {
        Self {
            xmin: 0.0,
            xmax: 2.0,
            ymin: 0.0,
            ymax: 2.0,
        }
    }
}

impl DomainBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self { xmin, xmax, ymin, ymax }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    fn validate(&self) -> Result<()> {
        let values = [self.xmin, self.xmax, self.ymin, self.ymax];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConvectionError::InvalidMesh(format!(
                "Domain bounds must be finite, got {:?}",
                self
            )));
        }
        if self.xmax <= self.xmin || self.ymax <= self.ymin {
            return Err(ConvectionError::InvalidMesh(format!(
                "Domain must have positive extent, got x ∈ [{}, {}], y ∈ [{}, {}]",
                self.xmin, self.xmax, self.ymin, self.ymax
            )));
        }
        Ok(())
    }
}

// =================================================================================================
// Mesh configuration
// =================================================================================================

/// Parameters needed to build a [`Mesh`]
///
/// `ndim1` is the number of rows (y direction), `ndim2` the number of columns
/// (x direction). Both must be at least 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    pub bounds: DomainBounds,
    pub ndim1: usize,
    pub ndim2: usize,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self::uniform(REFERENCE_POINTS)
    }
}

impl MeshConfig {
    /// `points × points` grid over the reference domain
    pub fn uniform(points: usize) -> Self {
        Self {
            bounds: DomainBounds::default(),
            ndim1: points,
            ndim2: points,
        }
    }

    /// Builder pattern: set domain bounds
    pub fn with_bounds(mut self, bounds: DomainBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Builder pattern: set point counts (rows, columns)
    pub fn with_points(mut self, ndim1: usize, ndim2: usize) -> Self {
        self.ndim1 = ndim1;
        self.ndim2 = ndim2;
        self
    }

    /// Check that the configuration describes a usable grid
    pub fn validate(&self) -> Result<()> {
        if self.ndim1 < 2 || self.ndim2 < 2 {
            return Err(ConvectionError::InvalidMesh(format!(
                "Need at least 2 points along each axis, got [{}, {}]",
                self.ndim1, self.ndim2
            )));
        }
        self.bounds.validate()
    }
}

// =================================================================================================
// Mesh
// =================================================================================================

/// Immutable uniform rectangular grid
///
/// Owns its two coordinate fields. Spacing is strictly positive and finite;
/// this is checked at construction so that the solver never divides by a
/// spacing that underflowed to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    bounds: DomainBounds,
    ndim1: usize,
    ndim2: usize,
    dx: f64,
    dy: f64,
    x: DMatrix<f64>,
    y: DMatrix<f64>,
}

impl Mesh {
    /// Build the mesh and its coordinate fields
    ///
    /// # Errors
    ///
    /// [`ConvectionError::InvalidMesh`] when fewer than 2 points are requested
    /// along an axis, bounds are not finite or empty, or the resulting spacing
    /// is not a positive finite number.
    pub fn new(config: &MeshConfig) -> Result<Self> {
        config.validate()?;

        let MeshConfig { bounds, ndim1, ndim2 } = *config;

        let dx = bounds.width() / (ndim2 as f64 - 1.0);
        let dy = bounds.height() / (ndim1 as f64 - 1.0);

        if !(dx.is_finite() && dx > 0.0 && dy.is_finite() && dy > 0.0) {
            return Err(ConvectionError::InvalidMesh(format!(
                "Grid spacing must be positive and finite, got dx = {}, dy = {}",
                dx, dy
            )));
        }

        let x = DMatrix::from_fn(ndim1, ndim2, |_, j| bounds.xmin + j as f64 * dx);
        let y = DMatrix::from_fn(ndim1, ndim2, |i, _| bounds.ymin + i as f64 * dy);

        Ok(Self {
            bounds,
            ndim1,
            ndim2,
            dx,
            dy,
            x,
            y,
        })
    }

    /// Number of rows (points along y)
    pub fn ndim1(&self) -> usize {
        self.ndim1
    }

    /// Number of columns (points along x)
    pub fn ndim2(&self) -> usize {
        self.ndim2
    }

    /// `(ndim1, ndim2)`
    pub fn shape(&self) -> (usize, usize) {
        (self.ndim1, self.ndim2)
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.ndim1 * self.ndim2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn bounds(&self) -> &DomainBounds {
        &self.bounds
    }

    /// x coordinate field
    pub fn x(&self) -> &DMatrix<f64> {
        &self.x
    }

    /// y coordinate field
    pub fn y(&self) -> &DMatrix<f64> {
        &self.y
    }

    /// Coordinates of node `(i, j)`
    #[inline]
    pub fn coordinates(&self, i: usize, j: usize) -> (f64, f64) {
        (self.x[(i, j)], self.y[(i, j)])
    }

    /// Whether `(i, j)` lies on the domain edge
    #[inline]
    pub fn is_boundary(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i == self.ndim1 - 1 || j == self.ndim2 - 1
    }

    /// Row index whose y coordinate is closest to `y`, clamped to the grid
    pub fn nearest_row(&self, y: f64) -> usize {
        let position = ((y - self.bounds.ymin) / self.dy).round();
        position.clamp(0.0, (self.ndim1 - 1) as f64) as usize
    }

    /// x coordinates of one row, in column order
    pub fn x_axis(&self) -> Vec<f64> {
        self.x.row(0).iter().copied().collect()
    }

    /// Check that `shape` matches this mesh
    pub fn check_shape(&self, shape: (usize, usize)) -> Result<()> {
        if shape != self.shape() {
            return Err(ConvectionError::ShapeMismatch {
                expected: self.shape(),
                found: shape,
            });
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
