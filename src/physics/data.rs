//! Scalar field storage
//!
//! [`ConcentrationField`] is the dense 2D array transported by the solver.
//! It is backed by a `nalgebra::DMatrix<f64>`, indexed `(row, column)` where
//! the row runs along y and the column along x, exactly like the coordinate
//! fields of [`Mesh`](crate::mesh::Mesh).
//!
//! # Memory Layout
//!
//! - `ndim1 × ndim2` doubles, column-major (nalgebra convention)
//! - zero-initialised on creation
//! - released when the field is dropped
//!
//! # Examples
//!
//! ```rust
//! use convdiff_rs::physics::ConcentrationField;
//!
//! let mut field = ConcentrationField::zeros(3, 4);
//! field[(1, 2)] = 0.5;
//!
//! assert_eq!(field.shape(), (3, 4));
//! assert_eq!(field.max(), 0.5);
//! ```

use nalgebra::DMatrix;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense 2D scalar field
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationField {
    values: DMatrix<f64>,
}

impl ConcentrationField {

    // ======================================= constructors =======================================

    /// Zero-filled field of `rows × columns`
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            values: DMatrix::zeros(rows, columns),
        }
    }

    /// Uniform field
    pub fn uniform(rows: usize, columns: usize, value: f64) -> Self {
        Self {
            values: DMatrix::from_element(rows, columns, value),
        }
    }

    /// Field whose entry `(i, j)` is `f(i, j)`
    pub fn from_fn<F>(rows: usize, columns: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self {
            values: DMatrix::from_fn(rows, columns, f),
        }
    }

    /// Wrap an existing matrix
    pub fn from_matrix(values: DMatrix<f64>) -> Self {
        Self { values }
    }

    // ========================================== Queries ==========================================

    /// `(ndim1, ndim2)`
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    /// Number of rows
    pub fn ndim1(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns
    pub fn ndim2(&self) -> usize {
        self.values.ncols()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry `(i, j)`, `None` when out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get((i, j)).copied()
    }

    /// Underlying matrix
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Underlying matrix, mutable
    pub fn as_matrix_mut(&mut self) -> &mut DMatrix<f64> {
        &mut self.values
    }

    /// Consume the field and return the matrix
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.values
    }

    /// Iterate over all entries (column-major order)
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    /// Copy of row `i` (constant y), in column order
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.values.row(i).iter().copied().collect()
    }

    /// Largest entry (`-inf` for an empty field)
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest entry (`+inf` for an empty field)
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Sum of all entries
    pub fn sum(&self) -> f64 {
        self.values.sum()
    }

    /// Whether every entry is finite
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Whether any entry is NaN
    pub fn has_nan(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }

    /// Whether any entry is infinite
    pub fn has_inf(&self) -> bool {
        self.values.iter().any(|v| v.is_infinite())
    }

    // ======================================== Operations ========================================

    /// Apply `f` to every entry in place
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        self.values.apply(|v| *v = f(*v));
    }

    /// Set every entry to `value`
    pub fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }

    /// `self ← base + h·self`
    ///
    /// Turns a right-hand side stored in `self` into the forward Euler update
    /// of `base`. Shapes must match.
    pub fn euler_update_from(&mut self, base: &ConcentrationField, h: f64) {
        debug_assert_eq!(self.shape(), base.shape());
        self.values
            .iter_mut()
            .zip(base.values.iter())
            .for_each(|(rhs, c)| *rhs = c + h * *rhs);
    }

    /// Exchange contents with `other` without copying
    pub fn swap(&mut self, other: &mut ConcentrationField) {
        std::mem::swap(&mut self.values, &mut other.values);
    }
}

impl Index<(usize, usize)> for ConcentrationField {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.values[index]
    }
}

impl IndexMut<(usize, usize)> for ConcentrationField {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.values[index]
    }
}

impl fmt::Display for ConcentrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, columns) = self.shape();
        write!(
            f,
            "ConcentrationField[{}×{}] (min = {:.3e}, max = {:.3e})",
            rows,
            columns,
            self.min(),
            self.max()
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
