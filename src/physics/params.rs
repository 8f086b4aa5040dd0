//! Physical constants of the transport problem
//!
//! [`Physics`] groups the advection velocity `(u, v)`, the diffusion
//! coefficients `(Dx, Dy)` and the centre `(x0, y0)` of the initial Gaussian
//! bump. The same instance feeds the initial condition, the discrete operator
//! and the exact solution, so all three stay consistent.

use crate::error::{ConvectionError, Result};

/// Immutable convection-diffusion parameters
///
/// # Valid ranges
///
/// - `u`, `v`: any finite real
/// - `Dx`, `Dy`: strictly positive (the Gaussian width and the stability
///   bound divide by them)
/// - `x0`, `y0`: any finite real
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    u: f64,
    v: f64,
    diffusivity_x: f64,
    diffusivity_y: f64,
    x0: f64,
    y0: f64,
}

impl Default for Physics {
    /// Reference configuration: u = v = 1, Dx = Dy = 0.01, (x0, y0) = (0.5, 0.5)
    fn default() -> Self {
        Self {
            u: 1.0,
            v: 1.0,
            diffusivity_x: 0.01,
            diffusivity_y: 0.01,
            x0: 0.5,
            y0: 0.5,
        }
    }
}

impl Physics {
    /// Create and validate a parameter set
    ///
    /// # Errors
    ///
    /// [`ConvectionError::InvalidPhysics`] if a value is not finite or a
    /// diffusion coefficient is not strictly positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use convdiff_rs::physics::Physics;
    ///
    /// let physics = Physics::new(1.0, 0.5, 0.01, 0.02, 0.5, 0.5).unwrap();
    /// assert_eq!(physics.diffusivity_y(), 0.02);
    ///
    /// assert!(Physics::new(1.0, 1.0, 0.0, 0.01, 0.5, 0.5).is_err());
    /// ```
    pub fn new(u: f64, v: f64, diffusivity_x: f64, diffusivity_y: f64, x0: f64, y0: f64) -> Result<Self> {
        let named = [
            ("u", u),
            ("v", v),
            ("Dx", diffusivity_x),
            ("Dy", diffusivity_y),
            ("x0", x0),
            ("y0", y0),
        ];
        if let Some((name, value)) = named.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConvectionError::InvalidPhysics(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if diffusivity_x <= 0.0 || diffusivity_y <= 0.0 {
            return Err(ConvectionError::InvalidPhysics(format!(
                "Diffusion coefficients must be strictly positive, got Dx = {}, Dy = {}",
                diffusivity_x, diffusivity_y
            )));
        }

        Ok(Self {
            u,
            v,
            diffusivity_x,
            diffusivity_y,
            x0,
            y0,
        })
    }

    /// Advection velocity along x
    pub fn u(&self) -> f64 {
        self.u
    }

    /// Advection velocity along y
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Diffusion coefficient Dx
    pub fn diffusivity_x(&self) -> f64 {
        self.diffusivity_x
    }

    /// Diffusion coefficient Dy
    pub fn diffusivity_y(&self) -> f64 {
        self.diffusivity_y
    }

    /// x coordinate of the initial bump centre
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// y coordinate of the initial bump centre
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Re-check the invariants (used by the configuration layer)
    pub fn validate(&self) -> Result<()> {
        Self::new(self.u, self.v, self.diffusivity_x, self.diffusivity_y, self.x0, self.y0).map(|_| ())
    }
}
