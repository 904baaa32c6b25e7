// src/models/inverse_square.rs
//! ```text
//! dy/dx = -y/x - 2/x²
//! ```
//!
//! Multiplying through by `x` gives `(x y)' = -2/x`, hence
//!
//! ```text
//! y(x) = (x0 y0 + 2 ln x0 - 2 ln x) / x
//! ```
//!
//! The right-hand side is singular at `x = 0`, so the problem is only defined
//! on the positive half-line.

use super::model::{ExactSolution, OdeModel};
use crate::error::{validation::*, OdeResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSquare {
    pub x0: f64,
    pub y0: f64,
}

impl InverseSquare {
    pub fn new(x0: f64, y0: f64) -> OdeResult<Self> {
        validate_finite("x0", x0)?;
        validate_positive("x0", x0)?;
        validate_finite("y0", y0)?;
        Ok(InverseSquare { x0, y0 })
    }

    fn integration_constant(&self) -> f64 {
        self.x0 * self.y0 + 2.0 * self.x0.ln()
    }
}

impl OdeModel for InverseSquare {
    fn rhs(&self, x: f64, y: f64) -> f64 {
        -y / x - 2.0 / (x * x)
    }
}

impl ExactSolution for InverseSquare {
    fn exact(&self, x: f64) -> f64 {
        (self.integration_constant() - 2.0 * x.ln()) / x
    }
}
