// src/models/linear_relaxation.rs
//! Linear relaxation toward the line `y = x - 1`
//!
//! ```text
//! dy/dx = x - y
//! y(x)  = x - 1 + (y0 - x0 + 1) e^{-(x - x0)}
//! ```
//!
//! With `y(0) = 1` this is the classic textbook problem with solution
//! `y = x - 1 + 2e^{-x}`.

use super::model::{ExactSolution, OdeModel};
use crate::error::{validation::*, OdeResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRelaxation {
    pub x0: f64,
    pub y0: f64,
}

impl LinearRelaxation {
    pub fn new(x0: f64, y0: f64) -> OdeResult<Self> {
        validate_finite("x0", x0)?;
        validate_finite("y0", y0)?;
        Ok(LinearRelaxation { x0, y0 })
    }
}

impl Default for LinearRelaxation {
    fn default() -> Self {
        LinearRelaxation { x0: 0.0, y0: 1.0 }
    }
}

impl OdeModel for LinearRelaxation {
    fn rhs(&self, x: f64, y: f64) -> f64 {
        x - y
    }
}

impl ExactSolution for LinearRelaxation {
    fn exact(&self, x: f64) -> f64 {
        x - 1.0 + (self.y0 - self.x0 + 1.0) * (-(x - self.x0)).exp()
    }
}
