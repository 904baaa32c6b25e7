// src/models/exponential_decay.rs
//! Exponential decay
//!
//! ```text
//! dy/dx = -λ y
//! y(x)  = y0 e^{-λ (x - x0)}
//! ```

use super::model::{ExactSolution, OdeModel};
use crate::error::{validation::*, OdeResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialDecay {
    pub rate: f64,
    pub x0: f64,
    pub y0: f64,
}

impl ExponentialDecay {
    pub fn new(rate: f64, x0: f64, y0: f64) -> OdeResult<Self> {
        validate_finite("rate", rate)?;
        validate_finite("x0", x0)?;
        validate_finite("y0", y0)?;
        Ok(ExponentialDecay { rate, x0, y0 })
    }
}

impl OdeModel for ExponentialDecay {
    fn rhs(&self, _x: f64, y: f64) -> f64 {
        -self.rate * y
    }
}

impl ExactSolution for ExponentialDecay {
    fn exact(&self, x: f64) -> f64 {
        self.y0 * (-self.rate * (x - self.x0)).exp()
    }
}
