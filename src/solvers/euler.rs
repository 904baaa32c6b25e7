// src/solvers/euler.rs
//! Explicit Euler Scheme (RK1)
//!
//! # Mathematical Framework
//!
//! For the scalar ODE:
//! ```text
//! dy/dx = f(x, y)
//! ```
//!
//! The Euler scheme follows the tangent at the start of each step:
//! ```text
//! y_{n+1} = y_n + h f(x_n, y_n)
//! ```
//!
//! # Convergence Properties
//!
//! - **Local truncation error**: O(h²)
//! - **Global error**: O(h)
//! - **Cost**: 1 function evaluation per step
//!
//! Mostly useful as a baseline when comparing against higher-order schemes.

use crate::models::model::OdeModel;

/// Explicit Euler scheme
pub struct Euler;

impl Euler {
    /// Single Euler step from `(x, y)` with step size `h`, returns `y_{n+1}`
    #[inline]
    pub fn step<M: OdeModel + ?Sized>(model: &M, x: f64, y: f64, h: f64) -> f64 {
        y + h * model.rhs(x, y)
    }
}
