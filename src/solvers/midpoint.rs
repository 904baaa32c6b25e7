// src/solvers/midpoint.rs
//! Explicit Midpoint Scheme (RK2)
//!
//! # Algorithm
//!
//! 1. **Half step** (Euler) to estimate the state at the midpoint:
//!    ```text
//!    k1 = f(x_n, y_n)
//!    ```
//!
//! 2. **Full step** using the slope at the midpoint:
//!    ```text
//!    k2      = f(x_n + h/2, y_n + (h/2) k1)
//!    y_{n+1} = y_n + h k2
//!    ```
//!
//! # Convergence Properties
//!
//! - **Local truncation error**: O(h³)
//! - **Global error**: O(h²)
//! - **Cost**: 2 function evaluations per step

use crate::models::model::OdeModel;

/// Explicit midpoint scheme
pub struct Midpoint;

impl Midpoint {
    /// Single midpoint step from `(x, y)` with step size `h`, returns `y_{n+1}`
    #[inline]
    pub fn step<M: OdeModel + ?Sized>(model: &M, x: f64, y: f64, h: f64) -> f64 {
        let half_h = 0.5 * h;
        let k1 = model.rhs(x, y);
        let k2 = model.rhs(x + half_h, y + half_h * k1);
        y + h * k2
    }
}
