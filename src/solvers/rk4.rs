// src/solvers/rk4.rs
//! Classical Fourth-Order Runge-Kutta Scheme (RK4)
//!
//! # Algorithm
//!
//! Four slope evaluations per step, combined with Simpson weights:
//! ```text
//! k1 = f(x_n,       y_n)
//! k2 = f(x_n + h/2, y_n + (h/2) k1)
//! k3 = f(x_n + h/2, y_n + (h/2) k2)
//! k4 = f(x_n + h,   y_n + h k3)
//!
//! y_{n+1} = y_n + (h/6)(k1 + 2 k2 + 2 k3 + k4)
//! ```
//!
//! # Convergence Properties
//!
//! - **Local truncation error**: O(h⁵)
//! - **Global error**: O(h⁴)
//! - **Cost**: 4 function evaluations per step
//!
//! # When to Use
//!
//! - Smooth, non-stiff problems where accuracy matters
//! - As the reference scheme when judging the lower orders

use crate::models::model::OdeModel;

/// Classical RK4 scheme
pub struct Rk4;

impl Rk4 {
    /// Single RK4 step from `(x, y)` with step size `h`, returns `y_{n+1}`
    ///
    /// # Stages
    ///
    /// - `k1`: slope at the start of the interval
    /// - `k2`: slope at the midpoint, reached with `k1`
    /// - `k3`: slope at the midpoint, reached with `k2`
    /// - `k4`: slope at the end of the interval, reached with `k3`
    #[inline]
    pub fn step<M: OdeModel + ?Sized>(model: &M, x: f64, y: f64, h: f64) -> f64 {
        let half_h = 0.5 * h;
        let x_mid = x + half_h;

        let k1 = model.rhs(x, y);
        let k2 = model.rhs(x_mid, y + half_h * k1);
        let k3 = model.rhs(x_mid, y + half_h * k2);
        let k4 = model.rhs(x + h, y + h * k3);

        y + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
    }
}
