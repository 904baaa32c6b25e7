//! # fast-ode: Fixed-Step Runge-Kutta Integrators
//!
//! Numerical solution of the scalar initial value problem
//!
//! ```text
//! y' = f(x, y),    y(x0) = y0,    x ∈ [x0, xmax]
//! ```
//!
//! with three explicit, fixed-step schemes of increasing order.
//!
//! ## Key Features
//!
//! - **Three schemes**: Euler (order 1), explicit midpoint (order 2), classical RK4 (order 4)
//! - **Comparable output**: every scheme samples the same uniform grid
//! - **Any right-hand side**: functions and closures are models out of the box
//! - **Reference problems**: closed-form solutions for error and order studies
//! - **Table output**: the fixed-width `x RK1 RK2 RK4 Exact` data file
//!
//! ## Quick Start
//!
//! ```rust
//! use fast_ode::solvers::{solve, IntegratorConfig, Scheme};
//!
//! // dy/dx = x - y, y(0) = 1 on [0, 3]
//! let f = |x: f64, y: f64| x - y;
//! let cfg = IntegratorConfig { y0: 1.0, nsteps: 60, x0: 0.0, xmax: 3.0 };
//!
//! let samples = solve(&f, Scheme::Rk4, &cfg).expect("Valid configuration");
//! let (x, y) = samples.last().unwrap();
//! let exact = x - 1.0 + 2.0 * (-x).exp();
//! assert!((y - exact).abs() < 1e-6);
//! ```
//!
//! ## Error Behaviour
//!
//! Invalid configurations (`nsteps == 0`, `xmax <= x0`, non-finite bounds)
//! are rejected before any work is done. Non-finite values produced by the
//! right-hand side are left in the output; see
//! [`SampleSequence::check_finite`].

// Module declarations
pub mod analytics;
pub mod comparison;
pub mod error;
pub mod logging;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod sequence;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{OdeError, OdeResult};
pub use sequence::SampleSequence;
pub use solvers::{solve, IntegratorConfig, Scheme};
