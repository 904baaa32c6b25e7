// src/models/mod.rs
//! Right-hand sides and reference problems
//!
//! Any `Fn(f64, f64) -> f64` is an [`OdeModel`](model::OdeModel), so plain
//! functions and closures can be handed to the solvers directly. The problem
//! types in this module additionally carry a closed-form solution through
//! their initial point, which is what the comparison and convergence tooling
//! measures against.

pub mod exponential_decay;
pub mod inverse_square;
pub mod linear_relaxation;
pub mod model;
