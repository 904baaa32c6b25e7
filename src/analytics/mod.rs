// src/analytics/mod.rs
pub mod convergence;
