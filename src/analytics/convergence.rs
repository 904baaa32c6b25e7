// src/analytics/convergence.rs
//! Empirical order of convergence
//!
//! # Mathematical Foundation
//!
//! A scheme of global order `p` has error `E(h) ≈ C hᵖ` for small `h`, so
//! halving the step size should divide the error by `2ᵖ`:
//! ```text
//! E(h) / E(h/2) ≈ 2ᵖ
//! p_obs = log₂(E(h) / E(h/2))
//! ```
//!
//! The study below solves the same problem at `nsteps`, `2·nsteps`,
//! `4·nsteps`, … and measures the maximum absolute error against the exact
//! solution at each level.

use crate::error::{OdeError, OdeResult};
use crate::models::model::{ExactSolution, OdeModel};
use crate::solvers::{solve, IntegratorConfig, Scheme};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergencePoint {
    pub nsteps: usize,
    pub step_size: f64,
    pub max_abs_error: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceStudy {
    pub scheme: Scheme,
    pub points: Vec<ConvergencePoint>,
}

impl ConvergenceStudy {
    /// `E(h) / E(h/2)` for each consecutive pair of levels
    pub fn ratios(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| w[0].max_abs_error / w[1].max_abs_error)
            .collect()
    }

    pub fn observed_orders(&self) -> Vec<f64> {
        self.ratios().into_iter().map(f64::log2).collect()
    }

    pub fn mean_observed_order(&self) -> f64 {
        let orders = self.observed_orders();
        if orders.is_empty() {
            return f64::NAN;
        }
        orders.iter().sum::<f64>() / orders.len() as f64
    }

    /// Theoretical ratio `2ᵖ` for this scheme
    pub fn expected_ratio(&self) -> f64 {
        2f64.powi(self.scheme.order() as i32)
    }
}

/// Run `scheme` on `base` and `refinements` successively halved step sizes
///
/// # Errors
///
/// `InvalidArgument` when `refinements == 0` or the base configuration is
/// invalid.
pub fn convergence_study<M, E>(
    model: &M,
    exact: &E,
    scheme: Scheme,
    base: &IntegratorConfig,
    refinements: usize,
) -> OdeResult<ConvergenceStudy>
where
    M: OdeModel + ?Sized,
    E: ExactSolution + ?Sized,
{
    if refinements == 0 {
        return Err(OdeError::InvalidArgument {
            parameter: "refinements".to_string(),
            value: 0.0,
            constraint: "at least one refinement is needed to compare errors".to_string(),
        });
    }
    base.validate()?;

    let mut points = Vec::with_capacity(refinements + 1);
    let mut cfg = *base;
    for _ in 0..=refinements {
        let seq = solve(model, scheme, &cfg)?;
        let point = ConvergencePoint {
            nsteps: cfg.nsteps,
            step_size: seq.step_size(),
            max_abs_error: seq.max_abs_error(exact),
        };
        debug!(
            "{}: nsteps = {}, max error = {:e}",
            scheme, point.nsteps, point.max_abs_error
        );
        points.push(point);
        cfg = cfg.refined(2);
    }

    Ok(ConvergenceStudy { scheme, points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exponential_decay::ExponentialDecay;

    #[test]
    fn test_levels_double_step_count() {
        let problem = ExponentialDecay::new(2.0, 0.0, 1.0).unwrap();
        let base = IntegratorConfig::new(1.0, 10, 0.0, 1.0);
        let study = convergence_study(&problem, &problem, Scheme::Euler, &base, 3).unwrap();

        let steps: Vec<usize> = study.points.iter().map(|p| p.nsteps).collect();
        assert_eq!(steps, vec![10, 20, 40, 80]);
        assert_eq!(study.ratios().len(), 3);
        assert!((study.points[1].step_size - 0.05).abs() < 1e-15);
    }

    #[test]
    fn test_midpoint_order_is_two() {
        let problem = ExponentialDecay::new(2.0, 0.0, 1.0).unwrap();
        let base = IntegratorConfig::new(1.0, 20, 0.0, 1.0);
        let study = convergence_study(&problem, &problem, Scheme::Midpoint, &base, 2).unwrap();
        assert_eq!(study.expected_ratio(), 4.0);
        assert!((study.mean_observed_order() - 2.0).abs() < 0.15);
    }

    #[test]
    fn test_zero_refinements_rejected() {
        let problem = ExponentialDecay::new(2.0, 0.0, 1.0).unwrap();
        let base = IntegratorConfig::new(1.0, 20, 0.0, 1.0);
        assert!(convergence_study(&problem, &problem, Scheme::Rk4, &base, 0).is_err());
    }
}
