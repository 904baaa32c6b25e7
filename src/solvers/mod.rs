// src/solvers/mod.rs
//! Fixed-step explicit Runge-Kutta integrators
//!
//! All schemes share one stepping loop: the sequence starts at `(x0, y0)`,
//! the step size `h = (xmax - x0) / nsteps` is computed once, and each step
//! appends `(x_i + h, y_{i+1})`. Running the three schemes on the same
//! [`IntegratorConfig`] therefore yields samples on identical x coordinates.
//!
//! Non-finite values returned by the right-hand side are not intercepted;
//! they flow into the sequence and every later sample. Use
//! [`SampleSequence::check_finite`] to detect them afterwards.

pub mod euler;
pub mod midpoint;
pub mod rk4;

use crate::error::{validation::*, OdeResult};
use crate::models::model::OdeModel;
use crate::sequence::SampleSequence;
use euler::Euler;
use log::debug;
use midpoint::Midpoint;
use rk4::Rk4;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// First order, one stage
    Euler,
    /// Second order, two stages
    Midpoint,
    /// Fourth order, four stages
    Rk4,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Euler, Scheme::Midpoint, Scheme::Rk4];

    /// Global order of accuracy
    pub fn order(self) -> u32 {
        match self {
            Scheme::Euler => 1,
            Scheme::Midpoint => 2,
            Scheme::Rk4 => 4,
        }
    }

    /// Right-hand side evaluations per step
    pub fn stages(self) -> usize {
        match self {
            Scheme::Euler => 1,
            Scheme::Midpoint => 2,
            Scheme::Rk4 => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scheme::Euler => "RK1 (Euler)",
            Scheme::Midpoint => "RK2 (Midpoint)",
            Scheme::Rk4 => "RK4",
        }
    }

    /// Short name used for table headers
    pub fn column_name(self) -> &'static str {
        match self {
            Scheme::Euler => "RK1",
            Scheme::Midpoint => "RK2",
            Scheme::Rk4 => "RK4",
        }
    }

    /// Advance one step from `(x, y)` and return `y_{n+1}`
    #[inline]
    pub fn step<M: OdeModel + ?Sized>(self, model: &M, x: f64, y: f64, h: f64) -> f64 {
        match self {
            Scheme::Euler => Euler::step(model, x, y, h),
            Scheme::Midpoint => Midpoint::step(model, x, y, h),
            Scheme::Rk4 => Rk4::step(model, x, y, h),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Initial value problem on `[x0, xmax]` discretised into `nsteps` steps
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegratorConfig {
    pub y0: f64,
    pub nsteps: usize,
    pub x0: f64,
    pub xmax: f64,
}

impl IntegratorConfig {
    pub fn new(y0: f64, nsteps: usize, x0: f64, xmax: f64) -> Self {
        IntegratorConfig { y0, nsteps, x0, xmax }
    }

    /// Validate the configuration before any integration work
    pub fn validate(&self) -> OdeResult<()> {
        validate_steps(self.nsteps)?;
        validate_interval(self.x0, self.xmax)?;
        validate_finite("y0", self.y0)?;
        let h = self.step_size();
        // The width can overflow, and a huge nsteps can underflow h to zero
        validate_finite("step size", h)?;
        validate_positive("step size", h)?;
        validate_grid_resolution(self.x0, self.xmax, h)?;
        Ok(())
    }

    /// `h = (xmax - x0) / nsteps`
    pub fn step_size(&self) -> f64 {
        (self.xmax - self.x0) / self.nsteps as f64
    }

    /// Same problem with the step count multiplied by `factor`
    pub fn refined(&self, factor: usize) -> Self {
        IntegratorConfig {
            nsteps: self.nsteps.saturating_mul(factor),
            ..*self
        }
    }
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        IntegratorConfig {
            y0: 1.0,
            nsteps: 60,
            x0: 0.0,
            xmax: 3.0,
        }
    }
}

/// Integrate `y' = f(x, y)` over the configured interval with `scheme`
///
/// # Returns
///
/// A sequence of `nsteps + 1` samples whose first element is exactly
/// `(x0, y0)`.
///
/// # Errors
///
/// `InvalidArgument` when `nsteps` is 0 or above `MAX_STEPS`, `xmax <= x0`,
/// a bound is not finite, or `h` is not a finite step resolvable near both
/// ends of the interval. No right-hand side evaluation happens in that case.
pub fn solve<M: OdeModel + ?Sized>(
    model: &M,
    scheme: Scheme,
    cfg: &IntegratorConfig,
) -> OdeResult<SampleSequence> {
    cfg.validate()?;
    let h = cfg.step_size();
    debug!(
        "{}: {} steps on [{}, {}], h = {}",
        scheme, cfg.nsteps, cfg.x0, cfg.xmax, h
    );

    let mut samples = SampleSequence::with_initial(scheme, h, cfg.x0, cfg.y0, cfg.nsteps);
    let mut x = cfg.x0;
    let mut y = cfg.y0;
    for _ in 0..cfg.nsteps {
        y = scheme.step(model, x, y, h);
        x += h;
        samples.push(x, y);
    }
    Ok(samples)
}

/// Euler integration of `f` from `(x0, y0)` to `xmax` in `nsteps` steps
pub fn rk1_solve<F>(
    f: F,
    y0: f64,
    nsteps: usize,
    x0: f64,
    xmax: f64,
) -> OdeResult<SampleSequence>
where
    F: Fn(f64, f64) -> f64,
{
    solve(&f, Scheme::Euler, &IntegratorConfig::new(y0, nsteps, x0, xmax))
}

/// Midpoint integration of `f` from `(x0, y0)` to `xmax` in `nsteps` steps
pub fn rk2_solve<F>(
    f: F,
    y0: f64,
    nsteps: usize,
    x0: f64,
    xmax: f64,
) -> OdeResult<SampleSequence>
where
    F: Fn(f64, f64) -> f64,
{
    solve(&f, Scheme::Midpoint, &IntegratorConfig::new(y0, nsteps, x0, xmax))
}

/// RK4 integration of `f` from `(x0, y0)` to `xmax` in `nsteps` steps
pub fn rk4_solve<F>(
    f: F,
    y0: f64,
    nsteps: usize,
    x0: f64,
    xmax: f64,
) -> OdeResult<SampleSequence>
where
    F: Fn(f64, f64) -> f64,
{
    solve(&f, Scheme::Rk4, &IntegratorConfig::new(y0, nsteps, x0, xmax))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OdeError;
    use std::cell::Cell;

    fn relax(x: f64, y: f64) -> f64 {
        x - y
    }

    #[test]
    fn test_scheme_metadata() {
        assert_eq!(
            Scheme::ALL.iter().map(|s| s.order()).collect::<Vec<_>>(),
            vec![1, 2, 4]
        );
        assert_eq!(Scheme::Rk4.stages(), 4);
        assert_eq!(Scheme::Midpoint.column_name(), "RK2");
        assert_eq!(format!("{}", Scheme::Euler), "RK1 (Euler)");
    }

    #[test]
    fn test_default_config() {
        let cfg = IntegratorConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.step_size() - 0.05).abs() < 1e-15);
        assert_eq!(cfg.refined(2).nsteps, 120);
    }

    #[test]
    fn test_sequence_shape() {
        let cfg = IntegratorConfig::new(1.0, 7, 0.0, 1.0);
        for scheme in Scheme::ALL {
            let seq = solve(&relax, scheme, &cfg).unwrap();
            assert_eq!(seq.len(), 8);
            assert_eq!(seq.first(), Some((0.0, 1.0)));
            assert_eq!(seq.scheme(), scheme);
            assert_eq!(seq.step_size(), cfg.step_size());
        }
    }

    #[test]
    fn test_single_step_matches_step_function() {
        let seq = rk4_solve(relax, 1.0, 1, 0.0, 0.5).unwrap();
        assert_eq!(seq.y_at(1), Some(Rk4::step(&relax, 0.0, 1.0, 0.5)));
        assert_eq!(seq.last().map(|(x, _)| x), Some(0.5));
    }

    #[test]
    fn test_stage_count_matches_evaluations() {
        let cfg = IntegratorConfig::new(1.0, 10, 0.0, 1.0);
        for scheme in Scheme::ALL {
            let calls = Cell::new(0usize);
            let counting = |x: f64, y: f64| {
                calls.set(calls.get() + 1);
                x - y
            };
            solve(&counting, scheme, &cfg).unwrap();
            assert_eq!(calls.get(), scheme.stages() * cfg.nsteps);
        }
    }

    #[test]
    fn test_invalid_input_is_rejected_before_evaluation() {
        let calls = Cell::new(0usize);
        let counting = |x: f64, y: f64| {
            calls.set(calls.get() + 1);
            x - y
        };

        let zero_steps = IntegratorConfig::new(1.0, 0, 0.0, 3.0);
        let reversed = IntegratorConfig::new(1.0, 10, 3.0, 0.0);
        let empty = IntegratorConfig::new(1.0, 10, 3.0, 3.0);
        let nan_start = IntegratorConfig::new(f64::NAN, 10, 0.0, 3.0);

        for cfg in [zero_steps, reversed, empty, nan_start] {
            match solve(&counting, Scheme::Euler, &cfg) {
                Err(OdeError::InvalidArgument { .. }) => {}
                other => panic!("expected InvalidArgument for {:?}, got {:?}", cfg, other),
            }
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_underflowing_step_size_is_rejected() {
        let cfg = IntegratorConfig::new(1.0, 100_000_000, 0.0, 1e-320);
        assert_eq!(cfg.step_size(), 0.0);
        assert!(matches!(
            cfg.validate(),
            Err(OdeError::InvalidArgument { ref parameter, .. }) if parameter == "step size"
        ));
    }

    #[test]
    fn test_overflowing_width_is_rejected() {
        let cfg = IntegratorConfig::new(1.0, 4, -1e308, 1e308);
        assert!(cfg.step_size().is_infinite());
        assert!(matches!(
            solve(&relax, Scheme::Euler, &cfg),
            Err(OdeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_unresolvable_step_is_rejected() {
        // h = 1e-6 is below the spacing of doubles near 1e10
        let cfg = IntegratorConfig::new(1.0, 1_000_000, 1e10, 1e10 + 1.0);
        assert!(matches!(
            cfg.validate(),
            Err(OdeError::InvalidArgument { ref parameter, .. }) if parameter == "step size"
        ));

        let resolvable = IntegratorConfig::new(1.0, 10, 1e10, 1e10 + 1000.0);
        let seq = solve(&relax, Scheme::Euler, &resolvable).unwrap();
        let h = resolvable.step_size();
        for w in seq.xs().windows(2) {
            assert!(((w[1] - w[0] - h) / h).abs() < 1e-6);
        }
    }

    #[test]
    fn test_max_step_count_is_rejected_without_panic() {
        let cfg = IntegratorConfig::new(1.0, usize::MAX, 0.0, 1.0);
        assert!(matches!(
            solve(&relax, Scheme::Rk4, &cfg),
            Err(OdeError::InvalidArgument { ref parameter, .. }) if parameter == "nsteps"
        ));
    }

    #[test]
    fn test_non_finite_rhs_propagates() {
        let blow_up = |x: f64, y: f64| if x >= 0.5 { f64::INFINITY } else { -y };
        let seq = rk2_solve(blow_up, 1.0, 4, 0.0, 1.0).unwrap();
        assert_eq!(seq.len(), 5);
        // the step starting at x = 0.25 only samples x < 0.5
        assert!(seq.ys()[..3].iter().all(|y| y.is_finite()));
        assert!(seq.ys()[3..].iter().all(|y| !y.is_finite()));
        assert!(seq.check_finite().is_err());
    }
}
