// src/sequence.rs
//! Ordered `(x, y)` samples produced by one integrator run.
//!
//! Samples are stored as parallel arrays so plotting and output code can take
//! `xs()` / `ys()` slices without copying.

use crate::error::{OdeError, OdeResult};
use crate::models::model::ExactSolution;
use crate::solvers::Scheme;

#[derive(Clone, Debug, PartialEq)]
pub struct SampleSequence {
    scheme: Scheme,
    step_size: f64,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSequence {
    /// Start a sequence at `(x0, y0)` with room for `nsteps` further samples.
    pub(crate) fn with_initial(
        scheme: Scheme,
        step_size: f64,
        x0: f64,
        y0: f64,
        nsteps: usize,
    ) -> Self {
        let mut xs = Vec::with_capacity(nsteps.saturating_add(1));
        let mut ys = Vec::with_capacity(nsteps.saturating_add(1));
        xs.push(x0);
        ys.push(y0);
        SampleSequence {
            scheme,
            step_size,
            xs,
            ys,
        }
    }

    pub(crate) fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Number of samples, `nsteps + 1` for solver output.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn y_at(&self, index: usize) -> Option<f64> {
        self.ys.get(index).copied()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points().next()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        match (self.xs.last(), self.ys.last()) {
            (Some(&x), Some(&y)) => Some((x, y)),
            _ => None,
        }
    }

    /// Report the first sample holding a NaN or infinite value.
    ///
    /// The solvers never stop on non-finite values; a bad right-hand side
    /// simply propagates through the remaining steps. Callers that care use
    /// this to turn that condition into an error.
    pub fn check_finite(&self) -> OdeResult<()> {
        for (index, (x, y)) in self.points().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                let reason = if y.is_nan() || x.is_nan() {
                    format!("non-finite sample (x = {}, y = {})", x, y)
                } else {
                    format!("sample diverged (x = {}, y = {})", x, y)
                };
                return Err(OdeError::NumericalInstability {
                    method: self.scheme.label().to_string(),
                    index,
                    reason,
                });
            }
        }
        Ok(())
    }

    /// Largest `|y_i - exact(x_i)|` over all samples.
    pub fn max_abs_error<E: ExactSolution + ?Sized>(&self, exact: &E) -> f64 {
        self.points()
            .map(|(x, y)| (y - exact.exact(x)).abs())
            .fold(0.0, f64::max)
    }

    /// `|y_n - exact(x_n)|` at the final sample.
    pub fn abs_error_at_end<E: ExactSolution + ?Sized>(&self, exact: &E) -> f64 {
        match self.last() {
            Some((x, y)) => (y - exact.exact(x)).abs(),
            None => 0.0,
        }
    }
}
