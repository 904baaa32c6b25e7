// src/models/model.rs

/// Right-hand side `f(x, y)` of the scalar ODE `y' = f(x, y)`
pub trait OdeModel {
    fn rhs(&self, x: f64, y: f64) -> f64;
}

impl<F> OdeModel for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn rhs(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Closed-form reference solution `y(x)`
pub trait ExactSolution {
    fn exact(&self, x: f64) -> f64;
}

impl<F> ExactSolution for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn exact(&self, x: f64) -> f64 {
        self(x)
    }
}
