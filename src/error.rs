// src/error.rs
use std::fmt;

/// Error types for the fast-ode library
#[derive(Debug, Clone, PartialEq)]
pub enum OdeError {
    /// Invalid input to an integrator or problem definition
    InvalidArgument {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Non-finite values found in a produced sample sequence
    NumericalInstability {
        method: String,
        index: usize,
        reason: String,
    },
}

impl fmt::Display for OdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OdeError::InvalidArgument {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid argument '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            OdeError::NumericalInstability {
                method,
                index,
                reason,
            } => {
                write!(
                    f,
                    "Numerical instability in {} at sample {}: {}",
                    method, index, reason
                )
            }
        }
    }
}

impl std::error::Error for OdeError {}

/// Result type alias for fast-ode operations
pub type OdeResult<T> = Result<T, OdeError>;

/// Validation utilities
pub mod validation {
    use super::{OdeError, OdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> OdeResult<()> {
        if value.is_nan() || value <= 0.0 {
            Err(OdeError::InvalidArgument {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> OdeResult<()> {
        if !value.is_finite() {
            Err(OdeError::InvalidArgument {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Upper bound on the step count of a single run
    pub const MAX_STEPS: usize = 100_000_000;

    /// Validate steps count
    pub fn validate_steps(nsteps: usize) -> OdeResult<()> {
        if nsteps == 0 {
            Err(OdeError::InvalidArgument {
                parameter: "nsteps".to_string(),
                value: 0.0,
                constraint: "must be at least 1".to_string(),
            })
        } else if nsteps > MAX_STEPS {
            Err(OdeError::InvalidArgument {
                parameter: "nsteps".to_string(),
                value: nsteps as f64,
                constraint: format!("exceeds maximum allowed ({})", MAX_STEPS),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that `[x0, xmax]` is a finite, non-empty interval
    pub fn validate_interval(x0: f64, xmax: f64) -> OdeResult<()> {
        validate_finite("x0", x0)?;
        validate_finite("xmax", xmax)?;
        if xmax <= x0 {
            return Err(OdeError::InvalidArgument {
                parameter: "xmax".to_string(),
                value: xmax,
                constraint: format!("must be greater than x0 ({})", x0),
            });
        }
        Ok(())
    }

    /// Largest relative deviation of a single rounded step from `h`
    pub const MAX_GRID_ROUNDING: f64 = 1e-6;

    /// Validate that a step of `h` is representable around both ends of
    /// `[x0, xmax]`, so the accumulated grid stays uniformly spaced
    pub fn validate_grid_resolution(x0: f64, xmax: f64, h: f64) -> OdeResult<()> {
        for &x in &[x0, xmax] {
            let rounded_step = (x + h) - x;
            if !rounded_step.is_finite() || ((rounded_step - h) / h).abs() > MAX_GRID_ROUNDING {
                return Err(OdeError::InvalidArgument {
                    parameter: "step size".to_string(),
                    value: h,
                    constraint: format!(
                        "too small to resolve near x = {} (one step advances x by {})",
                        x, rounded_step
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("h", 0.05).is_ok());
        assert!(validate_positive("h", 0.0).is_err());
        assert!(validate_positive("h", -0.1).is_err());
        assert!(validate_positive("h", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("y0", 1.0).is_ok());
        assert!(validate_finite("y0", f64::NAN).is_err());
        assert!(validate_finite("y0", f64::INFINITY).is_err());
        assert!(validate_finite("y0", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_steps() {
        assert!(validate_steps(1).is_ok());
        assert!(validate_steps(60).is_ok());
        assert!(validate_steps(0).is_err());
        assert!(validate_steps(MAX_STEPS).is_ok());
        assert!(validate_steps(MAX_STEPS + 1).is_err());
        assert!(validate_steps(usize::MAX).is_err());
    }

    #[test]
    fn test_validate_interval() {
        assert!(validate_interval(0.0, 3.0).is_ok());
        assert!(validate_interval(-1.0, -0.5).is_ok());
        assert!(validate_interval(3.0, 3.0).is_err());
        assert!(validate_interval(3.0, 0.0).is_err());
        assert!(validate_interval(0.0, f64::INFINITY).is_err());
        assert!(validate_interval(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_validate_grid_resolution() {
        assert!(validate_grid_resolution(0.0, 3.0, 0.05).is_ok());
        assert!(validate_grid_resolution(-10.0, 10.0, 1e-6).is_ok());
        assert!(validate_grid_resolution(1e6, 1e6 + 1.0, 1e-3).is_ok());
        // spacing of doubles near 1e10 is about 1.9e-6
        assert!(validate_grid_resolution(1e10, 1e10 + 1.0, 1e-6).is_err());
        assert!(validate_grid_resolution(0.0, 1.0, 1e-20).is_err());
        assert!(validate_grid_resolution(0.0, f64::MAX, f64::MAX / 2.0).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = OdeError::InvalidArgument {
            parameter: "xmax".to_string(),
            value: -0.5,
            constraint: "must be greater than x0 (0)".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("xmax"));
        assert!(display.contains("-0.5"));
        assert!(display.contains("greater than x0"));
    }

    #[test]
    fn test_instability_display() {
        let error = OdeError::NumericalInstability {
            method: "RK4".to_string(),
            index: 7,
            reason: "y is NaN".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("RK4"));
        assert!(display.contains("sample 7"));
        assert!(display.contains("NaN"));
    }
}
