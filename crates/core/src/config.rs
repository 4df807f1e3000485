//! Solver configuration and validation
//!
//! All solve parameters live in an immutable [`SolverConfig`] value passed
//! into the solver, so multiple independent solves (e.g. parameter sweeps)
//! can run in one process without shared state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for one steady-state solve
///
/// Defaults reproduce the classic insulated-bottom plate problem:
/// 49 interior nodes (a 9x9 grid with the boundary ring), top edge at 100,
/// left at 75, right at 50, over-relaxation factor 1.5 and a 1% tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Fixed temperature along the top edge (row 0, corners included)
    pub top_temp: f64,
    /// Fixed temperature along the left edge (column 0)
    pub left_temp: f64,
    /// Fixed temperature along the right edge (column D-1)
    pub right_temp: f64,
    /// Interior node count; the grid dimension is `ceil(sqrt(n)) + 2`
    pub interior_nodes: usize,
    /// SOR relaxation factor, in the open interval (0, 2); 1.0 is plain
    /// Gauss-Seidel, values above 1.0 over-relax
    pub relaxation_factor: f64,
    /// Maximum relative change allowed across a sweep before the solve
    /// counts as converged
    pub tolerance: f64,
    /// Hard cap on sweeps; hitting it yields a non-convergence error
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            top_temp: 100.0,
            left_temp: 75.0,
            right_temp: 50.0,
            interior_nodes: 49,
            relaxation_factor: 1.5,
            tolerance: 0.01,
            max_iterations: 10_000,
        }
    }
}

impl SolverConfig {
    /// Grid dimension derived from the interior node count
    ///
    /// # Returns
    ///
    /// `ceil(sqrt(interior_nodes)) + 2`: one interior block plus the
    /// boundary ring on each side.
    #[must_use]
    pub fn derived_dim(&self) -> usize {
        (self.interior_nodes as f64).sqrt().ceil() as usize + 2
    }

    /// Validate the configuration before solving
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid parameter:
    /// zero interior nodes, a relaxation factor outside (0, 2), a
    /// non-positive or non-finite tolerance, a zero iteration cap, or a
    /// non-finite boundary temperature.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interior_nodes == 0 {
            return Err(ConfigError::NoInteriorNodes);
        }
        if !self.relaxation_factor.is_finite()
            || self.relaxation_factor <= 0.0
            || self.relaxation_factor >= 2.0
        {
            return Err(ConfigError::RelaxationFactorOutOfRange(
                self.relaxation_factor,
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterationCap);
        }
        for (name, value) in [
            ("top_temp", self.top_temp),
            ("left_temp", self.left_temp),
            ("right_temp", self.right_temp),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteBoundary { name, value });
            }
        }
        Ok(())
    }
}

/// Configuration validation failure, surfaced before any sweep runs
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `interior_nodes` was zero; there is nothing to solve for
    NoInteriorNodes,
    /// Relaxation factor outside the SOR stability interval (0, 2)
    RelaxationFactorOutOfRange(f64),
    /// Tolerance not a positive finite number
    InvalidTolerance(f64),
    /// Iteration cap of zero would forbid the mandatory first sweep
    ZeroIterationCap,
    /// A fixed boundary temperature was NaN or infinite
    NonFiniteBoundary {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInteriorNodes => write!(f, "interior_nodes must be at least 1"),
            Self::RelaxationFactorOutOfRange(lambda) => write!(
                f,
                "relaxation_factor must lie strictly between 0 and 2, got {lambda}"
            ),
            Self::InvalidTolerance(tol) => {
                write!(f, "tolerance must be a positive finite number, got {tol}")
            }
            Self::ZeroIterationCap => write!(f, "max_iterations must be at least 1"),
            Self::NonFiniteBoundary { name, value } => {
                write!(f, "boundary temperature '{name}' must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_dim_perfect_square() {
        let config = SolverConfig {
            interior_nodes: 49,
            ..SolverConfig::default()
        };
        assert_eq!(config.derived_dim(), 9);
    }

    #[test]
    fn test_derived_dim_rounds_up() {
        // 50 interior nodes → ceil(sqrt(50)) = 8 → dim 10
        let config = SolverConfig {
            interior_nodes: 50,
            ..SolverConfig::default()
        };
        assert_eq!(config.derived_dim(), 10);
    }

    #[test]
    fn test_derived_dim_minimal() {
        let config = SolverConfig {
            interior_nodes: 1,
            ..SolverConfig::default()
        };
        assert_eq!(config.derived_dim(), 3);
    }

    #[test]
    fn test_rejects_zero_interior_nodes() {
        let config = SolverConfig {
            interior_nodes: 0,
            ..SolverConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoInteriorNodes));
    }

    #[test]
    fn test_rejects_lambda_outside_stability_interval() {
        for lambda in [0.0, -0.5, 2.0, 2.5, f64::NAN] {
            let config = SolverConfig {
                relaxation_factor: lambda,
                ..SolverConfig::default()
            };
            assert!(
                config.validate().is_err(),
                "lambda {lambda} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        for tol in [0.0, -0.01, f64::INFINITY] {
            let config = SolverConfig {
                tolerance: tol,
                ..SolverConfig::default()
            };
            assert!(config.validate().is_err(), "tolerance {tol} should be rejected");
        }
    }

    #[test]
    fn test_rejects_non_finite_boundary() {
        let config = SolverConfig {
            left_temp: f64::NAN,
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteBoundary { name: "left_temp", .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = ConfigError::RelaxationFactorOutOfRange(2.5);
        assert!(err.to_string().contains("relaxation_factor"));
    }
}
