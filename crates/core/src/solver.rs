//! Gauss-Seidel / SOR relaxation solver for the steady-state plate
//!
//! Implements Liebmann's method: repeated in-place relaxation sweeps over the
//! grid until the largest per-cell relative change drops below the configured
//! tolerance. The top, left and right edges are fixed Dirichlet boundaries;
//! the bottom edge is insulated and relaxed with a mirrored ghost node.

use crate::config::{ConfigError, SolverConfig};
use crate::field::TemperatureField;
use crate::stencil::{self, RowKind};
use std::fmt;
use tracing::{debug, info};

/// Result of a converged solve
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final temperature field
    pub field: TemperatureField,
    /// Number of relaxation sweeps performed
    pub iterations: u32,
    /// Maximum relative change observed during the final sweep
    pub final_error: f64,
}

/// Solve failure: bad configuration or the iteration cap was hit
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Configuration rejected before any sweep ran
    InvalidConfig(ConfigError),
    /// The sweep error never dropped below tolerance within the cap
    MaxIterationsExceeded {
        /// Number of sweeps performed (equals the configured cap)
        iterations: u32,
        /// Maximum relative change of the last sweep
        last_error: f64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid configuration: {err}"),
            Self::MaxIterationsExceeded {
                iterations,
                last_error,
            } => write!(
                f,
                "no convergence after {iterations} iterations (last error {last_error:.6})"
            ),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::MaxIterationsExceeded { .. } => None,
        }
    }
}

impl From<ConfigError> for SolveError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

/// Build the initial field for a configuration
///
/// Row 0 is filled with the top temperature, corners included. Every other
/// row gets the left temperature in column 0, the right temperature in the
/// last column, and zero in between. The bottom row's interior cells are
/// placeholders; the insulated-boundary sweep computes them.
///
/// # Arguments
///
/// * `config` - Solve configuration; only the boundary temperatures and the
///   derived dimension are consulted
#[must_use]
pub fn init_field(config: &SolverConfig) -> TemperatureField {
    let dim = config.derived_dim();
    let mut field = TemperatureField::new(dim);
    for col in 0..dim {
        field.set(0, col, config.top_temp);
    }
    for row in 1..dim {
        field.set(row, 0, config.left_temp);
        field.set(row, dim - 1, config.right_temp);
    }
    field
}

/// Perform exactly one relaxation sweep, in place
///
/// Sweeps rows from the bottom boundary up to (but excluding) the fixed top
/// row, and columns across the interior. Each cell is overwritten
/// immediately, so later cells in the same sweep see already-updated
/// neighbors (Gauss-Seidel semantics).
///
/// # Arguments
///
/// * `field` - Temperature field, mutated in place
/// * `kinds` - Per-row stencil tags from [`stencil::row_kinds`]
/// * `lambda` - SOR relaxation factor
///
/// # Returns
///
/// The maximum per-cell relative change observed during the sweep.
pub fn relaxation_sweep(field: &mut TemperatureField, kinds: &[RowKind], lambda: f64) -> f64 {
    let dim = field.dim();
    let mut max_error = 0.0_f64;
    for row in (1..dim).rev() {
        let kind = kinds[row];
        for col in 1..dim - 1 {
            let old = field.get(row, col);
            let raw = stencil::apply(kind, field, row, col);
            let next = stencil::sor_blend(raw, old, lambda);
            field.set(row, col, next);
            max_error = max_error.max(stencil::relative_change(old, next));
        }
    }
    max_error
}

/// Run the full solve: validate, initialize, relax until converged
///
/// Always performs at least one sweep (the convergence test runs after each
/// sweep, do-while style). Stops as soon as a sweep's maximum relative
/// change is at or below the tolerance.
///
/// # Arguments
///
/// * `config` - Immutable solve configuration
///
/// # Errors
///
/// [`SolveError::InvalidConfig`] if validation rejects the configuration,
/// or [`SolveError::MaxIterationsExceeded`] if the iteration cap is reached
/// without the sweep error dropping below tolerance (e.g. a relaxation
/// factor near the edge of the stability interval).
pub fn solve(config: &SolverConfig) -> Result<Solution, SolveError> {
    config.validate()?;

    let dim = config.derived_dim();
    info!(
        "Starting Liebmann solve: {dim}x{dim} grid, lambda={:.2}, tolerance={}",
        config.relaxation_factor, config.tolerance
    );

    let mut field = init_field(config);
    let kinds = stencil::row_kinds(dim);

    let mut iterations = 0_u32;
    loop {
        let error = relaxation_sweep(&mut field, &kinds, config.relaxation_factor);
        iterations += 1;
        debug!("Sweep {iterations}: max relative change {error:.6}");

        if error <= config.tolerance {
            info!("Converged after {iterations} iterations (error {error:.6})");
            return Ok(Solution {
                field,
                iterations,
                final_error: error,
            });
        }
        if iterations >= config.max_iterations {
            return Err(SolveError::MaxIterationsExceeded {
                iterations,
                last_error: error,
            });
        }
    }
}
