//! Convergence behavior suite for the Liebmann solver
//!
//! Covers determinism, error-trend behavior, the relaxation-factor sweep
//! range, and the iteration cap.

use heatplate_core::stencil::row_kinds;
use heatplate_core::{init_field, relaxation_sweep, solve, SolveError, SolverConfig};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Identical configurations must yield bit-identical fields and counts
#[test]
fn test_determinism_bit_identical_runs() {
    let config = SolverConfig::default();
    let first = solve(&config).expect("solve should converge");
    let second = solve(&config).expect("solve should converge");

    assert_eq!(first.iterations, second.iterations);
    assert_eq!(first.field.as_slice(), second.field.as_slice());
}

/// The per-sweep max error must trend toward zero for a stable lambda
#[test]
fn test_error_trend_decreases() {
    let config = SolverConfig::default();
    let mut field = init_field(&config);
    let kinds = row_kinds(field.dim());

    let errors: Vec<f64> = (0..30)
        .map(|_| relaxation_sweep(&mut field, &kinds, config.relaxation_factor))
        .collect();

    // Not strictly monotone sweep-to-sweep, but the trend must be down
    assert!(
        errors[29] < errors[0] / 10.0,
        "error failed to decay: first {}, last {}",
        errors[0],
        errors[29]
    );
    assert!(errors[29] < config.tolerance);
}

/// Scenario B: lambda changes the speed, not the fixed point
#[test]
fn test_lambda_affects_speed_not_fixed_point() {
    let gauss_seidel = SolverConfig {
        relaxation_factor: 1.0,
        tolerance: 1e-9,
        ..SolverConfig::default()
    };
    let over_relaxed = SolverConfig {
        relaxation_factor: 1.5,
        tolerance: 1e-9,
        ..SolverConfig::default()
    };

    let plain = solve(&gauss_seidel).expect("plain Gauss-Seidel should converge");
    let sor = solve(&over_relaxed).expect("SOR should converge");

    assert_ne!(
        plain.iterations, sor.iterations,
        "lambda 1.0 and 1.5 should need different sweep counts"
    );
    for (a, b) in plain.field.as_slice().iter().zip(sor.field.as_slice()) {
        assert!(
            (a - b).abs() < 1e-5,
            "fixed points diverge: {a} vs {b}"
        );
    }
}

/// Every lambda in the stable range must terminate within the cap
#[test]
fn test_stable_lambda_range_terminates() {
    for lambda in [1.0, 1.2, 1.4, 1.6, 1.8] {
        let config = SolverConfig {
            relaxation_factor: lambda,
            ..SolverConfig::default()
        };
        let solution = solve(&config)
            .unwrap_or_else(|e| panic!("lambda {lambda} failed to converge: {e}"));
        assert!(
            solution.iterations < 1_000,
            "lambda {lambda} took {} sweeps",
            solution.iterations
        );
    }
}

/// Hitting the cap must report a distinct non-convergence error, not hang
#[test]
fn test_iteration_cap_reports_non_convergence() {
    let config = SolverConfig {
        tolerance: 1e-300,
        max_iterations: 50,
        ..SolverConfig::default()
    };
    match solve(&config) {
        Err(SolveError::MaxIterationsExceeded {
            iterations,
            last_error,
        }) => {
            assert_eq!(iterations, 50);
            assert!(last_error > 1e-300);
        }
        other => panic!("expected MaxIterationsExceeded, got {other:?}"),
    }
}

/// A larger plate still converges and respects its derived dimension
#[test]
fn test_larger_plate_converges() {
    let config = SolverConfig {
        interior_nodes: 400,
        max_iterations: 100_000,
        ..SolverConfig::default()
    };
    assert_eq!(config.derived_dim(), 22);
    let solution = solve(&config).expect("400-node plate should converge");
    assert_eq!(solution.field.dim(), 22);
    assert!(solution.final_error <= config.tolerance);
}
