//! Steady-State Heat Plate Core Library
//!
//! Solves the 2-D steady-state heat (Laplace) equation on a square plate by
//! Liebmann's method: Gauss-Seidel relaxation with successive over-relaxation
//! (SOR), under mixed boundary conditions.
//!
//! ## Boundary layout
//!
//! - Top, left and right edges: fixed-temperature (Dirichlet) boundaries
//! - Bottom edge: thermally insulated (zero-gradient Neumann), approximated
//!   by reflecting the node above as a ghost node
//!
//! The solver runs single-threaded and mutates one owned grid in place; a
//! solve produces a converged [`TemperatureField`] plus the sweep count.

pub mod config;
pub mod field;
pub mod render;
pub mod solver;
pub mod stencil;

// Re-export core types
pub use config::{ConfigError, SolverConfig};
pub use field::TemperatureField;
pub use render::{render_grid, render_report};
pub use solver::{init_field, relaxation_sweep, solve, Solution, SolveError};
pub use stencil::RowKind;
