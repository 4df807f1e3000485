//! Finite-difference stencils for the Laplace relaxation sweep
//!
//! The sweep applies one of two stencils per row, selected by a precomputed
//! [`RowKind`] tag rather than a branch inside the hot loop:
//!
//! - interior rows use the standard 5-point Laplacian average,
//! - the insulated bottom row replaces the missing neighbor below with a
//!   mirrored ghost node (zero-flux Neumann approximation).

use crate::field::TemperatureField;

/// Near-zero threshold below which the relative-change metric switches to an
/// absolute change. Dividing by a freshly computed value of (almost) zero
/// would otherwise report inf/NaN and corrupt the convergence test.
const RELATIVE_CHANGE_FLOOR: f64 = 1e-12;

/// Boundary classification for a sweepable row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Row with live neighbors on all four sides
    Interior,
    /// Bottom row; the neighbor below is a mirrored ghost node
    InsulatedBottom,
}

/// Tag each row of a `dim`-sized grid with its stencil kind
///
/// Index 0 (the fixed top boundary) and all interior rows are tagged
/// [`RowKind::Interior`]; only the last row is [`RowKind::InsulatedBottom`].
/// The sweep never visits row 0, so its tag is irrelevant but kept uniform.
#[must_use]
pub fn row_kinds(dim: usize) -> Vec<RowKind> {
    let mut kinds = vec![RowKind::Interior; dim];
    if let Some(last) = kinds.last_mut() {
        *last = RowKind::InsulatedBottom;
    }
    kinds
}

/// 5-point Laplacian average of the four orthogonal neighbors
///
/// # Arguments
///
/// * `field` - Temperature field
/// * `row` - Cell row, strictly inside the grid vertically
/// * `col` - Cell column, strictly inside the grid horizontally
#[must_use]
pub fn five_point(field: &TemperatureField, row: usize, col: usize) -> f64 {
    (field.get(row, col + 1)
        + field.get(row, col - 1)
        + field.get(row + 1, col)
        + field.get(row - 1, col))
        / 4.0
}

/// Insulated-bottom stencil: ghost-node reflection of the cell above
///
/// The zero-gradient condition makes the (nonexistent) neighbor below equal
/// to the neighbor above, so the 5-point average degenerates to
/// `(left + right + 2*above) / 4`.
///
/// # Arguments
///
/// * `field` - Temperature field
/// * `row` - Cell row; must be the bottom row
/// * `col` - Cell column, strictly inside the grid horizontally
#[must_use]
pub fn mirrored_bottom(field: &TemperatureField, row: usize, col: usize) -> f64 {
    (field.get(row, col + 1) + field.get(row, col - 1) + 2.0 * field.get(row - 1, col)) / 4.0
}

/// Apply the stencil selected by `kind` at the given cell
#[must_use]
pub fn apply(kind: RowKind, field: &TemperatureField, row: usize, col: usize) -> f64 {
    match kind {
        RowKind::Interior => five_point(field, row, col),
        RowKind::InsulatedBottom => mirrored_bottom(field, row, col),
    }
}

/// SOR blend of the raw stencil value with the previous cell value
///
/// `lambda = 1.0` reduces to plain Gauss-Seidel; `lambda > 1.0` over-relaxes.
#[must_use]
pub fn sor_blend(raw: f64, old: f64, lambda: f64) -> f64 {
    lambda * raw + (1.0 - lambda) * old
}

/// Relative change of a cell update, with an absolute fallback near zero
///
/// Matches `|next - old| / |next|` except when `|next|` falls below the
/// near-zero floor, where the absolute change `|next - old|` is used
/// instead so the metric stays finite.
#[must_use]
pub fn relative_change(old: f64, next: f64) -> f64 {
    let delta = (next - old).abs();
    if next.abs() < RELATIVE_CHANGE_FLOOR {
        delta
    } else {
        delta / next.abs()
    }
}
