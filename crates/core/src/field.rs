//! Temperature field container
//!
//! Stores the square 2D temperature grid as a flat `Vec<f64>` in row-major
//! order. Temperatures use f64 throughout for precision in the relative-error
//! convergence metric.

use serde::{Deserialize, Serialize};

/// Square 2D temperature field
///
/// Row 0 is the top (Dirichlet) boundary, row `dim - 1` the insulated bottom
/// boundary, column 0 the left boundary and column `dim - 1` the right
/// boundary. The dimension never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureField {
    /// Field values in row-major order (row * dim + col)
    data: Vec<f64>,
    /// Grid dimension in cells (rows == cols)
    dim: usize,
}

impl TemperatureField {
    /// Create a new square field with given dimension, initialized to zero
    ///
    /// # Arguments
    ///
    /// * `dim` - Grid dimension in cells (rows and columns)
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim * dim],
            dim,
        }
    }

    /// Grid dimension in cells
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get value at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.dim && col < self.dim,
            "Coordinates out of bounds"
        );
        self.data[row * self.dim + col]
    }

    /// Set value at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.dim && col < self.dim,
            "Coordinates out of bounds"
        );
        self.data[row * self.dim + col] = value;
    }

    /// Get reference to the raw field data (row-major)
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over rows as slices, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.dim)
    }
}
