#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::GenericResult;
use std::sync::Arc;

/// A square matrix of travel costs between nodes, stored in row-major order.
///
/// `cost(i, j)` is the cost of traveling directly from node `i` to node `j`. Diagonal values
/// are kept as they were read, but no formulation depends on them.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    size: usize,
    values: Vec<f64>,
}

impl CostMatrix {
    /// Creates a new matrix of given size from flat row-major values.
    pub fn new(size: usize, values: Vec<f64>) -> GenericResult<Self> {
        if size < 2 {
            return Err(format!("matrix size should be at least 2, got: '{size}'").into());
        }

        let expected = size.checked_mul(size).ok_or_else(|| format!("matrix size is too large: '{size}'"))?;
        if values.len() != expected {
            return Err(format!("expected {expected} values for matrix of size {size}, got: '{}'", values.len()).into());
        }

        if let Some(value) = values.iter().find(|value| !value.is_finite() || **value < 0.) {
            return Err(format!("matrix values should be finite and non-negative, got: '{value}'").into());
        }

        Ok(Self { size, values })
    }

    /// Creates a new matrix from rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> GenericResult<Self> {
        let size = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(format!("matrix is not square: expected row of {size} values, got: '{}'", row.len()).into());
        }

        Self::new(size, rows.into_iter().flatten().collect())
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns cost of traveling from `from` to `to`.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Returns a row of the matrix.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    /// Returns an iterator over matrix rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.size)
    }

    /// Returns flat row-major values.
    pub fn values(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Checks whether `cost(i, j) == cost(j, i)` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.cost(i, j) == self.cost(j, i)))
    }
}

/// A named problem instance: an immutable cost matrix with its node count.
#[derive(Clone, Debug)]
pub struct Instance {
    /// Instance name, typically a file name.
    pub name: String,
    /// Travel costs.
    pub matrix: Arc<CostMatrix>,
}

impl Instance {
    /// Creates a new instance.
    pub fn new(name: &str, matrix: CostMatrix) -> Self {
        Self { name: name.to_string(), matrix: Arc::new(matrix) }
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }
}
