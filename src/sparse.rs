// Copyright (c) 2024 The latticed Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the
// License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either
// express or implied. See the License for the specific language governing permissions and
// limitations under the License.

//! The externally-supplied sparse-matrix boundary [`compute_matrix_elements`]
//! writes into, plus [`CooMatrix`], a coordinate-format reference sink.

use std::sync::Mutex;

use num_complex::Complex64;

/// A sink that accepts matrix-element writes at `(row, col)`, additively.
///
/// Implementations must be `Send + Sync`: [`crate::model::compute_matrix_elements`]
/// calls `accumulate` concurrently from multiple worker threads, one per
/// basis column. A duplicate write to the same `(row, col)` — which
/// happens whenever more than one contraction branch of the normal-ordered
/// Hamiltonian lands on the same matrix cell — must *add* into the
/// existing value, never overwrite it.
pub trait SparseAccumulate: Send + Sync {
    /// Adds `value` into the matrix cell at `(row, col)`.
    fn accumulate(&self, row: usize, col: usize, value: Complex64);

    /// Row count, checked by [`crate::model::compute_matrix_elements`]
    /// against the basis size before assembly starts.
    fn rows(&self) -> usize;

    /// Column count, checked the same way.
    fn cols(&self) -> usize;
}

/// A coordinate-format (COO) sparse matrix: a `Mutex`-guarded list of
/// `(row, col, value)` triplets.
///
/// Reference implementation of [`SparseAccumulate`], analogous to
/// struqture's `CooSparseMatrix` type alias for handing coordinate data to
/// an external consumer — there Python/NumPy, here a dev-only dense
/// `nalgebra` solver in the integration tests.
#[derive(Debug)]
pub struct CooMatrix {
    rows: usize,
    cols: usize,
    triplets: Mutex<Vec<(usize, usize, Complex64)>>,
}

impl CooMatrix {
    /// An empty `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        CooMatrix {
            rows,
            cols,
            triplets: Mutex::new(Vec::new()),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The accumulated `(row, col, value)` triplets, in write order.
    ///
    /// Duplicate `(row, col)` pairs may appear more than once; callers that
    /// need a single value per cell should sum duplicates, which
    /// `into_dense` does.
    pub fn triplets(&self) -> Vec<(usize, usize, Complex64)> {
        self.triplets.lock().expect("CooMatrix mutex poisoned").clone()
    }

    /// Materializes a dense row-major matrix, summing duplicate cells.
    pub fn into_dense(&self) -> Vec<Vec<Complex64>> {
        let mut dense = vec![vec![Complex64::new(0.0, 0.0); self.cols]; self.rows];
        for (row, col, value) in self.triplets() {
            dense[row][col] += value;
        }
        dense
    }
}

impl SparseAccumulate for CooMatrix {
    fn accumulate(&self, row: usize, col: usize, value: Complex64) {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        assert!(col < self.cols, "col {col} out of bounds for {} cols", self.cols);
        self.triplets
            .lock()
            .expect("CooMatrix mutex poisoned")
            .push((row, col, value));
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_writes_accumulate_in_dense_form() {
        let m = CooMatrix::new(2, 2);
        m.accumulate(0, 1, Complex64::new(1.0, 0.0));
        m.accumulate(0, 1, Complex64::new(2.0, 0.0));
        let dense = m.into_dense();
        assert_eq!(dense[0][1], Complex64::new(3.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_write_panics() {
        let m = CooMatrix::new(2, 2);
        m.accumulate(5, 0, Complex64::new(1.0, 0.0));
    }
}
