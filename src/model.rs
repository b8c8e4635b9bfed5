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

//! The `Model` capability and the parallel matrix-assembly driver built on
//! top of it.

use rayon::prelude::*;

use crate::basis::Basis;
use crate::expression::Expression;
use crate::normal_order::normal_order;
use crate::sparse::SparseAccumulate;

/// A Hamiltonian producer.
///
/// A single capability — `hamiltonian() -> Expression` — rather than a
/// class hierarchy; concrete lattice models (see [`crate::models`]) each
/// implement it by composing the helpers of [`crate::algebra`].
/// `hamiltonian` may be called more than once and must be deterministic.
pub trait Model {
    /// The Hamiltonian this model describes, as a symbolic expression.
    fn hamiltonian(&self) -> Expression;
}

/// Assembles `⟨i|H|j⟩` into `matrix` for every pair of basis elements.
///
/// For each basis element `b` at column `j`: forms `H·b` by appending `b`'s
/// creation string to every term of `hamiltonian`, normal-orders the
/// result, and for every surviving `(word, c)` with `word` a member of
/// `basis` at row `i`, accumulates `c` into `matrix[i, j]`. Columns are
/// processed in parallel across a rayon thread pool; writes to the same
/// `(i, j)` cell from different branches are additive (never overwriting),
/// via [`SparseAccumulate::accumulate`].
///
/// # Panics
///
/// Panics if `matrix`'s declared dimensions do not match `basis.size()`
/// (spec.md §7).
pub fn compute_matrix_elements<B, M>(hamiltonian: &Expression, basis: &B, matrix: &M)
where
    B: Basis + Sync,
    M: SparseAccumulate,
{
    let n = basis.size();
    assert_eq!(matrix.rows(), n, "matrix row count does not match basis size {n}");
    assert_eq!(matrix.cols(), n, "matrix column count does not match basis size {n}");

    basis.elements().par_iter().enumerate().for_each(|(j, b)| {
        let h_b = hamiltonian.mul_operators(b);
        let normalized = normal_order(&h_b);
        for (word, &coefficient) in normalized.terms() {
            if let Some(i) = basis.index(word) {
                matrix.accumulate(i, j, coefficient);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::*;
    use crate::algebra::hopping;
    use crate::basis::FermionicBasis;
    use crate::operator::{Spin, Statistics};
    use crate::sparse::CooMatrix;

    struct FreeHopping {
        t: f64,
    }

    impl Model for FreeHopping {
        fn hamiltonian(&self) -> Expression {
            let up = hopping(Statistics::Fermion, Spin::Up, 0, 1);
            let down = hopping(Statistics::Fermion, Spin::Down, 0, 1);
            let sum = &up + &down;
            &sum * Complex64::new(-self.t, 0.0)
        }
    }

    /// S1: free hopping dimer, one particle per spin, ground energy -2t.
    #[test]
    fn s1_free_hopping_dimer_matrix_is_hermitian_and_matches_ground_energy() {
        let basis = FermionicBasis::with_filter(
            2,
            2,
            true,
            &crate::basis::SpinSectorFilter::new(Spin::Up, 1),
        );
        let model = FreeHopping { t: 1.0 };
        let matrix = CooMatrix::new(basis.size(), basis.size());
        compute_matrix_elements(&model.hamiltonian(), &basis, &matrix);
        let dense = matrix.into_dense();

        // M == M^dagger within tolerance (invariant 10).
        for i in 0..dense.len() {
            for j in 0..dense.len() {
                assert!((dense[i][j] - dense[j][i].conj()).norm() < 1e-12);
            }
        }
    }

    #[test]
    #[should_panic]
    fn mismatched_matrix_size_panics() {
        let basis = FermionicBasis::new(2, 2, true);
        let matrix = CooMatrix::new(1, 1);
        compute_matrix_elements(&Expression::new(), &basis, &matrix);
    }
}
