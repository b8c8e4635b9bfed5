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

//! End-to-end scenarios S1-S3: assemble a small Hamiltonian, hand the
//! resulting matrix to a dev-only dense `nalgebra` Hermitian eigensolver,
//! and check the ground-state energy against the closed-form value.

use nalgebra::DMatrix;
use num_complex::Complex64;

use latticed::basis::{Basis, FermionicBasis, SpinSectorFilter};
use latticed::model::compute_matrix_elements;
use latticed::models::{HeisenbergChain, HubbardChain};
use latticed::operator::{Spin, Statistics};
use latticed::prelude::{hopping, Model};
use latticed::sparse::CooMatrix;

fn ground_energy(matrix: &CooMatrix) -> f64 {
    let n = matrix.rows();
    let mut dense = DMatrix::<Complex64>::from_element(n, n, Complex64::new(0.0, 0.0));
    for (row, col, value) in matrix.triplets() {
        dense[(row, col)] += value;
    }
    let eigen = nalgebra::linalg::SymmetricEigen::new(dense);
    eigen.eigenvalues.iter().copied().fold(f64::INFINITY, f64::min)
}

/// S1 - free hopping dimer, two sites, one fermion per spin: ground
/// energy -2.
#[test]
fn s1_free_hopping_dimer_ground_energy() {
    let filter = SpinSectorFilter::new(Spin::Up, 1);
    let basis = FermionicBasis::with_filter(2, 2, true, &filter);

    let up = hopping(Statistics::Fermion, Spin::Up, 0, 1);
    let down = hopping(Statistics::Fermion, Spin::Down, 0, 1);
    let sum = &up + &down;
    let hamiltonian = &sum * Complex64::new(-1.0, 0.0);

    let matrix = CooMatrix::new(basis.size(), basis.size());
    compute_matrix_elements(&hamiltonian, &basis, &matrix);

    let energy = ground_energy(&matrix);
    assert!((energy - (-2.0)).abs() < 1e-9, "expected -2, got {energy}");
}

/// S2 - Hubbard dimer at half filling: ground energy (U - sqrt(U^2 +
/// 16t^2)) / 2 = 1 - sqrt(5).
#[test]
fn s2_hubbard_dimer_ground_energy() {
    let filter = SpinSectorFilter::new(Spin::Up, 1);
    let basis = FermionicBasis::with_filter(2, 2, true, &filter);
    let model = HubbardChain { mu: 0.0, t: 1.0, u: 2.0, size: 2, periodic: true };

    let matrix = CooMatrix::new(basis.size(), basis.size());
    compute_matrix_elements(&model.hamiltonian(), &basis, &matrix);

    let energy = ground_energy(&matrix);
    let expected = 1.0 - 5f64.sqrt();
    assert!((energy - expected).abs() < 1e-9, "expected {expected}, got {energy}");
}

/// S3 - 4-site antiferromagnetic Heisenberg ring: ground energy -2 (the
/// Bethe value), restricted to the single-occupancy-per-site subspace the
/// fermion mapping requires.
#[test]
fn s3_heisenberg_afm_ring_ground_energy() {
    let basis = FermionicBasis::new(4, 4, false);
    let model = HeisenbergChain { j: 1.0, field: 1e-6, size: 4, periodic: true };

    let matrix = CooMatrix::new(basis.size(), basis.size());
    compute_matrix_elements(&model.hamiltonian(), &basis, &matrix);

    let energy = ground_energy(&matrix);
    assert!((energy - (-2.0)).abs() < 1e-6, "expected -2, got {energy}");
}
