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

//! Factories for the canonical one- and two-body building blocks used to
//! assemble lattice Hamiltonians.
//!
//! Spin-½ operators are represented via fermionic particle operators on a
//! two-spin-per-orbital mode (§4.D): faithful only on the single-occupancy
//! subspace of each site, which the basis (typically [`crate::basis::FermionicBasis`]
//! with `allow_double_occupancy = false`) is responsible for restricting to.

use num_complex::Complex64;

use crate::expression::Expression;
use crate::operator::{Operator, Spin, Statistics};
use crate::term::Term;

fn one(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

/// `c†_{σ,i} c_{σ',j}`, coefficient 1.
pub fn one_body(statistics: Statistics, spin_i: Spin, i: u16, spin_j: Spin, j: u16) -> Expression {
    let term = Term::new(
        one(1.0),
        [
            Operator::creation(statistics, spin_i, i),
            Operator::annihilation(statistics, spin_j, j),
        ],
    );
    Expression::from(term)
}

/// `n_{σ,i} = c†_{σ,i} c_{σ,i}`.
pub fn density(statistics: Statistics, spin: Spin, orbital: u16) -> Expression {
    one_body(statistics, spin, orbital, spin, orbital)
}

/// `hopping(σ,i,j) = one_body(σ,i,σ,j) + adjoint`, the Hermitian hopping
/// term between two orbitals of the same spin.
pub fn hopping(statistics: Statistics, spin: Spin, i: u16, j: u16) -> Expression {
    let forward = one_body(statistics, spin, i, spin, j);
    let backward = forward.adjoint();
    forward + backward
}

/// `n_{σ,i} n_{σ',j} = c†_{σ,i} c_{σ,i} c†_{σ',j} c_{σ',j}`.
pub fn density_density(
    statistics: Statistics,
    spin_i: Spin,
    i: u16,
    spin_j: Spin,
    j: u16,
) -> Expression {
    let ni = density(statistics, spin_i, i);
    let nj = density(statistics, spin_j, j);
    &ni * &nj
}

/// `c†_{↑,i} c_{↓,i}`, the fermionic spin-raising operator at site `i`.
pub fn spin_flip(orbital: u16) -> Expression {
    one_body(Statistics::Fermion, Spin::Up, orbital, Spin::Down, orbital)
}

/// `S_x(i) = ½(spin_flip(i) + adjoint)`.
pub fn spin_x(orbital: u16) -> Expression {
    let flip = spin_flip(orbital);
    let sum = &flip + &flip.adjoint();
    &sum * one(0.5)
}

/// `S_y(i) = (i/2)(adjoint(spin_flip(i)) − spin_flip(i))`.
pub fn spin_y(orbital: u16) -> Expression {
    let flip = spin_flip(orbital);
    let diff = &flip.adjoint() - &flip;
    &diff * Complex64::new(0.0, 0.5)
}

/// `S_z(i) = ½(n_↑ − n_↓)`.
pub fn spin_z(orbital: u16) -> Expression {
    let up = density(Statistics::Fermion, Spin::Up, orbital);
    let down = density(Statistics::Fermion, Spin::Down, orbital);
    let diff = &up - &down;
    &diff * one(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normal_order::normal_order;

    #[test]
    fn hopping_is_hermitian() {
        let h = hopping(Statistics::Fermion, Spin::Up, 0, 1);
        assert_eq!(normal_order(&h).prune(1e-12), normal_order(h.adjoint()).prune(1e-12));
    }

    #[test]
    fn density_is_self_adjoint() {
        let n = density(Statistics::Fermion, Spin::Up, 3);
        assert_eq!(normal_order(&n).prune(1e-12), normal_order(n.adjoint()).prune(1e-12));
    }

    #[test]
    fn spin_x_y_z_are_hermitian() {
        for expr in [spin_x(0), spin_y(0), spin_z(0)] {
            assert_eq!(
                normal_order(&expr).prune(1e-12),
                normal_order(expr.adjoint()).prune(1e-12)
            );
        }
    }

    #[test]
    fn density_density_has_four_operators_per_term() {
        let dd = density_density(Statistics::Fermion, Spin::Up, 0, Spin::Down, 1);
        for (word, _) in dd.terms() {
            assert_eq!(word.len(), 4);
        }
    }
}
