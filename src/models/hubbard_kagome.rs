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

//! The single-band Hubbard model on the 12-site Kagome lattice: an inner
//! hexagonal ring (sites 0..5) and an outer ring (sites 6..11), each inner
//! site bonded to two outer sites, with an optional periodic bond closing
//! the outer ring.

use num_complex::Complex64;

use crate::algebra::{density_density, hopping};
use crate::expression::Expression;
use crate::model::Model;
use crate::operator::{Spin, Statistics};

/// The number of sites in the lattice.
pub const SIZE: usize = 12;

const INNER_RING: [(u16, u16); 6] = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)];
const SPOKES: [(u16, u16); 6] = [(0, 6), (1, 7), (2, 8), (3, 9), (4, 10), (5, 11)];
const CROSS_SPOKES: [(u16, u16); 6] = [(1, 6), (2, 7), (3, 8), (4, 9), (5, 10), (0, 11)];
const OUTER_RING: [(u16, u16); 6] = [(6, 10), (7, 11), (8, 6), (9, 7), (10, 8), (11, 9)];

/// `H = -t Σ_<i,j> hopping(σ,i,j) + U Σ_i n_{↑,i} n_{↓,i}`.
pub struct HubbardKagome {
    /// Nearest-neighbour hopping amplitude.
    pub t: f64,
    /// On-site Hubbard repulsion.
    pub u: f64,
    /// Whether the outer ring closes (adds `OUTER_RING` bonds).
    pub periodic: bool,
}

impl Model for HubbardKagome {
    fn hamiltonian(&self) -> Expression {
        let mut result = Expression::new();
        let mut bonds: Vec<(u16, u16)> = Vec::new();
        bonds.extend(INNER_RING);
        bonds.extend(SPOKES);
        bonds.extend(CROSS_SPOKES);
        if self.periodic {
            bonds.extend(OUTER_RING);
        }

        for spin in [Spin::Up, Spin::Down] {
            for &(i, j) in &bonds {
                let h = hopping(Statistics::Fermion, spin, i, j);
                result = result + &h * Complex64::new(-self.t, 0.0);
            }
        }

        for site in 0..SIZE as u16 {
            let dd = density_density(Statistics::Fermion, Spin::Up, site, Spin::Down, site);
            result = result + &dd * Complex64::new(self.u, 0.0);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamiltonian_is_deterministic_and_hermitian() {
        let model = HubbardKagome { t: 1.0, u: 2.0, periodic: true };
        let h1 = model.hamiltonian();
        let h2 = model.hamiltonian();
        assert_eq!(h1, h2);
        let normalized = crate::normal_order::normal_order(&h1).prune(1e-12);
        let adj = crate::normal_order::normal_order(h1.adjoint()).prune(1e-12);
        assert_eq!(normalized, adj);
    }

    #[test]
    fn periodic_adds_outer_ring_bonds() {
        let open = HubbardKagome { t: 1.0, u: 0.0, periodic: false }.hamiltonian();
        let closed = HubbardKagome { t: 1.0, u: 0.0, periodic: true }.hamiltonian();
        assert!(open.len() < closed.len());
    }
}
