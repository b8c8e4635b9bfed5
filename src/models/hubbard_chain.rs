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

//! The single-band Hubbard model on a 1-D chain.

use num_complex::Complex64;

use crate::algebra::{density, density_density, hopping};
use crate::expression::Expression;
use crate::model::Model;
use crate::operator::{Spin, Statistics};

/// `H = -μ Σ n_{σ,i} - t Σ hopping(σ,i,i+1) + U Σ n_{↑,i} n_{↓,i}`.
///
/// `periodic` controls whether site `size - 1` bonds back to site `0`.
pub struct HubbardChain {
    /// Chemical potential.
    pub mu: f64,
    /// Nearest-neighbour hopping amplitude.
    pub t: f64,
    /// On-site Hubbard repulsion.
    pub u: f64,
    /// Number of sites.
    pub size: usize,
    /// Whether the chain closes into a ring.
    pub periodic: bool,
}

impl Model for HubbardChain {
    fn hamiltonian(&self) -> Expression {
        let mut result = Expression::new();
        // A 2-site periodic ring has one physical bond, not two: (0,1)
        // and (1,0) are the same bond, and `hopping` is already symmetric
        // in its two orbitals, so counting both would double the amplitude.
        let bonds = if self.periodic {
            if self.size <= 2 {
                self.size.saturating_sub(1)
            } else {
                self.size
            }
        } else {
            self.size.saturating_sub(1)
        };

        for spin in [Spin::Up, Spin::Down] {
            for i in 0..self.size {
                let n = density(Statistics::Fermion, spin, i as u16);
                result = result + &n * Complex64::new(-self.mu, 0.0);
            }
            for i in 0..bonds {
                let j = (i + 1) % self.size;
                let h = hopping(Statistics::Fermion, spin, i as u16, j as u16);
                result = result + &h * Complex64::new(-self.t, 0.0);
            }
        }

        for i in 0..self.size {
            let dd = density_density(Statistics::Fermion, Spin::Up, i as u16, Spin::Down, i as u16);
            result = result + &dd * Complex64::new(self.u, 0.0);
        }

        result
    }
}
