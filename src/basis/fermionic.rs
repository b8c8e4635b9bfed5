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

//! Strictly-ordered fermionic Fock basis: Pauli exclusion forbids any mode
//! from appearing twice in a basis element.

use crate::operator::{Operator, Spin, Statistics};

use super::filter::{AcceptAll, BasisFilter};
use super::{generate_words, Basis, BasisElement};

fn all_modes(orbitals: u16) -> Vec<Operator> {
    let mut modes = Vec::with_capacity(2 * orbitals as usize);
    for orbital in 0..orbitals {
        for spin in [Spin::Up, Spin::Down] {
            modes.push(Operator::creation(Statistics::Fermion, spin, orbital));
        }
    }
    modes
}

/// A fermionic many-body basis over `orbitals` sites with two spin
/// branches per site (`2 * orbitals` modes total).
///
/// Elements are sorted, strictly-increasing creation words of length
/// `particles`; `allow_double_occupancy = false` additionally forbids both
/// spins of the same orbital from co-occurring, the restriction the
/// fermion-mapped spin helpers of [`crate::algebra`] rely on.
pub struct FermionicBasis {
    orbitals: u16,
    particles: usize,
    allow_double_occupancy: bool,
    elements: Vec<BasisElement>,
}

impl FermionicBasis {
    /// Builds the basis, accepting every element (no filter).
    ///
    /// # Panics
    ///
    /// Panics if `particles > 2 * orbitals` (spec.md §7).
    pub fn new(orbitals: u16, particles: usize, allow_double_occupancy: bool) -> Self {
        Self::with_filter(orbitals, particles, allow_double_occupancy, &AcceptAll)
    }

    /// Builds the basis, keeping only elements `filter` accepts.
    ///
    /// # Panics
    ///
    /// Panics if `particles > 2 * orbitals` (spec.md §7).
    pub fn with_filter(
        orbitals: u16,
        particles: usize,
        allow_double_occupancy: bool,
        filter: &dyn BasisFilter,
    ) -> Self {
        let capacity = 2 * orbitals as usize;
        assert!(
            particles <= capacity,
            "particles ({particles}) exceeds capacity of {orbitals} orbitals ({capacity})"
        );
        let modes = all_modes(orbitals);
        let elements = generate_words(
            &modes,
            particles,
            true,
            |current, op| {
                allow_double_occupancy
                    || !current.iter().any(|o: &Operator| o.orbital() == op.orbital())
            },
            filter,
        );
        FermionicBasis {
            orbitals,
            particles,
            allow_double_occupancy,
            elements,
        }
    }

    /// Whether double occupancy (both spins at the same orbital) is
    /// permitted in this basis.
    pub fn allow_double_occupancy(&self) -> bool {
        self.allow_double_occupancy
    }
}

impl Basis for FermionicBasis {
    fn orbitals(&self) -> u16 {
        self.orbitals
    }

    fn particles(&self) -> usize {
        self.particles
    }

    fn elements(&self) -> &[BasisElement] {
        &self.elements
    }
}

impl PartialEq for FermionicBasis {
    fn eq(&self, other: &Self) -> bool {
        self.orbitals == other.orbitals
            && self.particles == other.particles
            && self.elements == other.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::filter::SpinSectorFilter;

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    /// S6: Basis(2,2) for fermions with both spins has size 6.
    #[test]
    fn s6_two_orbital_two_particle_basis_has_six_elements() {
        let basis = FermionicBasis::new(2, 2, true);
        assert_eq!(basis.size(), 6);
    }

    /// Invariant 8: size equals C(2N, P) for the unrestricted basis.
    #[test]
    fn size_matches_binomial_coefficient() {
        for orbitals in 1..=4u16 {
            for particles in 0..=(2 * orbitals as usize) {
                let basis = FermionicBasis::new(orbitals, particles, true);
                assert_eq!(basis.size(), binomial(2 * orbitals as usize, particles));
            }
        }
    }

    /// Invariant 9: every element round-trips through index/element.
    #[test]
    fn element_index_round_trips_for_every_member() {
        let basis = FermionicBasis::new(3, 2, true);
        for i in 0..basis.size() {
            let element = basis.element(i).clone();
            assert_eq!(basis.index(&element), Some(i));
        }
    }

    #[test]
    fn index_of_non_member_is_none() {
        let basis = FermionicBasis::new(2, 1, true);
        let not_present: BasisElement = [
            Operator::creation(Statistics::Fermion, Spin::Up, 0),
            Operator::creation(Statistics::Fermion, Spin::Down, 0),
        ]
        .into_iter()
        .collect();
        assert!(!basis.contains(&not_present));
        assert_eq!(basis.index(&not_present), None);
    }

    #[test]
    fn disallowing_double_occupancy_excludes_same_orbital_pairs() {
        let basis = FermionicBasis::new(2, 2, false);
        for element in basis.elements() {
            let orbitals: Vec<u16> = element.iter().map(|op| op.orbital()).collect();
            let mut unique = orbitals.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), orbitals.len());
        }
    }

    #[test]
    fn spin_sector_filter_restricts_to_one_up_one_down() {
        let filter = SpinSectorFilter::new(Spin::Up, 1);
        let basis = FermionicBasis::with_filter(2, 2, true, &filter);
        assert_eq!(basis.size(), 4);
    }
}
