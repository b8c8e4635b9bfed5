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

//! Non-strictly-ordered basis: the same mode may appear more than once in
//! an element, the admission rule bosonic (and other non-Pauli-excluded)
//! occupation needs.

use crate::operator::{Operator, Spin, Statistics};

use super::filter::{AcceptAll, BasisFilter};
use super::{generate_words, Basis, BasisElement};

fn modes(orbitals: u16, statistics: Statistics) -> Vec<Operator> {
    (0..orbitals)
        .map(|orbital| Operator::creation(statistics, Spin::Up, orbital))
        .collect()
}

/// A basis over a single spin branch admitting repeated occupation of the
/// same mode (`<=` rather than `<` ordering between consecutive pushes),
/// suitable for bosonic lattices where a mode can hold more than one
/// quantum.
///
/// Defaults to `Spin::Up` for every mode — the single-spin-per-orbital
/// convention the source models that are not spin-½ fermions use.
pub struct GenericBasis {
    orbitals: u16,
    particles: usize,
    statistics: Statistics,
    elements: Vec<BasisElement>,
}

impl GenericBasis {
    /// Builds the basis, accepting every element (no filter).
    ///
    /// # Panics
    ///
    /// Panics if `particles > orbitals` when `statistics` is `Fermion`
    /// (spec.md §7's capacity precondition, specialized to the
    /// single-spin-branch mode set this basis uses).
    pub fn new(orbitals: u16, particles: usize, statistics: Statistics) -> Self {
        Self::with_filter(orbitals, particles, statistics, &AcceptAll)
    }

    /// Builds the basis, keeping only elements `filter` accepts.
    pub fn with_filter(
        orbitals: u16,
        particles: usize,
        statistics: Statistics,
        filter: &dyn BasisFilter,
    ) -> Self {
        if matches!(statistics, Statistics::Fermion) {
            assert!(
                particles <= orbitals as usize,
                "particles ({particles}) exceeds capacity of {orbitals} single-spin fermionic orbitals"
            );
        }
        let mode_list = modes(orbitals, statistics);
        let strict = matches!(statistics, Statistics::Fermion);
        let elements = generate_words(&mode_list, particles, strict, |_, _| true, filter);
        GenericBasis {
            orbitals,
            particles,
            statistics,
            elements,
        }
    }

    /// The statistics this basis's modes obey.
    pub fn statistics(&self) -> Statistics {
        self.statistics
    }
}

impl Basis for GenericBasis {
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

impl PartialEq for GenericBasis {
    fn eq(&self, other: &Self) -> bool {
        self.orbitals == other.orbitals
            && self.particles == other.particles
            && self.statistics == other.statistics
            && self.elements == other.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bosonic_basis_allows_repeated_occupation() {
        // 1 orbital, 3 bosons: only one element exists, (b0^)^3.
        let basis = GenericBasis::new(1, 3, Statistics::Boson);
        assert_eq!(basis.size(), 1);
        assert_eq!(basis.element(0).len(), 3);
    }

    #[test]
    fn bosonic_basis_over_two_orbitals_is_stars_and_bars() {
        // C(orbitals + particles - 1, particles) = C(3, 2) = 3.
        let basis = GenericBasis::new(2, 2, Statistics::Boson);
        assert_eq!(basis.size(), 3);
    }

    #[test]
    fn element_index_round_trips() {
        let basis = GenericBasis::new(3, 2, Statistics::Boson);
        for i in 0..basis.size() {
            let element = basis.element(i).clone();
            assert_eq!(basis.index(&element), Some(i));
        }
    }
}
