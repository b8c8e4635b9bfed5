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

//! Enumeration of many-body Fock-space bases with O(log n) lookup.
//!
//! A basis is a finite, canonically ordered collection of [`BasisElement`]s
//! — each a sorted, all-creation operator word representing
//! `|b⟩ = ∏ᵢ c†ᵢ |0⟩`. [`FermionicBasis`] and [`GenericBasis`] are the two
//! concrete generators; both implement the same [`Basis`] capability so
//! [`crate::model::compute_matrix_elements`] is generic over which one a
//! caller picks, rather than dispatching through a class hierarchy.

mod fermionic;
mod filter;
mod generic;

pub use fermionic::FermionicBasis;
pub use filter::{AcceptAll, BasisFilter, SpinSectorFilter};
pub use generic::GenericBasis;

use crate::term::OperatorWord;

/// A sorted, all-creation operator word: one many-body Fock state.
pub type BasisElement = OperatorWord;

/// A finite, canonically ordered collection of [`BasisElement`]s with
/// indexed lookup.
pub trait Basis {
    /// Number of orbitals the basis is built over.
    fn orbitals(&self) -> u16;

    /// Number of creation operators every element contains.
    fn particles(&self) -> usize;

    /// Number of elements in the basis.
    fn size(&self) -> usize {
        self.elements().len()
    }

    /// The basis elements, in canonical order.
    fn elements(&self) -> &[BasisElement];

    /// The element at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.size()` (precondition violation, spec.md §7).
    fn element(&self, i: usize) -> &BasisElement {
        &self.elements()[i]
    }

    /// The index of `element`, or `None` if it is not a member. Never
    /// panics.
    fn index(&self, element: &BasisElement) -> Option<usize> {
        self.elements().binary_search(element).ok()
    }

    /// Whether `element` is a member. Never panics.
    fn contains(&self, element: &BasisElement) -> bool {
        self.index(element).is_some()
    }
}

/// Shared depth-first enumeration driver for both [`FermionicBasis`] and
/// [`GenericBasis`]: builds every sorted operator word of length
/// `particles` over `modes`, admitting the next mode at index `idx` either
/// strictly (`idx > last`, Pauli exclusion) or non-strictly (`idx >= last`,
/// allowing repeated occupation of a bosonic mode), and applies `filter`
/// only at full-length leaves.
pub(crate) fn generate_words(
    modes: &[crate::operator::Operator],
    particles: usize,
    strict: bool,
    mut admit: impl FnMut(&[crate::operator::Operator], crate::operator::Operator) -> bool,
    filter: &dyn BasisFilter,
) -> Vec<BasisElement> {
    let mut out = Vec::new();
    let mut current: Vec<crate::operator::Operator> = Vec::with_capacity(particles);
    dfs(modes, 0, &mut current, particles, strict, &mut admit, filter, &mut out);
    out.sort();
    out
}

#[allow(clippy::too_many_arguments)]
fn dfs(
    modes: &[crate::operator::Operator],
    start: usize,
    current: &mut Vec<crate::operator::Operator>,
    remaining: usize,
    strict: bool,
    admit: &mut impl FnMut(&[crate::operator::Operator], crate::operator::Operator) -> bool,
    filter: &dyn BasisFilter,
    out: &mut Vec<BasisElement>,
) {
    if remaining == 0 {
        let element: BasisElement = current.iter().copied().collect();
        if filter.accepts(&element) {
            out.push(element);
        }
        return;
    }
    for idx in start..modes.len() {
        let op = modes[idx];
        if !admit(current, op) {
            continue;
        }
        current.push(op);
        let next_start = if strict { idx + 1 } else { idx };
        dfs(modes, next_start, current, remaining - 1, strict, admit, filter, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::{Operator, Spin, Statistics};

    #[test]
    fn strict_admission_enumerates_unique_sorted_pairs() {
        let modes = vec![
            Operator::creation(Statistics::Fermion, Spin::Up, 0),
            Operator::creation(Statistics::Fermion, Spin::Down, 0),
            Operator::creation(Statistics::Fermion, Spin::Up, 1),
            Operator::creation(Statistics::Fermion, Spin::Down, 1),
        ];
        let words = generate_words(&modes, 2, true, |_, _| true, &AcceptAll);
        assert_eq!(words.len(), 6);
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
        let mut dedup = words.clone();
        dedup.dedup();
        assert_eq!(dedup.len(), words.len());
    }
}
