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

//! Pluggable predicate gate applied at basis-generation leaves.

use super::BasisElement;

/// A predicate over a full-length basis element.
///
/// Applied only once a candidate word has reached `particles` operators
/// (a leaf of the generation DFS), never on a partial word.
pub trait BasisFilter: Send + Sync {
    /// Returns `true` if `element` should be kept in the basis.
    fn accepts(&self, element: &BasisElement) -> bool;
}

/// The default filter: every full-length word is accepted.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl BasisFilter for AcceptAll {
    fn accepts(&self, _element: &BasisElement) -> bool {
        true
    }
}

/// Accepts only elements with exactly `count` operators at `spin`.
///
/// A concrete particle-number-per-spin filter, e.g. to restrict a
/// two-fermion basis to the one-up-one-down sector used by S1/S2.
#[derive(Clone, Copy, Debug)]
pub struct SpinSectorFilter {
    spin: crate::operator::Spin,
    count: usize,
}

impl SpinSectorFilter {
    /// A filter requiring exactly `count` operators with the given `spin`.
    pub fn new(spin: crate::operator::Spin, count: usize) -> Self {
        SpinSectorFilter { spin, count }
    }
}

impl BasisFilter for SpinSectorFilter {
    fn accepts(&self, element: &BasisElement) -> bool {
        element.iter().filter(|op| op.spin() == self.spin).count() == self.count
    }
}
