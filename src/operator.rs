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

//! A byte-packed ladder operator.
//!
//! An [`Operator`] is identified by four orthogonal attributes — creation
//! vs. annihilation, boson vs. fermion, spin up/down, and an orbital index
//! — packed into a single `u16` so the derived total order matches the
//! normal-ordering convention directly: all creation operators precede all
//! annihilation operators, and among same-type operators, lower
//! `identifier()` precedes higher.

use std::fmt;

/// Number of bits reserved for the orbital index.
const ORBITAL_BITS: u32 = 13;

/// One past the largest orbital index an [`Operator`] can represent.
pub const MAX_ORBITAL: u16 = 1 << ORBITAL_BITS;

const TYPE_SHIFT: u16 = 15;
const ORBITAL_SHIFT: u16 = 2;
const SPIN_SHIFT: u16 = 1;
const STATISTICS_SHIFT: u16 = 0;

const TYPE_MASK: u16 = 1 << TYPE_SHIFT;
const ORBITAL_MASK: u16 = ((1u16 << ORBITAL_BITS) - 1) << ORBITAL_SHIFT;
const SPIN_MASK: u16 = 1 << SPIN_SHIFT;
const STATISTICS_MASK: u16 = 1 << STATISTICS_SHIFT;

/// Whether an [`Operator`] creates or annihilates a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
pub enum OperatorType {
    /// Adds a particle to a mode.
    Creation = 0,
    /// Removes a particle from a mode.
    Annihilation = 1,
}

/// Quantum statistics an [`Operator`] obeys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
pub enum Statistics {
    /// Bosonic (symmetric) statistics.
    Boson = 0,
    /// Fermionic (antisymmetric) statistics.
    Fermion = 1,
}

/// The two spin branches modelled by this crate.
///
/// Sufficient for spin-½ models, and for spinless models represented as
/// both branches of a single effective spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
pub enum Spin {
    /// Spin up.
    Up = 0,
    /// Spin down.
    Down = 1,
}

/// A single creation or annihilation operator, packed into a `u16`.
///
/// Bit layout (MSB to LSB): `type`(1) `orbital`(13) `spin`(1) `statistics`(1).
/// [`Operator::identifier`] masks out the `type` bit, so a creation operator
/// and its adjoint annihilation operator share the same identifier — the
/// pairing key used during contraction.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
pub struct Operator(u16);

impl Operator {
    /// Builds a new operator.
    ///
    /// # Panics
    ///
    /// Panics if `orbital >= MAX_ORBITAL`; this is a precondition
    /// violation, not a recoverable error (spec.md §7).
    pub fn new(op_type: OperatorType, statistics: Statistics, spin: Spin, orbital: u16) -> Self {
        assert!(
            orbital < MAX_ORBITAL,
            "orbital index {orbital} exceeds MAX_ORBITAL ({MAX_ORBITAL})"
        );
        let bits = ((op_type as u16) << TYPE_SHIFT)
            | (orbital << ORBITAL_SHIFT)
            | ((spin as u16) << SPIN_SHIFT)
            | ((statistics as u16) << STATISTICS_SHIFT);
        Operator(bits)
    }

    /// Convenience constructor for a creation operator.
    pub fn creation(statistics: Statistics, spin: Spin, orbital: u16) -> Self {
        Self::new(OperatorType::Creation, statistics, spin, orbital)
    }

    /// Convenience constructor for an annihilation operator.
    pub fn annihilation(statistics: Statistics, spin: Spin, orbital: u16) -> Self {
        Self::new(OperatorType::Annihilation, statistics, spin, orbital)
    }

    /// The packed representation, exposed for hashing/debugging.
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Whether this is a creation or annihilation operator.
    pub fn op_type(&self) -> OperatorType {
        if self.0 & TYPE_MASK == 0 {
            OperatorType::Creation
        } else {
            OperatorType::Annihilation
        }
    }

    /// The statistics this operator obeys.
    pub fn statistics(&self) -> Statistics {
        if self.0 & STATISTICS_MASK == 0 {
            Statistics::Boson
        } else {
            Statistics::Fermion
        }
    }

    /// The spin branch this operator acts on.
    pub fn spin(&self) -> Spin {
        if self.0 & SPIN_MASK == 0 {
            Spin::Up
        } else {
            Spin::Down
        }
    }

    /// The orbital index this operator acts on.
    pub fn orbital(&self) -> u16 {
        (self.0 & ORBITAL_MASK) >> ORBITAL_SHIFT
    }

    /// The packed value with the `type` bit masked out.
    ///
    /// Equal for a mode and its adjoint; used as the pairing key during
    /// contraction and to order operators of the same type.
    pub fn identifier(&self) -> u16 {
        self.0 & !TYPE_MASK
    }

    /// Returns `true` if this operator is a creation operator.
    pub fn is_creation(&self) -> bool {
        matches!(self.op_type(), OperatorType::Creation)
    }

    /// Returns `true` if this operator is an annihilation operator.
    pub fn is_annihilation(&self) -> bool {
        matches!(self.op_type(), OperatorType::Annihilation)
    }

    /// Returns `true` if this operator obeys fermionic statistics.
    pub fn is_fermion(&self) -> bool {
        matches!(self.statistics(), Statistics::Fermion)
    }

    /// Returns `true` if this operator obeys bosonic statistics.
    pub fn is_boson(&self) -> bool {
        matches!(self.statistics(), Statistics::Boson)
    }

    /// The hermitian conjugate: flips `type` only, leaving statistics,
    /// spin and orbital unchanged.
    pub fn adjoint(&self) -> Self {
        Operator(self.0 ^ TYPE_MASK)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operator {{ type: {:?}, statistics: {:?}, spin: {:?}, orbital: {} }}",
            self.op_type(),
            self.statistics(),
            self.spin(),
            self.orbital()
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_fermion() { 'c' } else { 'b' };
        let dagger = if self.is_creation() { "^" } else { "" };
        let spin = match self.spin() {
            Spin::Up => '\u{2191}',
            Spin::Down => '\u{2193}',
        };
        write!(f, "{kind}{dagger}_{{{spin},{}}}", self.orbital())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_shared_by_adjoint_pair() {
        let c = Operator::creation(Statistics::Fermion, Spin::Up, 3);
        let a = c.adjoint();
        assert_eq!(c.identifier(), a.identifier());
        assert_ne!(c, a);
        assert_eq!(a.adjoint(), c);
    }

    #[test]
    fn adjoint_is_involutive() {
        let op = Operator::annihilation(Statistics::Boson, Spin::Down, 7);
        assert_eq!(op.adjoint().adjoint(), op);
    }

    #[test]
    fn adjoint_flips_only_type() {
        let op = Operator::creation(Statistics::Boson, Spin::Down, 5);
        let adj = op.adjoint();
        assert_eq!(adj.statistics(), op.statistics());
        assert_eq!(adj.spin(), op.spin());
        assert_eq!(adj.orbital(), op.orbital());
        assert_ne!(adj.op_type(), op.op_type());
    }

    #[test]
    fn creation_precedes_annihilation_regardless_of_identifier() {
        let c = Operator::creation(Statistics::Fermion, Spin::Down, 31);
        let a = Operator::annihilation(Statistics::Fermion, Spin::Up, 0);
        assert!(c < a);
    }

    #[test]
    fn same_type_orders_by_identifier_ascending() {
        let low = Operator::creation(Statistics::Fermion, Spin::Up, 0);
        let high = Operator::creation(Statistics::Fermion, Spin::Up, 1);
        assert!(low < high);
        assert_eq!(low.identifier(), low.identifier().min(high.identifier()));
    }

    #[test]
    #[should_panic]
    fn orbital_out_of_range_panics() {
        Operator::creation(Statistics::Fermion, Spin::Up, MAX_ORBITAL);
    }

    #[test]
    fn round_trips_through_serde_json() {
        let op = Operator::creation(Statistics::Fermion, Spin::Down, 12);
        let json = serde_json::to_string(&op).unwrap();
        let back: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(op, back);
    }
}
