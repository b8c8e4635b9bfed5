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

//! A single monomial in the operator algebra: a complex coefficient times
//! an ordered sequence of [`Operator`]s. No simplification using
//! (anti)commutation relations happens here — that is
//! [`crate::normal_order`]'s job.

use std::fmt;

use num_complex::Complex64;
use tinyvec::TinyVec;

use crate::operator::Operator;

/// The operator sequence a [`Term`] (or [`crate::Expression`] entry) is
/// keyed on.
///
/// Most Hamiltonians of interest are one- or two-body (2 or 4 operators per
/// term), so a `TinyVec` with inline capacity 4 avoids a heap allocation
/// for the common case while still supporting arbitrary-length words.
pub type OperatorWord = TinyVec<[Operator; 4]>;

/// A coefficient times an ordered sequence of ladder operators.
///
/// A `Term` is a value type: construction produces a literal monomial, and
/// every method here returns a new `Term` rather than mutating in place.
/// The empty operator sequence represents a scalar term.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    /// The scalar multiplying `operators`.
    pub coefficient: Complex64,
    /// The ordered operator sequence.
    pub operators: OperatorWord,
}

impl Term {
    /// Builds a term from a coefficient and an operator sequence.
    pub fn new(coefficient: Complex64, operators: impl IntoIterator<Item = Operator>) -> Self {
        Term {
            coefficient,
            operators: operators.into_iter().collect(),
        }
    }

    /// The scalar term `coefficient * 1` (empty operator sequence).
    pub fn scalar(coefficient: Complex64) -> Self {
        Term {
            coefficient,
            operators: OperatorWord::new(),
        }
    }

    /// Concatenates two terms: coefficients multiply, operator sequences
    /// concatenate left-then-right.
    pub fn product(&self, other: &Term) -> Term {
        let mut operators = self.operators.clone();
        operators.extend(other.operators.iter().copied());
        Term {
            coefficient: self.coefficient * other.coefficient,
            operators,
        }
    }

    /// Appends a bare operator sequence, leaving the coefficient unchanged.
    pub fn product_operators(&self, operators: &[Operator]) -> Term {
        let mut seq = self.operators.clone();
        seq.extend(operators.iter().copied());
        Term {
            coefficient: self.coefficient,
            operators: seq,
        }
    }

    /// Scales the coefficient by a scalar.
    pub fn product_scalar(&self, scalar: Complex64) -> Term {
        Term {
            coefficient: self.coefficient * scalar,
            operators: self.operators.clone(),
        }
    }

    /// The hermitian conjugate: reverse the sequence, adjoint each operator,
    /// conjugate the coefficient.
    pub fn adjoint(&self) -> Term {
        Term {
            coefficient: self.coefficient.conj(),
            operators: self.operators.iter().rev().map(Operator::adjoint).collect(),
        }
    }

    /// Negates the coefficient.
    pub fn negate(&self) -> Term {
        Term {
            coefficient: -self.coefficient,
            operators: self.operators.clone(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coefficient)?;
        for op in &self.operators {
            write!(f, " {op}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::{Spin, Statistics};

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn product_concatenates_operators_left_then_right() {
        let a = Term::new(
            c(2.0),
            [Operator::creation(Statistics::Fermion, Spin::Up, 0)],
        );
        let b = Term::new(
            c(3.0),
            [Operator::annihilation(Statistics::Fermion, Spin::Up, 1)],
        );
        let prod = a.product(&b);
        assert_eq!(prod.coefficient, c(6.0));
        assert_eq!(prod.operators.len(), 2);
        assert_eq!(prod.operators[0], a.operators[0]);
        assert_eq!(prod.operators[1], b.operators[0]);
    }

    #[test]
    fn adjoint_reverses_and_conjugates() {
        let t = Term::new(
            Complex64::new(1.0, 2.0),
            [
                Operator::creation(Statistics::Fermion, Spin::Up, 0),
                Operator::annihilation(Statistics::Fermion, Spin::Down, 1),
            ],
        );
        let adj = t.adjoint();
        assert_eq!(adj.coefficient, Complex64::new(1.0, -2.0));
        assert_eq!(adj.operators[0], t.operators[1].adjoint());
        assert_eq!(adj.operators[1], t.operators[0].adjoint());
    }

    #[test]
    fn adjoint_is_involutive() {
        let t = Term::new(
            Complex64::new(1.0, -1.0),
            [
                Operator::creation(Statistics::Boson, Spin::Up, 2),
                Operator::annihilation(Statistics::Boson, Spin::Up, 3),
            ],
        );
        assert_eq!(t.adjoint().adjoint(), t);
    }

    #[test]
    fn negate_flips_coefficient_only() {
        let t = Term::scalar(c(5.0));
        let n = t.negate();
        assert_eq!(n.coefficient, c(-5.0));
        assert_eq!(n.operators, t.operators);
    }

    #[test]
    fn scalar_term_has_empty_operators() {
        let t = Term::scalar(c(1.0));
        assert!(t.operators.is_empty());
    }
}
