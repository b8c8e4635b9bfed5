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

//! A formal sum of [`Term`]s with unique operator sequences.
//!
//! An `Expression` is a mapping from operator sequence to coefficient.
//! Inserting `(ops, c)` adds `c` into the existing entry for `ops`; no
//! simplification using (anti)commutation relations is performed here,
//! only the monomial distributive law. [`crate::normal_order`] is the
//! component that rewrites an `Expression` into canonical form.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use indexmap::IndexMap;
use num_complex::Complex64;

use crate::operator::Operator;
use crate::term::{OperatorWord, Term};

/// A sum of terms, keyed by operator sequence.
///
/// Backed by an [`IndexMap`] so iteration order matches insertion order —
/// matrix assembly and the property tests in `tests/` depend on this for
/// reproducibility, not for correctness of the algebra itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression {
    terms: IndexMap<OperatorWord, Complex64>,
}

impl Expression {
    /// An empty expression (the additive identity).
    pub fn new() -> Self {
        Expression {
            terms: IndexMap::new(),
        }
    }

    /// Number of distinct operator sequences currently stored.
    ///
    /// Entries with an exact-zero coefficient are not removed
    /// automatically; call [`Expression::prune`] to drop them.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the expression has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Accumulates a term into the expression, adding its coefficient into
    /// any existing entry for the same operator sequence.
    pub fn insert(&mut self, term: Term) {
        *self.terms.entry(term.operators).or_insert(Complex64::new(0.0, 0.0)) +=
            term.coefficient;
    }

    /// Iterates over `(operator sequence, coefficient)` pairs in insertion
    /// order.
    pub fn terms(&self) -> impl Iterator<Item = (&OperatorWord, &Complex64)> {
        self.terms.iter()
    }

    /// The coefficient stored for a given operator sequence, or zero if
    /// absent.
    pub fn get(&self, operators: &[Operator]) -> Complex64 {
        self.terms
            .get(operators)
            .copied()
            .unwrap_or(Complex64::new(0.0, 0.0))
    }

    /// The hermitian conjugate of the whole expression.
    pub fn adjoint(&self) -> Expression {
        let mut result = Expression::new();
        for (ops, &c) in &self.terms {
            result.insert(Term::new(c, ops.iter().copied()).adjoint());
        }
        result
    }

    /// Removes every entry with `|coefficient| < epsilon`.
    pub fn prune(&self, epsilon: f64) -> Expression {
        Expression {
            terms: self
                .terms
                .iter()
                .filter(|(_, c)| c.norm() >= epsilon)
                .map(|(ops, c)| (ops.clone(), *c))
                .collect(),
        }
    }

    /// Distributive-law product of two expressions: `O(|A| * |B|)` term
    /// pairs, each insertion amortized `O(1)`.
    pub fn mul_expression(&self, other: &Expression) -> Expression {
        let mut result = Expression::new();
        for (ops_a, &ca) in &self.terms {
            for (ops_b, &cb) in &other.terms {
                let term_a = Term::new(ca, ops_a.iter().copied());
                let term_b = Term::new(cb, ops_b.iter().copied());
                result.insert(term_a.product(&term_b));
            }
        }
        result
    }

    /// Right-multiplies every term by a fixed operator sequence.
    pub fn mul_operators(&self, operators: &[Operator]) -> Expression {
        let mut result = Expression::new();
        for (ops, &c) in &self.terms {
            result.insert(Term::new(c, ops.iter().copied()).product_operators(operators));
        }
        result
    }

    /// Scales every coefficient by `scalar`.
    pub fn mul_scalar(&self, scalar: Complex64) -> Expression {
        Expression {
            terms: self.terms.iter().map(|(ops, c)| (ops.clone(), c * scalar)).collect(),
        }
    }
}

impl FromIterator<Term> for Expression {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut expr = Expression::new();
        for term in iter {
            expr.insert(term);
        }
        expr
    }
}

impl Add for Expression {
    type Output = Expression;
    fn add(self, rhs: Expression) -> Expression {
        let mut result = self;
        for (ops, c) in rhs.terms {
            result.insert(Term::new(c, ops));
        }
        result
    }
}

impl Add<&Expression> for &Expression {
    type Output = Expression;
    fn add(self, rhs: &Expression) -> Expression {
        let mut result = self.clone();
        for (ops, &c) in &rhs.terms {
            result.insert(Term::new(c, ops.iter().copied()));
        }
        result
    }
}

impl Sub for Expression {
    type Output = Expression;
    fn sub(self, rhs: Expression) -> Expression {
        self + rhs.mul_scalar(Complex64::new(-1.0, 0.0))
    }
}

impl Sub<&Expression> for &Expression {
    type Output = Expression;
    fn sub(self, rhs: &Expression) -> Expression {
        self + &rhs.mul_scalar(Complex64::new(-1.0, 0.0))
    }
}

impl Mul<&Expression> for &Expression {
    type Output = Expression;
    fn mul(self, rhs: &Expression) -> Expression {
        self.mul_expression(rhs)
    }
}

impl Mul<Complex64> for &Expression {
    type Output = Expression;
    fn mul(self, rhs: Complex64) -> Expression {
        self.mul_scalar(rhs)
    }
}

impl Mul<&Expression> for Complex64 {
    type Output = Expression;
    fn mul(self, rhs: &Expression) -> Expression {
        rhs.mul_scalar(self)
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        let mut expr = Expression::new();
        expr.insert(term);
        expr
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use itertools::Itertools;
        for (ops, c) in self.terms.iter().sorted_by_key(|(ops, _)| (*ops).clone()) {
            write!(f, "{c}  {{")?;
            for op in ops {
                write!(f, "{op}, ")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
