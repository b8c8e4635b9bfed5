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

//! Rewrites arbitrary operator words into canonical normal-ordered form.
//!
//! Canonical normal form: within a word, every creation operator precedes
//! every annihilation operator; creations are sorted by ascending
//! [`Operator::identifier`], annihilations by descending. The rewrite is
//! driven by an insertion sort over the word: each adjacent transposition
//! either just reorders (with a possible fermionic sign) or, when an
//! annihilation operator meets the creation operator of the same mode,
//! also spins off a shorter *contraction* word. Both the reordering and
//! the contraction are pushed onto a LIFO worklist that is function-local
//! to [`normal_order`] — no state survives a call, so the orderer is
//! trivially safe to invoke concurrently from multiple threads.

use num_complex::Complex64;

use crate::expression::Expression;
use crate::operator::{Operator, OperatorType};
use crate::term::{OperatorWord, Term};

enum Step {
    /// The pair is already in relative normal order; stop bubbling.
    Ordered,
    /// Swap the pair; `true` if the transposition flips the sign.
    Swap(bool),
    /// Same as `Swap`, but first spin off a contraction child at the
    /// current phase (word with both operators at this position removed).
    Contract(bool),
}

fn both_fermion(a: Operator, b: Operator) -> bool {
    a.is_fermion() && b.is_fermion()
}

fn classify(op1: Operator, op2: Operator) -> Step {
    use OperatorType::{Annihilation, Creation};
    match (op1.op_type(), op2.op_type()) {
        (Creation, Creation) => {
            if op1.identifier() > op2.identifier() {
                Step::Swap(both_fermion(op1, op2))
            } else {
                Step::Ordered
            }
        }
        (Annihilation, Annihilation) => {
            if op1.identifier() < op2.identifier() {
                Step::Swap(both_fermion(op1, op2))
            } else {
                Step::Ordered
            }
        }
        (Annihilation, Creation) => {
            if op1.identifier() == op2.identifier() {
                Step::Contract(both_fermion(op1, op2))
            } else {
                Step::Swap(both_fermion(op1, op2))
            }
        }
        (Creation, Annihilation) => Step::Ordered,
    }
}

/// Sorts a single word into normal form, returning every `(word, phase)`
/// pair the contraction branches emit (the word itself included).
fn sort_word(word: OperatorWord, phase: u32) -> Vec<(OperatorWord, u32)> {
    let mut worklist: Vec<(OperatorWord, u32)> = vec![(word, phase)];
    let mut emitted = Vec::new();

    while let Some((mut word, mut phase)) = worklist.pop() {
        if word.len() < 2 {
            emitted.push((word, phase));
            continue;
        }
        let mut i = 1;
        while i < word.len() {
            let mut j = i;
            while j > 0 {
                match classify(word[j - 1], word[j]) {
                    Step::Ordered => break,
                    Step::Swap(sign_flip) => {
                        word.swap(j - 1, j);
                        if sign_flip {
                            phase += 1;
                        }
                        j -= 1;
                    }
                    Step::Contract(sign_flip) => {
                        let mut child = word.clone();
                        child.remove(j);
                        child.remove(j - 1);
                        worklist.push((child, phase));
                        word.swap(j - 1, j);
                        if sign_flip {
                            phase += 1;
                        }
                        j -= 1;
                    }
                }
            }
            i += 1;
        }
        emitted.push((word, phase));
    }
    emitted
}

/// Types that [`normal_order`] can be applied to: a bare [`Term`] or a
/// full [`Expression`].
pub trait IntoExpression {
    /// Converts `self` into the [`Expression`] `normal_order` operates on.
    fn into_expression(self) -> Expression;
}

impl IntoExpression for Expression {
    fn into_expression(self) -> Expression {
        self
    }
}

impl IntoExpression for &Expression {
    fn into_expression(self) -> Expression {
        self.clone()
    }
}

impl IntoExpression for Term {
    fn into_expression(self) -> Expression {
        self.into()
    }
}

impl IntoExpression for &Term {
    fn into_expression(self) -> Expression {
        self.clone().into()
    }
}

/// Rewrites every word of `input` into canonical normal form, expanding
/// contractions, and returns the resulting expression.
///
/// Idempotent: `normal_order(normal_order(e)) == normal_order(e)`, since a
/// word already in normal form has no contractible adjacency and sorts in
/// zero swaps.
pub fn normal_order(input: impl IntoExpression) -> Expression {
    let input = input.into_expression();
    let mut result = Expression::new();
    for (word, &coefficient) in input.terms() {
        for (ordered_word, phase) in sort_word(word.clone(), 0) {
            let sign = if phase % 2 == 1 { -1.0 } else { 1.0 };
            result.insert(Term::new(coefficient * sign, ordered_word));
        }
    }
    result
}

/// `[A, B] = normal_order(A*B - B*A)`.
pub fn commute(a: &Expression, b: &Expression) -> Expression {
    let ab = a * b;
    let ba = b * a;
    normal_order(ab - ba)
}

/// `{A, B} = normal_order(A*B + B*A)`.
pub fn anticommute(a: &Expression, b: &Expression) -> Expression {
    let ab = a * b;
    let ba = b * a;
    normal_order(ab + ba)
}
