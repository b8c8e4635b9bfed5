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

//! Exact diagonalization of second-quantized lattice Hamiltonians.
//!
//! This crate provides the symbolic operator algebra and matrix-assembly
//! pipeline needed to turn a Hamiltonian written as a polynomial in
//! creation/annihilation operators into a sparse matrix over a
//! particle-conserving many-body basis. It does not provide an
//! eigensolver: callers feed the assembled matrix to whatever sparse
//! linear-algebra crate suits them.
//!
//! The pipeline, leaves first:
//!
//! - [`Operator`] — a packed ladder operator.
//! - [`Term`] and [`Expression`] — the operator algebra.
//! - [`algebra`] — factories for common operator combinations.
//! - [`normal_order`] — rewrites arbitrary operator strings into canonical
//!   normal-ordered form.
//! - [`basis`] — enumerates the many-body Fock space.
//! - [`model`] and [`sparse`] — drive parallel matrix assembly.
//! - [`models`] — concrete lattice Hamiltonians built on top of the above.

pub mod algebra;
pub mod basis;
pub mod expression;
pub mod model;
pub mod models;
pub mod normal_order;
pub mod operator;
pub mod sparse;
pub mod term;

pub use expression::Expression;
pub use operator::{Operator, OperatorType, Spin, Statistics, MAX_ORBITAL};
pub use term::Term;

/// Re-exports of the most commonly used types and traits.
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::basis::{
        AcceptAll, Basis, BasisElement, BasisFilter, FermionicBasis, GenericBasis, SpinSectorFilter,
    };
    pub use crate::expression::Expression;
    pub use crate::model::{compute_matrix_elements, Model};
    pub use crate::normal_order::{anticommute, commute, normal_order};
    pub use crate::operator::{Operator, OperatorType, Spin, Statistics};
    pub use crate::sparse::{CooMatrix, SparseAccumulate};
    pub use crate::term::Term;
}
