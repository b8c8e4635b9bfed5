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

//! Concrete lattice [`crate::model::Model`]s built from [`crate::algebra`]'s
//! helpers: thin `hamiltonian()` producers, not a CLI surface.

mod heisenberg_chain;
mod hubbard_chain;
mod hubbard_kagome;

pub use heisenberg_chain::HeisenbergChain;
pub use hubbard_chain::HubbardChain;
pub use hubbard_kagome::HubbardKagome;
