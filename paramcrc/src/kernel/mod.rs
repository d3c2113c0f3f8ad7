// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The three interchangeable CRC update kernels.
//!
//! All three operate on the internalized accumulator form (see
//! [`crate::engine`]) and are required to produce bit-identical results for
//! every legal configuration; [`Method`] selects which one an [`crate::Engine`]
//! dispatches `update` calls to.

pub(crate) mod bitwise;
pub(crate) mod bytewise;
pub(crate) mod wordwise;

/// Selects which CRC update algorithm an [`crate::Engine`] uses.
///
/// All three are equivalent observers of the same internalized state; they
/// only differ in throughput. [`Method::Wordwise`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Reference per-bit update. Simplest, used to derive the lookup tables.
    Bitwise,
    /// Per-byte update via a 256-entry lookup table.
    Bytewise,
    /// Slicing-by-8: consumes 8 bytes per iteration via 8 lookup tables.
    Wordwise,
}

impl Default for Method {
    fn default() -> Self {
        Method::Wordwise
    }
}
