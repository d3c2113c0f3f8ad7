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

//! Error types surfaced by configuration validation and the public facade.

use thiserror::Error;

/// Errors raised by [`crate::Configuration`] validation and by [`crate::Engine`]
/// operations that accept user-supplied values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrcError {
    /// `width` was zero or exceeded [`crate::MAX_WIDTH`].
    #[error("width out of range: {width} (must be 1..=64)")]
    WidthOutOfRange {
        /// The offending width.
        width: u8,
    },

    /// `poly` was zero or exceeded the `width`-bit mask.
    #[error("polynomial out of range for width {width}: {poly:#x}")]
    PolyOutOfRange {
        /// The bit width the polynomial was checked against.
        width: u8,
        /// The offending polynomial.
        poly: u64,
    },

    /// `init` exceeded the `width`-bit mask.
    #[error("init value out of range for width {width}: {init:#x}")]
    InitOutOfRange {
        /// The bit width the value was checked against.
        width: u8,
        /// The offending value.
        init: u64,
    },

    /// `xorout` exceeded the `width`-bit mask.
    #[error("xorout value out of range for width {width}: {xorout:#x}")]
    XoroutOutOfRange {
        /// The bit width the value was checked against.
        width: u8,
        /// The offending value.
        xorout: u64,
    },

    /// The requested template name is not present in the catalogue.
    #[error("unknown CRC template: {name:?}")]
    UnknownTemplate {
        /// The name that failed lookup.
        name: String,
    },

    /// A value passed to [`crate::Engine::combine`] exceeded the `width`-bit mask.
    #[error("combine operand out of range for width {width}: {value:#x}")]
    ValueOutOfRange {
        /// The bit width the value was checked against.
        width: u8,
        /// The offending value.
        value: u64,
    },
}
