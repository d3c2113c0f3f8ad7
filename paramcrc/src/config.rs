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

//! Validated, immutable CRC parameter sets.

use crate::bits::bitmask;
use crate::error::CrcError;

/// A validated set of Rocksoft-model CRC parameters.
///
/// Field definitions follow Ross Williams's 1993 paper "A Painless Guide to
/// CRC Error Detection Algorithms", with `refout` interpreted the way the
/// reveng CRC catalogue interprets it: true means the register is reflected
/// before `xorout` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
}

impl Configuration {
    /// Validates and constructs a new configuration.
    pub fn new(
        width: u8,
        poly: u64,
        init: u64,
        refin: bool,
        refout: bool,
        xorout: u64,
    ) -> Result<Self, CrcError> {
        if width == 0 || width > 64 {
            return Err(CrcError::WidthOutOfRange { width });
        }
        let mask = bitmask(width);
        if poly == 0 || poly > mask {
            return Err(CrcError::PolyOutOfRange { width, poly });
        }
        if init > mask {
            return Err(CrcError::InitOutOfRange { width, init });
        }
        if xorout > mask {
            return Err(CrcError::XoroutOutOfRange { width, xorout });
        }
        Ok(Self {
            width,
            poly,
            init,
            refin,
            refout,
            xorout,
        })
    }

    /// The bit width of the algorithm, in `1..=64`.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// The generator polynomial, in normal (non-reflected) form, top bit omitted.
    pub const fn poly(&self) -> u64 {
        self.poly
    }

    /// The initial register value, in external (user-visible) form.
    pub const fn init(&self) -> u64 {
        self.init
    }

    /// Whether input bytes are reflected before being mixed into the register.
    pub const fn refin(&self) -> bool {
        self.refin
    }

    /// Whether the final register value is reflected before `xorout` is applied.
    pub const fn refout(&self) -> bool {
        self.refout
    }

    /// The mask XORed into the final register value after the optional reflection.
    pub const fn xorout(&self) -> u64 {
        self.xorout
    }

    /// The `width`-bit all-ones mask for this configuration.
    pub(crate) const fn mask(&self) -> u64 {
        bitmask(self.width)
    }
}
