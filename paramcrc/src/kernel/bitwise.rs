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

//! The reference, per-bit update kernel.
//!
//! Every lookup table in [`crate::kernel::bytewise`] and
//! [`crate::kernel::wordwise`] is seeded by running this kernel over a single
//! byte, so a bug here corrupts every other kernel silently. It is kept
//! deliberately simple.

/// Folds a `width`-bit word (right-aligned in `word`, high bits zero) into the
/// internalized accumulator `accum`, one bit at a time.
///
/// `width` may be anywhere in `1..=64`; `width == 0` is a no-op. This is also
/// how the bytewise and wordwise kernels derive their tables: calling this
/// with `width == 8` on every possible byte value produces the 256-entry
/// bytewise table.
pub(crate) fn update_word(accum: u64, poly_internal: u64, refin: bool, word: u64, width: u8) -> u64 {
    let mut accum = accum;
    if refin {
        accum ^= word;
        for _ in 0..width {
            accum = if accum & 1 != 0 {
                (accum >> 1) ^ poly_internal
            } else {
                accum >> 1
            };
        }
    } else {
        accum ^= word << (64 - width as u32);
        for _ in 0..width {
            accum = if accum & (1u64 << 63) != 0 {
                (accum << 1) ^ poly_internal
            } else {
                accum << 1
            };
        }
    }
    accum
}

/// Folds a byte stream into `accum`, a byte (width 8) at a time.
pub(crate) fn update_bytes(accum: u64, poly_internal: u64, refin: bool, data: &[u8]) -> u64 {
    let mut accum = accum;
    for &byte in data {
        accum = update_word(accum, poly_internal, refin, byte as u64, 8);
    }
    accum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::bit_reverse;

    #[test]
    fn crc32_check_value_via_bitwise_kernel() {
        // crc-32-iso-hdlc: reflected poly/init, internalized the way
        // `Engine` internalizes a reflected `Configuration`.
        let poly = 0x04C11DB7u64;
        let poly_internal = bit_reverse(poly, 32);

        let mut accum = bit_reverse(0xFFFF_FFFFu64, 32);
        accum = update_bytes(accum, poly_internal, true, b"123456789");
        let crc = (!accum) & 0xFFFF_FFFF;
        assert_eq!(crc, 0xCBF4_3926);
    }

    #[test]
    fn zero_width_word_is_identity() {
        assert_eq!(update_word(0x1234, 0xDEAD_BEEF, true, 0xFF, 0), 0x1234);
    }
}
