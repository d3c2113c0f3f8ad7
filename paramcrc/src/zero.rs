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

//! Zero-extension: advancing an accumulator as though `n` zero bits (or
//! bytes) had been fed through [`crate::Engine::update`], without allocating
//! a buffer of that size.
//!
//! A constant zero-filled chunk is reused across as many whole chunks as `n`
//! requires, with a short tail for the remainder. This keeps the cost
//! `O(n)` in the number of bytes skipped — a matrix-exponentiation scheme
//! could do better asymptotically, but `combine`, the only internal caller,
//! is typically used to stitch together chunks already bounded by a fixed
//! buffer size, so the simpler implementation is preferred here.

use super::kernel::bitwise;

const ZERO_CHUNK: [u8; 256] = [0u8; 256];

/// Advances `accum` as though `bytes` zero-valued bytes had been fed in.
pub(crate) fn feed_zero_bytes(accum: u64, poly_internal: u64, refin: bool, bytes: u64) -> u64 {
    let mut accum = accum;
    let mut remaining = bytes;
    while remaining >= ZERO_CHUNK.len() as u64 {
        accum = bitwise::update_bytes(accum, poly_internal, refin, &ZERO_CHUNK);
        remaining -= ZERO_CHUNK.len() as u64;
    }
    if remaining > 0 {
        accum = bitwise::update_bytes(accum, poly_internal, refin, &ZERO_CHUNK[..remaining as usize]);
    }
    accum
}

/// Advances `accum` as though `bits` zero-valued bits had been fed in.
pub(crate) fn feed_zero_bits(accum: u64, poly_internal: u64, refin: bool, bits: u64) -> u64 {
    let whole_bytes = bits / 8;
    let trailing_bits = (bits % 8) as u8;
    let accum = feed_zero_bytes(accum, poly_internal, refin, whole_bytes);
    bitwise::update_word(accum, poly_internal, refin, 0, trailing_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::bit_reverse;
    use crate::kernel::bitwise;

    #[test]
    fn feeding_zero_bytes_matches_running_the_kernel_over_zeros() {
        let poly = 0x04C11DB7u64;
        let poly_internal = bit_reverse(poly, 32);
        let init = bit_reverse(0xFFFF_FFFFu64, 32);

        let zeros = vec![0u8; 613];
        let via_kernel = bitwise::update_bytes(init, poly_internal, true, &zeros);
        let via_chunks = feed_zero_bytes(init, poly_internal, true, 613);

        assert_eq!(via_kernel, via_chunks);
    }

    #[test]
    fn feeding_zero_bits_matches_feeding_whole_bytes() {
        let poly = 0x1021u64 << 48;
        let init = 0xFFFFu64 << 48;

        let via_bits = feed_zero_bits(init, poly, false, 40);
        let via_bytes = feed_zero_bytes(init, poly, false, 5);

        assert_eq!(via_bits, via_bytes);
    }

    #[test]
    fn feeding_zero_bits_is_additive() {
        let poly = 0x04C11DB7u64;
        let poly_internal = bit_reverse(poly, 32);
        let init = bit_reverse(0x1234_5678u64, 32);

        let direct = feed_zero_bits(init, poly_internal, true, 53);
        let split = feed_zero_bits(feed_zero_bits(init, poly_internal, true, 20), poly_internal, true, 33);

        assert_eq!(direct, split);
    }
}
