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

//! The slicing-by-8 kernel: consumes 8 bytes per iteration via 8 tables.
//!
//! Classic slicing-by-8 implementations read each 8-byte chunk through a raw
//! pointer with an alignment prologue/epilogue; this crate forbids `unsafe`
//! entirely, so chunks are read with [`slice::chunks_exact`] and
//! [`u64::from_ne_bytes`] instead. Correctness is unaffected: both forms end
//! up XORing the same native-endian machine word into the accumulator.

use super::bytewise;
use crate::bits::byte_reverse;

const HOST_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

/// Builds the 8x256 slicing table from the already-built bytewise table.
///
/// Column 0 holds the bytewise table itself (byte-reversed if the host
/// endianness and `refin` disagree); each subsequent column is derived by
/// running the previous column's value through one more zero byte of the
/// bytewise recurrence.
pub(crate) fn build_table(bytewise_table: &[u64; 256], refin: bool) -> [[u64; 256]; 8] {
    let byteswap = HOST_LITTLE_ENDIAN != refin;
    let mut table = [[0u64; 256]; 8];
    for byte in 0..256usize {
        let mut accum = bytewise_table[byte];
        table[0][byte] = if byteswap { byte_reverse(accum) } else { accum };
        for slice in &mut table[1..8] {
            accum = if refin {
                (accum >> 8) ^ bytewise_table[(accum & 0xFF) as usize]
            } else {
                (accum << 8) ^ bytewise_table[((accum >> 56) & 0xFF) as usize]
            };
            slice[byte] = if byteswap { byte_reverse(accum) } else { accum };
        }
    }
    table
}

#[inline]
fn combine_little(table: &[[u64; 256]; 8], accum: u64) -> u64 {
    table[7][(accum & 0xFF) as usize]
        ^ table[6][((accum >> 8) & 0xFF) as usize]
        ^ table[5][((accum >> 16) & 0xFF) as usize]
        ^ table[4][((accum >> 24) & 0xFF) as usize]
        ^ table[3][((accum >> 32) & 0xFF) as usize]
        ^ table[2][((accum >> 40) & 0xFF) as usize]
        ^ table[1][((accum >> 48) & 0xFF) as usize]
        ^ table[0][((accum >> 56) & 0xFF) as usize]
}

#[inline]
fn combine_big(table: &[[u64; 256]; 8], accum: u64) -> u64 {
    table[0][(accum & 0xFF) as usize]
        ^ table[1][((accum >> 8) & 0xFF) as usize]
        ^ table[2][((accum >> 16) & 0xFF) as usize]
        ^ table[3][((accum >> 24) & 0xFF) as usize]
        ^ table[4][((accum >> 32) & 0xFF) as usize]
        ^ table[5][((accum >> 40) & 0xFF) as usize]
        ^ table[6][((accum >> 48) & 0xFF) as usize]
        ^ table[7][((accum >> 56) & 0xFF) as usize]
}

/// Folds a byte stream into `accum`, 8 bytes at a time where possible, via the
/// slicing table, falling back to [`bytewise::update_bytes`] for the final
/// `0..=7`-byte remainder.
pub(crate) fn update_bytes(
    table: &[[u64; 256]; 8],
    bytewise_table: &[u64; 256],
    accum: u64,
    refin: bool,
    data: &[u8],
) -> u64 {
    let mut accum = accum;
    let chunks = data.chunks_exact(8);
    let remainder = chunks.remainder();

    let swap_accum = HOST_LITTLE_ENDIAN != refin;
    if chunks.len() > 0 {
        if swap_accum {
            accum = byte_reverse(accum);
        }
        for chunk in chunks {
            let word = u64::from_ne_bytes(chunk.try_into().expect("chunk is exactly 8 bytes"));
            accum ^= word;
            accum = if HOST_LITTLE_ENDIAN {
                combine_little(table, accum)
            } else {
                combine_big(table, accum)
            };
        }
        if swap_accum {
            accum = byte_reverse(accum);
        }
    }

    if !remainder.is_empty() {
        accum = bytewise::update_bytes(bytewise_table, accum, refin, remainder);
    }
    accum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::bit_reverse;
    use crate::kernel::bitwise;

    #[test]
    fn matches_bitwise_kernel_over_long_input() {
        let poly = 0x04C11DB7u64;
        let poly_internal = bit_reverse(poly, 32);
        let init = bit_reverse(0xFFFF_FFFFu64, 32);
        let data: Vec<u8> = (0..=2000u32).map(|i| (i % 256) as u8).collect();

        let bytewise_table = bytewise::build_table(poly_internal, true);
        let wordwise_table = build_table(&bytewise_table, true);

        let via_wordwise = update_bytes(&wordwise_table, &bytewise_table, init, true, &data);
        let via_bits = bitwise::update_bytes(init, poly_internal, true, &data);

        assert_eq!(via_wordwise, via_bits);
    }

    #[test]
    fn matches_bitwise_kernel_non_reflected_with_remainder() {
        let poly = 0x1021u64 << 48;
        let init = 0u64;
        // 19 bytes: two full 8-byte chunks plus a 3-byte remainder.
        let data: Vec<u8> = (0..19u8).collect();

        let bytewise_table = bytewise::build_table(poly, false);
        let wordwise_table = build_table(&bytewise_table, false);

        let via_wordwise = update_bytes(&wordwise_table, &bytewise_table, init, false, &data);
        let via_bits = bitwise::update_bytes(init, poly, false, &data);

        assert_eq!(via_wordwise, via_bits);
    }
}
