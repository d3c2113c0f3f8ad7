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

//! The 256-entry lookup-table kernel.

use super::bitwise;

/// Builds the 256-entry bytewise table for a given internalized polynomial.
///
/// `table[byte]` is the result of folding `byte` into an all-zero accumulator
/// with the reference bitwise kernel; every other kernel's table is derived
/// from this one.
pub(crate) fn build_table(poly_internal: u64, refin: bool) -> [u64; 256] {
    let mut table = [0u64; 256];
    for (byte, slot) in table.iter_mut().enumerate() {
        *slot = bitwise::update_word(0, poly_internal, refin, byte as u64, 8);
    }
    table
}

/// Folds a byte stream into `accum` using the 256-entry table.
pub(crate) fn update_bytes(table: &[u64; 256], accum: u64, refin: bool, data: &[u8]) -> u64 {
    let mut accum = accum;
    if refin {
        for &byte in data {
            let index = ((accum ^ byte as u64) & 0xFF) as usize;
            accum = (accum >> 8) ^ table[index];
        }
    } else {
        for &byte in data {
            let index = (((accum >> 56) ^ (byte as u64)) & 0xFF) as usize;
            accum = (accum << 8) ^ table[index];
        }
    }
    accum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::bit_reverse;

    #[test]
    fn matches_bitwise_kernel_over_random_input() {
        let poly = 0x04C11DB7u64;
        let poly_internal = bit_reverse(poly, 32);
        let init = bit_reverse(0xFFFF_FFFFu64, 32);
        let data: Vec<u8> = (0u8..=255).collect();

        let table = build_table(poly_internal, true);
        let via_table = update_bytes(&table, init, true, &data);
        let via_bits = bitwise::update_bytes(init, poly_internal, true, &data);

        assert_eq!(via_table, via_bits);
    }

    #[test]
    fn matches_bitwise_kernel_non_reflected() {
        // crc-16-xmodem: width 16, poly 0x1021, init 0, non-reflected.
        let poly = 0x1021u64 << 48;
        let init = 0u64;
        let data = b"123456789";

        let table = build_table(poly, false);
        let via_table = update_bytes(&table, init, false, data);
        let via_bits = bitwise::update_bytes(init, poly, false, data);

        assert_eq!(via_table, via_bits);
    }
}
