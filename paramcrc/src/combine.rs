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

//! Combining two already-finalized CRC digests computed over adjacent
//! chunks of a message into the digest of the concatenation, without
//! re-reading either chunk's bytes.
//!
//! The per-byte CRC transition is GF(2)-linear once `init` is factored out,
//! so `crc(A)` advanced through `len(B)` "virtual" zero bytes reproduces the
//! contribution `A` would have made to `crc(A ‖ B)`; XORing in `crc(B)`'s
//! own (un-finalized) register recovers the rest.

use crate::bits::bit_reverse;
use crate::config::Configuration;
use crate::digest;
use crate::zero::feed_zero_bytes;

fn internalize(value: u64, width: u8, refin: bool) -> u64 {
    if refin {
        bit_reverse(value, width)
    } else {
        value << (64 - width as u32)
    }
}

/// Un-applies `xorout` and the optional output reflection, recovering the
/// internal register value a digest was finalized from.
fn undo_finalize(digest: u64, width: u8, refout: bool, xorout: u64) -> u64 {
    let mut value = digest ^ xorout;
    if refout {
        value = bit_reverse(value, width);
    }
    value
}

/// Computes `crc(A ‖ B)` from `crc(A)`, `crc(B)` and `len(B)`, given that both
/// were computed under `config`.
pub(crate) fn combine(config: &Configuration, digest_a: u64, digest_b: u64, len_b: u64) -> u64 {
    let width = config.width();
    let refin = config.refin();
    let refout = config.refout();
    let xorout = config.xorout();
    let poly_internal = internalize(config.poly(), width, refin);
    let init_internal = internalize(config.init(), width, refin);

    let register_a = undo_finalize(digest_a, width, refout, xorout);
    let register_b = undo_finalize(digest_b, width, refout, xorout);

    let mut accum_a = internalize(register_a, width, refin) ^ init_internal;
    accum_a = feed_zero_bytes(accum_a, poly_internal, refin, len_b);
    let accum_b = internalize(register_b, width, refin);

    let combined = accum_a ^ accum_b;
    digest::finalize(combined, width, refin, refout, xorout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    fn crc32_config() -> Configuration {
        Configuration::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap()
    }

    #[test]
    fn combine_matches_processing_the_concatenation() {
        let config = crc32_config();

        let mut a = Engine::new(config);
        a.update(b"abc");
        let mut b = Engine::new(config);
        b.update(b"def");
        let mut whole = Engine::new(config);
        whole.update(b"abcdef");

        let combined = combine(&config, a.digest(), b.digest(), 3);
        assert_eq!(combined, whole.digest());
        assert_eq!(combined, 0x4B8E_39EF);
    }

    #[test]
    fn combine_with_empty_second_chunk_is_identity() {
        let config = Configuration::new(16, 0x1021, 0, false, false, 0).unwrap();
        let mut a = Engine::new(config);
        a.update(b"nonempty");
        let empty = Engine::new(config);

        let combined = combine(&config, a.digest(), empty.digest(), 0);
        assert_eq!(combined, a.digest());
    }
}
