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

//! The stateful, incremental CRC engine.
//!
//! [`Engine`] is the only type most callers touch directly. It owns a running
//! accumulator plus a handle to the shared lookup tables for its
//! `(poly, refin)` pair (see [`crate::tables`]), and dispatches `update` to
//! whichever [`Method`] it was built with.

use crate::bits::bit_reverse;
use crate::catalog;
use crate::combine;
use crate::config::Configuration;
use crate::digest;
use crate::error::CrcError;
use crate::kernel::{bitwise, bytewise, wordwise, Method};
use crate::tables::{self, TableSet};
use crate::zero;

fn internalize(value: u64, width: u8, refin: bool) -> u64 {
    if refin {
        bit_reverse(value, width)
    } else {
        value << (64 - width as u32)
    }
}

/// An incremental CRC computation for a fixed [`Configuration`].
///
/// Cloning an `Engine` clones its running accumulator but shares its lookup
/// tables (they're behind an `Arc`), so forking a computation to explore two
/// continuations is cheap. The last computed digest is cached and reused
/// until the next `update`, so repeated `digest()` calls (or `digest_bytes`
/// and `hex_digest` built on top of it) don't repeat the finalization work.
#[derive(Clone)]
pub struct Engine {
    config: Configuration,
    method: Method,
    poly_internal: u64,
    init_internal: u64,
    accum: u64,
    tables: TableSet,
    dirty: bool,
    cached_digest: u64,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Builds a new engine for `config`, using the default [`Method`].
    pub fn new(config: Configuration) -> Self {
        Self::with_method(config, Method::default())
    }

    /// Builds a new engine for `config`, dispatching `update` to `method`.
    pub fn with_method(config: Configuration, method: Method) -> Self {
        let poly_internal = internalize(config.poly(), config.width(), config.refin());
        let init_internal = internalize(config.init(), config.width(), config.refin());
        let tables = tables::get_or_build(poly_internal, config.refin());
        Engine {
            config,
            method,
            poly_internal,
            init_internal,
            accum: init_internal,
            tables,
            dirty: true,
            cached_digest: 0,
        }
    }

    /// Looks up a named algorithm in the built-in catalogue and builds an
    /// engine for it, using the default [`Method`]. Names are matched
    /// exactly as listed by [`crate::catalog_names`].
    pub fn from_template(name: &str) -> Result<Self, CrcError> {
        let config = catalog::lookup(name)?;
        Ok(Self::new(config))
    }

    /// The configuration this engine was built from.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The update kernel this engine dispatches to.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Feeds `data` into the running accumulator.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.accum = match self.method {
            Method::Bitwise => bitwise::update_bytes(self.accum, self.poly_internal, self.config.refin(), data),
            Method::Bytewise => bytewise::update_bytes(&self.tables.bytewise, self.accum, self.config.refin(), data),
            Method::Wordwise => wordwise::update_bytes(
                &self.tables.wordwise,
                &self.tables.bytewise,
                self.accum,
                self.config.refin(),
                data,
            ),
        };
        self.dirty = true;
    }

    /// Feeds a single `bit_width`-bit word (`0..=64`) into the running
    /// accumulator via the reference bitwise kernel, for callers working
    /// below byte granularity. `bit_width == 0` is a no-op.
    pub fn update_word(&mut self, word: u64, bit_width: u8) {
        if bit_width == 0 {
            return;
        }
        self.accum = bitwise::update_word(self.accum, self.poly_internal, self.config.refin(), word, bit_width);
        self.dirty = true;
    }

    /// Resets the accumulator back to `init`, as if no `update` had been called.
    pub fn clear(&mut self) {
        self.accum = self.init_internal;
        self.dirty = true;
    }

    /// Computes the external CRC value of everything fed so far, without
    /// resetting the accumulator. Cheap to call repeatedly: the result is
    /// cached until the next `update`/`update_word`.
    pub fn digest(&mut self) -> u64 {
        if self.dirty {
            self.cached_digest = digest::finalize(
                self.accum,
                self.config.width(),
                self.config.refin(),
                self.config.refout(),
                self.config.xorout(),
            );
            self.dirty = false;
        }
        self.cached_digest
    }

    /// The digest, encoded as big-endian bytes, `ceil(width / 8)` bytes long.
    pub fn digest_bytes(&mut self) -> Vec<u8> {
        let width = self.config.width();
        let byte_len = width.div_ceil(8) as usize;
        let value = self.digest();
        value.to_be_bytes()[8 - byte_len..].to_vec()
    }

    /// The digest, encoded as lowercase hex, `ceil(width / 4)` nibbles long
    /// rounded up to an even number of characters.
    pub fn hex_digest(&mut self) -> String {
        let bytes = self.digest_bytes();
        bytes.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    /// Advances the accumulator as though `n` zero-valued bytes had been fed
    /// through [`Engine::update`], without allocating or touching real data.
    pub fn feed_zero_bytes(&mut self, n: u64) {
        self.accum = zero::feed_zero_bytes(self.accum, self.poly_internal, self.config.refin(), n);
        self.dirty = true;
    }

    /// Advances the accumulator as though `n` zero-valued bits had been fed
    /// through the bit-oriented bitwise kernel.
    pub fn feed_zero_bits(&mut self, n: u64) {
        self.accum = zero::feed_zero_bits(self.accum, self.poly_internal, self.config.refin(), n);
        self.dirty = true;
    }

    /// Computes `crc(A ‖ B)` from `digest_a = crc(A)`, `digest_b = crc(B)`
    /// and `len_b = len(B)`, where both were computed under this engine's
    /// configuration. Does not touch this engine's running state.
    pub fn combine(&self, digest_a: u64, digest_b: u64, len_b: u64) -> Result<u64, CrcError> {
        let mask = self.config.mask();
        if digest_a > mask {
            return Err(CrcError::ValueOutOfRange {
                width: self.config.width(),
                value: digest_a,
            });
        }
        if digest_b > mask {
            return Err(CrcError::ValueOutOfRange {
                width: self.config.width(),
                value: digest_b,
            });
        }
        Ok(combine::combine(&self.config, digest_a, digest_b, len_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crc32_config() -> Configuration {
        Configuration::new(32, 0x04C11DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap()
    }

    #[test]
    fn all_three_methods_agree_on_crc32_check_value() {
        for method in [Method::Bitwise, Method::Bytewise, Method::Wordwise] {
            let mut engine = Engine::with_method(crc32_config(), method);
            engine.update(b"123456789");
            assert_eq!(engine.digest(), 0xCBF4_3926, "method {method:?} disagreed");
        }
    }

    #[test]
    fn chunk_boundaries_do_not_affect_the_result() {
        let mut whole = Engine::new(crc32_config());
        whole.update(b"123456789");

        let mut chunked = Engine::new(crc32_config());
        chunked.update(b"123");
        chunked.update(b"456");
        chunked.update(b"789");

        assert_eq!(whole.digest(), chunked.digest());
    }

    #[test]
    fn clear_resets_to_the_initial_state() {
        let mut engine = Engine::new(crc32_config());
        engine.update(b"999999999");
        engine.clear();
        engine.update(b"123456789");

        let mut fresh = Engine::new(crc32_config());
        fresh.update(b"123456789");

        assert_eq!(engine.digest(), fresh.digest());
    }

    #[test]
    fn digest_does_not_consume_state() {
        let mut engine = Engine::new(crc32_config());
        engine.update(b"123456789");
        let first = engine.digest();
        let second = engine.digest();
        assert_eq!(first, second);
    }

    #[test]
    fn fresh_engine_digest_is_correct_without_any_update() {
        let mut engine = Engine::new(crc32_config());
        assert_eq!(engine.digest(), 0x0000_0000);
    }

    #[test]
    fn cloning_forks_an_independent_continuation() {
        let mut base = Engine::new(crc32_config());
        base.update(b"123");

        let mut forked = base.clone();
        base.update(b"456");
        forked.update(b"789");

        assert_ne!(base.digest(), forked.digest());
    }

    #[test]
    fn cloned_engines_share_the_same_table_allocation() {
        let base = Engine::new(crc32_config());
        let forked = base.clone();
        assert!(std::sync::Arc::ptr_eq(&base.tables.bytewise, &forked.tables.bytewise));
    }

    #[test]
    fn zero_bit_and_zero_byte_extension_agree() {
        let mut a = Engine::new(crc32_config());
        a.update(b"hello");
        a.feed_zero_bytes(3);

        let mut b = Engine::new(crc32_config());
        b.update(b"hello");
        b.feed_zero_bits(24);

        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn combine_matches_processing_the_concatenation() {
        let mut a = Engine::new(crc32_config());
        a.update(b"The quick brown fox ");

        let mut b = Engine::new(crc32_config());
        b.update(b"jumps over the lazy dog");

        let mut whole = Engine::new(crc32_config());
        whole.update(b"The quick brown fox jumps over the lazy dog");

        let digest_a = a.digest();
        let digest_b = b.digest();
        let combined = a.combine(digest_a, digest_b, 23).unwrap();
        assert_eq!(combined, whole.digest());
    }

    #[test]
    fn digest_bytes_and_hex_digest_have_the_expected_length() {
        let mut engine = Engine::new(crc32_config());
        engine.update(b"123456789");
        assert_eq!(engine.digest_bytes(), vec![0xCB, 0xF4, 0x39, 0x26]);
        assert_eq!(engine.hex_digest(), "cbf43926");
    }

    #[test]
    fn update_word_matches_byte_granular_update_for_full_bytes() {
        let mut via_update = Engine::new(crc32_config());
        via_update.update(b"\x42");

        let mut via_word = Engine::new(crc32_config());
        via_word.update_word(0x42, 8);

        assert_eq!(via_update.digest(), via_word.digest());
    }
}
