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

//! A parametric CRC engine covering the full Rocksoft Model parameter space.
//!
//! Rather than hard-coding one algorithm per type, [`Engine`] is built from a
//! runtime [`Configuration`] — width, polynomial, initial value, input/output
//! reflection and final XOR — and implements every named algorithm in the
//! built-in [`catalog`] as well as any custom parameter set a caller supplies.
//!
//! ```
//! use paramcrc::Engine;
//!
//! let mut engine = Engine::from_template("crc-32-iso-hdlc").unwrap();
//! engine.update(b"123456789");
//! assert_eq!(engine.digest(), 0xCBF4_3926);
//! ```
#![deny(unsafe_code)]

mod bits;
mod catalog;
mod combine;
mod config;
mod digest;
mod engine;
mod error;
mod kernel;
mod tables;
mod zero;

pub use config::Configuration;
pub use engine::Engine;
pub use error::CrcError;
pub use kernel::Method;

/// Bits in a byte, spelled out for the handful of places this crate's width
/// arithmetic reads more clearly against a named constant than a bare `8`.
pub const BYTE_WIDTH: u8 = 8;

/// The largest CRC width this crate supports, in bits.
pub const MAX_WIDTH: u8 = 64;

/// The largest value an accumulator or digest can hold, for `width == 64`.
pub const MAX_VALUE: u64 = u64::MAX;

/// Returns the primary names of every algorithm in the built-in catalogue.
pub fn catalog_names() -> impl Iterator<Item = &'static str> {
    catalog::names()
}

/// Returns every `(name, Configuration)` pair in the built-in catalogue,
/// primary names and aliases alike -- the full name-to-parameters mapping,
/// not just the one distinct configuration per algorithm that
/// [`catalog_names`] enumerates.
pub fn templates() -> impl Iterator<Item = (&'static str, Configuration)> {
    catalog::all_names().map(|name| (name, catalog::lookup(name).expect("name came from the catalogue")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_example_algorithm_is_in_the_catalogue() {
        assert!(catalog_names().any(|name| name == "crc-32-iso-hdlc"));
    }

    #[test]
    fn custom_configuration_bypasses_the_catalogue() {
        let config = Configuration::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF).unwrap();
        let mut engine = Engine::new(config);
        engine.update(b"123456789");
        assert_eq!(engine.digest(), 0xCBF4_3926);
    }

    #[test]
    fn unknown_template_name_is_an_error() {
        assert!(Engine::from_template("definitely-not-a-crc").is_err());
    }

    #[test]
    fn templates_lists_every_name_including_aliases() {
        // `templates()` walks the full alias table (catalog.rs's `all_names`),
        // so it has strictly more entries than `catalog_names()`, which lists
        // one primary name per distinct algorithm.
        assert!(templates().count() > catalog_names().count());
    }

    #[test]
    fn templates_includes_aliases_mapped_to_their_canonical_configuration() {
        let mut templates = templates();
        let alias_config = templates.find(|(name, _)| *name == "crc-32").map(|(_, config)| config);
        let primary_config = Engine::from_template("crc-32-iso-hdlc").unwrap().configuration().clone();
        assert_eq!(alias_config, Some(primary_config));
    }
}
