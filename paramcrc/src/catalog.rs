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

//! The built-in catalogue of named CRC algorithms, keyed by the names used in
//! the reveng CRC catalogue (<https://reveng.sourceforge.io/crc-catalogue/>),
//! lowercased and hyphen-separated.
//!
//! Parameters, aliases and check values are transcribed from CPython's `_crc`
//! extension module (its `crc_name_ids` and `crc_templates` tables),
//! preserved verbatim including its spelling (lowercase, hyphens only, no
//! `/`) and its alias quirks (for instance `"crc-16-darc"` below routes to
//! `crc-16-genibus`, not a distinct DARC variant, because that's what the
//! source module does).
//!
//! Lookup mirrors that module's own approach: a flat, ASCII-sorted
//! `(name, template index)` table is binary-searched by name, then the
//! resolved index is used to build a [`Configuration`] from the parallel
//! [`TEMPLATES`] array. Two names differing only by alias (e.g. `"crc-32"`
//! and `"crc-32-iso-hdlc"`) therefore resolve to `==` configurations.

use crate::config::Configuration;
use crate::error::CrcError;

/// One named algorithm's parameters, plus its published reveng check value
/// (the CRC of the ASCII string `"123456789"`).
struct Template {
    name: &'static str,
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
    check: u64,
}

/// The distinct CRC parameter sets in the catalogue, indexed by [`NAMES`].
///
/// Several named algorithms in the reveng catalogue share identical
/// parameters (e.g. `crc-16-ccitt-false` and `crc-16-autosar` are both
/// `crc-16-ibm-3740`); those are folded into a single template here and
/// reached through multiple names in [`NAMES`], rather than duplicated.
#[rustfmt::skip]
const TEMPLATES: &[Template] = &[
    Template {
        name: "crc-3-gsm",
        width: 3,
        poly: 0x03,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x07,
        check: 0x04,
    }, // [0]
    Template {
        name: "crc-3-rohc",
        width: 3,
        poly: 0x03,
        init: 0x07,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x06,
    }, // [1]
    Template {
        name: "crc-4-g-704",
        width: 4,
        poly: 0x03,
        init: 0x00,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x07,
    }, // [2]
    Template {
        name: "crc-4-interlaken",
        width: 4,
        poly: 0x03,
        init: 0x0F,
        refin: false,
        refout: false,
        xorout: 0x0F,
        check: 0x0B,
    }, // [3]
    Template {
        name: "crc-5-epc-c1g2",
        width: 5,
        poly: 0x09,
        init: 0x09,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x00,
    }, // [4]
    Template {
        name: "crc-5-g-704",
        width: 5,
        poly: 0x15,
        init: 0x00,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x07,
    }, // [5]
    Template {
        name: "crc-5-usb",
        width: 5,
        poly: 0x05,
        init: 0x1F,
        refin: true,
        refout: true,
        xorout: 0x1F,
        check: 0x19,
    }, // [6]
    Template {
        name: "crc-6-cdma2000-a",
        width: 6,
        poly: 0x27,
        init: 0x3F,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x0D,
    }, // [7]
    Template {
        name: "crc-6-cdma2000-b",
        width: 6,
        poly: 0x07,
        init: 0x3F,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x3B,
    }, // [8]
    Template {
        name: "crc-6-darc",
        width: 6,
        poly: 0x19,
        init: 0x00,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x26,
    }, // [9]
    Template {
        name: "crc-6-g-704",
        width: 6,
        poly: 0x03,
        init: 0x00,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x06,
    }, // [10]
    Template {
        name: "crc-6-gsm",
        width: 6,
        poly: 0x2F,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x3F,
        check: 0x13,
    }, // [11]
    Template {
        name: "crc-7-mmc",
        width: 7,
        poly: 0x09,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x75,
    }, // [12]
    Template {
        name: "crc-7-rohc",
        width: 7,
        poly: 0x4F,
        init: 0x7F,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x53,
    }, // [13]
    Template {
        name: "crc-7-umts",
        width: 7,
        poly: 0x45,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x61,
    }, // [14]
    Template {
        name: "crc-8-autosar",
        width: 8,
        poly: 0x2F,
        init: 0xFF,
        refin: false,
        refout: false,
        xorout: 0xFF,
        check: 0xDF,
    }, // [15]
    Template {
        name: "crc-8-bluetooth",
        width: 8,
        poly: 0xA7,
        init: 0x00,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x26,
    }, // [16]
    Template {
        name: "crc-8-cdma2000",
        width: 8,
        poly: 0x9B,
        init: 0xFF,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0xDA,
    }, // [17]
    Template {
        name: "crc-8-darc",
        width: 8,
        poly: 0x39,
        init: 0x00,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x15,
    }, // [18]
    Template {
        name: "crc-8-dvb-s2",
        width: 8,
        poly: 0xD5,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0xBC,
    }, // [19]
    Template {
        name: "crc-8-gsm-a",
        width: 8,
        poly: 0x1D,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x37,
    }, // [20]
    Template {
        name: "crc-8-gsm-b",
        width: 8,
        poly: 0x49,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0xFF,
        check: 0x94,
    }, // [21]
    Template {
        name: "crc-8-hitag",
        width: 8,
        poly: 0x1D,
        init: 0xFF,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0xB4,
    }, // [22]
    Template {
        name: "crc-8-i-432-1",
        width: 8,
        poly: 0x07,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x55,
        check: 0xA1,
    }, // [23]
    Template {
        name: "crc-8-i-code",
        width: 8,
        poly: 0x1D,
        init: 0xFD,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x7E,
    }, // [24]
    Template {
        name: "crc-8-lte",
        width: 8,
        poly: 0x9B,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0xEA,
    }, // [25]
    Template {
        name: "crc-8-maxim-dow",
        width: 8,
        poly: 0x31,
        init: 0x00,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0xA1,
    }, // [26]
    Template {
        name: "crc-8-mifare-mad",
        width: 8,
        poly: 0x1D,
        init: 0xC7,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x99,
    }, // [27]
    Template {
        name: "crc-8-nrsc-5",
        width: 8,
        poly: 0x31,
        init: 0xFF,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0xF7,
    }, // [28]
    Template {
        name: "crc-8-opensafety",
        width: 8,
        poly: 0x2F,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0x3E,
    }, // [29]
    Template {
        name: "crc-8-rohc",
        width: 8,
        poly: 0x07,
        init: 0xFF,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0xD0,
    }, // [30]
    Template {
        name: "crc-8-sae-j1850",
        width: 8,
        poly: 0x1D,
        init: 0xFF,
        refin: false,
        refout: false,
        xorout: 0xFF,
        check: 0x4B,
    }, // [31]
    Template {
        name: "crc-8-smbus",
        width: 8,
        poly: 0x07,
        init: 0x00,
        refin: false,
        refout: false,
        xorout: 0x00,
        check: 0xF4,
    }, // [32]
    Template {
        name: "crc-8-tech-3250",
        width: 8,
        poly: 0x1D,
        init: 0xFF,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x97,
    }, // [33]
    Template {
        name: "crc-8-wcdma",
        width: 8,
        poly: 0x9B,
        init: 0x00,
        refin: true,
        refout: true,
        xorout: 0x00,
        check: 0x25,
    }, // [34]
    Template {
        name: "crc-10-atm",
        width: 10,
        poly: 0x0233,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x0199,
    }, // [35]
    Template {
        name: "crc-10-cdma2000",
        width: 10,
        poly: 0x03D9,
        init: 0x03FF,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x0233,
    }, // [36]
    Template {
        name: "crc-10-gsm",
        width: 10,
        poly: 0x0175,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x03FF,
        check: 0x012A,
    }, // [37]
    Template {
        name: "crc-11-flexray",
        width: 11,
        poly: 0x0385,
        init: 0x001A,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x05A3,
    }, // [38]
    Template {
        name: "crc-11-umts",
        width: 11,
        poly: 0x0307,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x0061,
    }, // [39]
    Template {
        name: "crc-12-cdma2000",
        width: 12,
        poly: 0x0F13,
        init: 0x0FFF,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x0D4D,
    }, // [40]
    Template {
        name: "crc-12-dect",
        width: 12,
        poly: 0x080F,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x0F5B,
    }, // [41]
    Template {
        name: "crc-12-gsm",
        width: 12,
        poly: 0x0D31,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0FFF,
        check: 0x0B34,
    }, // [42]
    Template {
        name: "crc-12-umts",
        width: 12,
        poly: 0x080F,
        init: 0x0000,
        refin: false,
        refout: true,
        xorout: 0x0000,
        check: 0x0DAF,
    }, // [43]
    Template {
        name: "crc-13-bbc",
        width: 13,
        poly: 0x1CF5,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x04FA,
    }, // [44]
    Template {
        name: "crc-14-darc",
        width: 14,
        poly: 0x0805,
        init: 0x0000,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0x082D,
    }, // [45]
    Template {
        name: "crc-14-gsm",
        width: 14,
        poly: 0x202D,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x3FFF,
        check: 0x30AE,
    }, // [46]
    Template {
        name: "crc-15-can",
        width: 15,
        poly: 0x4599,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x059E,
    }, // [47]
    Template {
        name: "crc-15-mpt1327",
        width: 15,
        poly: 0x6815,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0001,
        check: 0x2566,
    }, // [48]
    Template {
        name: "crc-16-arc",
        width: 16,
        poly: 0x8005,
        init: 0x0000,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0xBB3D,
    }, // [49]
    Template {
        name: "crc-16-cdma2000",
        width: 16,
        poly: 0xC867,
        init: 0xFFFF,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x4C06,
    }, // [50]
    Template {
        name: "crc-16-cms",
        width: 16,
        poly: 0x8005,
        init: 0xFFFF,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0xAEE7,
    }, // [51]
    Template {
        name: "crc-16-dds-110",
        width: 16,
        poly: 0x8005,
        init: 0x800D,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x9ECF,
    }, // [52]
    Template {
        name: "crc-16-dect-r",
        width: 16,
        poly: 0x0589,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0001,
        check: 0x007E,
    }, // [53]
    Template {
        name: "crc-16-dect-x",
        width: 16,
        poly: 0x0589,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x007F,
    }, // [54]
    Template {
        name: "crc-16-dnp",
        width: 16,
        poly: 0x3D65,
        init: 0x0000,
        refin: true,
        refout: true,
        xorout: 0xFFFF,
        check: 0xEA82,
    }, // [55]
    Template {
        name: "crc-16-en-13757",
        width: 16,
        poly: 0x3D65,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0xFFFF,
        check: 0xC2B7,
    }, // [56]
    Template {
        name: "crc-16-genibus",
        width: 16,
        poly: 0x1021,
        init: 0xFFFF,
        refin: false,
        refout: false,
        xorout: 0xFFFF,
        check: 0xD64E,
    }, // [57]
    Template {
        name: "crc-16-gsm",
        width: 16,
        poly: 0x1021,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0xFFFF,
        check: 0xCE3C,
    }, // [58]
    Template {
        name: "crc-16-ibm-3740",
        width: 16,
        poly: 0x1021,
        init: 0xFFFF,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x29B1,
    }, // [59]
    Template {
        name: "crc-16-ibm-sdlc",
        width: 16,
        poly: 0x1021,
        init: 0xFFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF,
        check: 0x906E,
    }, // [60]
    Template {
        name: "crc-16-iso-iec-14443-3-a",
        width: 16,
        poly: 0x1021,
        init: 0xC6C6,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0xBF05,
    }, // [61]
    Template {
        name: "crc-16-kermit",
        width: 16,
        poly: 0x1021,
        init: 0x0000,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0x2189,
    }, // [62]
    Template {
        name: "crc-16-lj1200",
        width: 16,
        poly: 0x6F63,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0xBDF4,
    }, // [63]
    Template {
        name: "crc-16-m17",
        width: 16,
        poly: 0x5935,
        init: 0xFFFF,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x772B,
    }, // [64]
    Template {
        name: "crc-16-maxim-dow",
        width: 16,
        poly: 0x8005,
        init: 0x0000,
        refin: true,
        refout: true,
        xorout: 0xFFFF,
        check: 0x44C2,
    }, // [65]
    Template {
        name: "crc-16-mcrf4xx",
        width: 16,
        poly: 0x1021,
        init: 0xFFFF,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0x6F91,
    }, // [66]
    Template {
        name: "crc-16-modbus",
        width: 16,
        poly: 0x8005,
        init: 0xFFFF,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0x4B37,
    }, // [67]
    Template {
        name: "crc-16-nrsc-5",
        width: 16,
        poly: 0x080B,
        init: 0xFFFF,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0xA066,
    }, // [68]
    Template {
        name: "crc-16-opensafety-a",
        width: 16,
        poly: 0x5935,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x5D38,
    }, // [69]
    Template {
        name: "crc-16-opensafety-b",
        width: 16,
        poly: 0x755B,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x20FE,
    }, // [70]
    Template {
        name: "crc-16-profibus",
        width: 16,
        poly: 0x1DCF,
        init: 0xFFFF,
        refin: false,
        refout: false,
        xorout: 0xFFFF,
        check: 0xA819,
    }, // [71]
    Template {
        name: "crc-16-riello",
        width: 16,
        poly: 0x1021,
        init: 0xB2AA,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0x63D0,
    }, // [72]
    Template {
        name: "crc-16-spi-fujitsu",
        width: 16,
        poly: 0x1021,
        init: 0x1D0F,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0xE5CC,
    }, // [73]
    Template {
        name: "crc-16-t10-dif",
        width: 16,
        poly: 0x8BB7,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0xD0DB,
    }, // [74]
    Template {
        name: "crc-16-teledisk",
        width: 16,
        poly: 0xA097,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x0FB3,
    }, // [75]
    Template {
        name: "crc-16-tms37157",
        width: 16,
        poly: 0x1021,
        init: 0x89EC,
        refin: true,
        refout: true,
        xorout: 0x0000,
        check: 0x26B1,
    }, // [76]
    Template {
        name: "crc-16-umts",
        width: 16,
        poly: 0x8005,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0xFEE8,
    }, // [77]
    Template {
        name: "crc-16-usb",
        width: 16,
        poly: 0x8005,
        init: 0xFFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF,
        check: 0xB4C8,
    }, // [78]
    Template {
        name: "crc-16-xmodem",
        width: 16,
        poly: 0x1021,
        init: 0x0000,
        refin: false,
        refout: false,
        xorout: 0x0000,
        check: 0x31C3,
    }, // [79]
    Template {
        name: "crc-17-can-fd",
        width: 17,
        poly: 0x01_685B,
        init: 0x00_0000,
        refin: false,
        refout: false,
        xorout: 0x00_0000,
        check: 0x00_4F03,
    }, // [80]
    Template {
        name: "crc-21-can-fd",
        width: 21,
        poly: 0x10_2899,
        init: 0x00_0000,
        refin: false,
        refout: false,
        xorout: 0x00_0000,
        check: 0x0E_D841,
    }, // [81]
    Template {
        name: "crc-24-ble",
        width: 24,
        poly: 0x00_065B,
        init: 0x55_5555,
        refin: true,
        refout: true,
        xorout: 0x00_0000,
        check: 0xC2_5A56,
    }, // [82]
    Template {
        name: "crc-24-flexray-a",
        width: 24,
        poly: 0x5D_6DCB,
        init: 0xFE_DCBA,
        refin: false,
        refout: false,
        xorout: 0x00_0000,
        check: 0x79_79BD,
    }, // [83]
    Template {
        name: "crc-24-flexray-b",
        width: 24,
        poly: 0x5D_6DCB,
        init: 0xAB_CDEF,
        refin: false,
        refout: false,
        xorout: 0x00_0000,
        check: 0x1F_23B8,
    }, // [84]
    Template {
        name: "crc-24-interlaken",
        width: 24,
        poly: 0x32_8B63,
        init: 0xFF_FFFF,
        refin: false,
        refout: false,
        xorout: 0xFF_FFFF,
        check: 0xB4_F3E6,
    }, // [85]
    Template {
        name: "crc-24-lte-a",
        width: 24,
        poly: 0x86_4CFB,
        init: 0x00_0000,
        refin: false,
        refout: false,
        xorout: 0x00_0000,
        check: 0xCD_E703,
    }, // [86]
    Template {
        name: "crc-24-lte-b",
        width: 24,
        poly: 0x80_0063,
        init: 0x00_0000,
        refin: false,
        refout: false,
        xorout: 0x00_0000,
        check: 0x23_EF52,
    }, // [87]
    Template {
        name: "crc-24-openpgp",
        width: 24,
        poly: 0x86_4CFB,
        init: 0xB7_04CE,
        refin: false,
        refout: false,
        xorout: 0x00_0000,
        check: 0x21_CF02,
    }, // [88]
    Template {
        name: "crc-24-os-9",
        width: 24,
        poly: 0x80_0063,
        init: 0xFF_FFFF,
        refin: false,
        refout: false,
        xorout: 0xFF_FFFF,
        check: 0x20_0FA5,
    }, // [89]
    Template {
        name: "crc-30-cdma",
        width: 30,
        poly: 0x2030_B9C7,
        init: 0x3FFF_FFFF,
        refin: false,
        refout: false,
        xorout: 0x3FFF_FFFF,
        check: 0x04C3_4ABF,
    }, // [90]
    Template {
        name: "crc-31-philips",
        width: 31,
        poly: 0x04C1_1DB7,
        init: 0x7FFF_FFFF,
        refin: false,
        refout: false,
        xorout: 0x7FFF_FFFF,
        check: 0x0CE9_E46C,
    }, // [91]
    Template {
        name: "crc-32-aixm",
        width: 32,
        poly: 0x8141_41AB,
        init: 0x0000_0000,
        refin: false,
        refout: false,
        xorout: 0x0000_0000,
        check: 0x3010_BF7F,
    }, // [92]
    Template {
        name: "crc-32-autosar",
        width: 32,
        poly: 0xF4AC_FB13,
        init: 0xFFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF,
        check: 0x1697_D06A,
    }, // [93]
    Template {
        name: "crc-32-base91-d",
        width: 32,
        poly: 0xA833_982B,
        init: 0xFFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF,
        check: 0x8731_5576,
    }, // [94]
    Template {
        name: "crc-32-bzip2",
        width: 32,
        poly: 0x04C1_1DB7,
        init: 0xFFFF_FFFF,
        refin: false,
        refout: false,
        xorout: 0xFFFF_FFFF,
        check: 0xFC89_1918,
    }, // [95]
    Template {
        name: "crc-32-cd-rom-edc",
        width: 32,
        poly: 0x8001_801B,
        init: 0x0000_0000,
        refin: true,
        refout: true,
        xorout: 0x0000_0000,
        check: 0x6EC2_EDC4,
    }, // [96]
    Template {
        name: "crc-32-cksum",
        width: 32,
        poly: 0x04C1_1DB7,
        init: 0x0000_0000,
        refin: false,
        refout: false,
        xorout: 0xFFFF_FFFF,
        check: 0x765E_7680,
    }, // [97]
    Template {
        name: "crc-32-iscsi",
        width: 32,
        poly: 0x1EDC_6F41,
        init: 0xFFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF,
        check: 0xE306_9283,
    }, // [98]
    Template {
        name: "crc-32-iso-hdlc",
        width: 32,
        poly: 0x04C1_1DB7,
        init: 0xFFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF,
        check: 0xCBF4_3926,
    }, // [99]
    Template {
        name: "crc-32-jamcrc",
        width: 32,
        poly: 0x04C1_1DB7,
        init: 0xFFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0x0000_0000,
        check: 0x340B_C6D9,
    }, // [100]
    Template {
        name: "crc-32-mef",
        width: 32,
        poly: 0x741B_8CD7,
        init: 0xFFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0x0000_0000,
        check: 0xD2C2_2F51,
    }, // [101]
    Template {
        name: "crc-32-mpeg-2",
        width: 32,
        poly: 0x04C1_1DB7,
        init: 0xFFFF_FFFF,
        refin: false,
        refout: false,
        xorout: 0x0000_0000,
        check: 0x0376_E6E7,
    }, // [102]
    Template {
        name: "crc-32-xfer",
        width: 32,
        poly: 0x0000_00AF,
        init: 0x0000_0000,
        refin: false,
        refout: false,
        xorout: 0x0000_0000,
        check: 0xBD0B_E338,
    }, // [103]
    Template {
        name: "crc-40-gsm",
        width: 40,
        poly: 0x00_0482_0009,
        init: 0x00_0000_0000,
        refin: false,
        refout: false,
        xorout: 0xFF_FFFF_FFFF,
        check: 0xD4_164F_C646,
    }, // [104]
    Template {
        name: "crc-64-ecma-182",
        width: 64,
        poly: 0x42F0_E1EB_A9EA_3693,
        init: 0x0000_0000_0000_0000,
        refin: false,
        refout: false,
        xorout: 0x0000_0000_0000_0000,
        check: 0x6C40_DF5F_0B49_7347,
    }, // [105]
    Template {
        name: "crc-64-go-iso",
        width: 64,
        poly: 0x0000_0000_0000_001B,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF_FFFF_FFFF,
        check: 0xB909_56C7_75A4_1001,
    }, // [106]
    Template {
        name: "crc-64-ms",
        width: 64,
        poly: 0x259C_84CB_A642_6349,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0x0000_0000_0000_0000,
        check: 0x75D4_B74F_024E_CEEA,
    }, // [107]
    Template {
        name: "crc-64-nvme",
        width: 64,
        poly: 0xAD93_D235_94C9_3659,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF_FFFF_FFFF,
        check: 0xAE8B_1486_0A79_9888,
    }, // [108]
    Template {
        name: "crc-64-redis",
        width: 64,
        poly: 0xAD93_D235_94C9_35A9,
        init: 0x0000_0000_0000_0000,
        refin: true,
        refout: true,
        xorout: 0x0000_0000_0000_0000,
        check: 0xE9C6_D914_C4B8_D9CA,
    }, // [109]
    Template {
        name: "crc-64-we",
        width: 64,
        poly: 0x42F0_E1EB_A9EA_3693,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: false,
        refout: false,
        xorout: 0xFFFF_FFFF_FFFF_FFFF,
        check: 0x62EC_59E3_F1A4_F00A,
    }, // [110]
    Template {
        name: "crc-64-xz",
        width: 64,
        poly: 0x42F0_E1EB_A9EA_3693,
        init: 0xFFFF_FFFF_FFFF_FFFF,
        refin: true,
        refout: true,
        xorout: 0xFFFF_FFFF_FFFF_FFFF,
        check: 0x995D_C9BB_DF19_39FA,
    }, // [111]
];

/// Every lookupable name (primary names and aliases), ASCII-sorted, paired
/// with the index of its [`Template`] in [`TEMPLATES`]. Sorted once, by
/// construction, so [`lookup`] can binary search it.
#[rustfmt::skip]
const NAMES: &[(&str, usize)] = &[
    ("arc", 49),
    ("b-crc-32", 95),
    ("cksum", 97),
    ("crc-10", 35),
    ("crc-10-atm", 35),
    ("crc-10-cdma2000", 36),
    ("crc-10-gsm", 37),
    ("crc-10-i-610", 35),
    ("crc-11", 38),
    ("crc-11-flexray", 38),
    ("crc-11-umts", 39),
    ("crc-12-3gpp", 43),
    ("crc-12-cdma2000", 40),
    ("crc-12-dect", 41),
    ("crc-12-gsm", 42),
    ("crc-12-umts", 43),
    ("crc-13-bbc", 44),
    ("crc-14-darc", 45),
    ("crc-14-gsm", 46),
    ("crc-15", 47),
    ("crc-15-can", 47),
    ("crc-15-mpt1327", 48),
    ("crc-16", 49),
    ("crc-16-acorn", 79),
    ("crc-16-arc", 49),
    ("crc-16-aug-ccitt", 73),
    ("crc-16-autosar", 59),
    ("crc-16-bluetooth", 62),
    ("crc-16-buypass", 77),
    ("crc-16-ccitt", 62),
    ("crc-16-ccitt-false", 59),
    ("crc-16-ccitt-true", 62),
    ("crc-16-cdma2000", 50),
    ("crc-16-cms", 51),
    ("crc-16-darc", 57),
    ("crc-16-dds-110", 52),
    ("crc-16-dect-r", 53),
    ("crc-16-dect-x", 54),
    ("crc-16-dnp", 55),
    ("crc-16-en-13757", 56),
    ("crc-16-epc", 57),
    ("crc-16-epc-c1g2", 57),
    ("crc-16-genibus", 57),
    ("crc-16-gsm", 58),
    ("crc-16-i-code", 57),
    ("crc-16-ibm-3740", 59),
    ("crc-16-ibm-sdlc", 60),
    ("crc-16-iec-61158-2", 71),
    ("crc-16-iso-hdlc", 60),
    ("crc-16-iso-iec-14443-3-a", 61),
    ("crc-16-iso-iec-14443-3-b", 60),
    ("crc-16-kermit", 62),
    ("crc-16-lha", 49),
    ("crc-16-lj1200", 63),
    ("crc-16-lte", 79),
    ("crc-16-m17", 64),
    ("crc-16-maxim", 65),
    ("crc-16-maxim-dow", 65),
    ("crc-16-mcrf4xx", 66),
    ("crc-16-modbus", 67),
    ("crc-16-nrsc-5", 68),
    ("crc-16-opensafety-a", 69),
    ("crc-16-opensafety-b", 70),
    ("crc-16-profibus", 71),
    ("crc-16-riello", 72),
    ("crc-16-spi-fujitsu", 73),
    ("crc-16-t10-dif", 74),
    ("crc-16-teledisk", 75),
    ("crc-16-tms37157", 76),
    ("crc-16-umts", 77),
    ("crc-16-usb", 78),
    ("crc-16-v-41-lsb", 62),
    ("crc-16-v-41-msb", 79),
    ("crc-16-verifone", 77),
    ("crc-16-x-25", 60),
    ("crc-16-xmodem", 79),
    ("crc-17-can-fd", 80),
    ("crc-21-can-fd", 81),
    ("crc-24", 88),
    ("crc-24-ble", 82),
    ("crc-24-flexray-a", 83),
    ("crc-24-flexray-b", 84),
    ("crc-24-interlaken", 85),
    ("crc-24-lte-a", 86),
    ("crc-24-lte-b", 87),
    ("crc-24-openpgp", 88),
    ("crc-24-os-9", 89),
    ("crc-3-gsm", 0),
    ("crc-3-rohc", 1),
    ("crc-30-cdma", 90),
    ("crc-31-philips", 91),
    ("crc-32", 99),
    ("crc-32-aal5", 95),
    ("crc-32-adccp", 99),
    ("crc-32-aixm", 92),
    ("crc-32-autosar", 93),
    ("crc-32-base91-c", 98),
    ("crc-32-base91-d", 94),
    ("crc-32-bzip2", 95),
    ("crc-32-castagnoli", 98),
    ("crc-32-cd-rom-edc", 96),
    ("crc-32-cksum", 97),
    ("crc-32-dect-b", 95),
    ("crc-32-interlaken", 98),
    ("crc-32-iscsi", 98),
    ("crc-32-iso-hdlc", 99),
    ("crc-32-jamcrc", 100),
    ("crc-32-mef", 101),
    ("crc-32-mpeg-2", 102),
    ("crc-32-nvme", 98),
    ("crc-32-posix", 97),
    ("crc-32-v-42", 99),
    ("crc-32-xfer", 103),
    ("crc-32-xz", 99),
    ("crc-32c", 98),
    ("crc-32d", 94),
    ("crc-32q", 92),
    ("crc-4-g-704", 2),
    ("crc-4-interlaken", 3),
    ("crc-4-itu", 2),
    ("crc-40-gsm", 104),
    ("crc-5-epc", 4),
    ("crc-5-epc-c1g2", 4),
    ("crc-5-g-704", 5),
    ("crc-5-itu", 5),
    ("crc-5-usb", 6),
    ("crc-6-cdma2000-a", 7),
    ("crc-6-cdma2000-b", 8),
    ("crc-6-darc", 9),
    ("crc-6-g-704", 10),
    ("crc-6-gsm", 11),
    ("crc-6-itu", 10),
    ("crc-64", 105),
    ("crc-64-ecma-182", 105),
    ("crc-64-go-ecma", 111),
    ("crc-64-go-iso", 106),
    ("crc-64-ms", 107),
    ("crc-64-nvme", 108),
    ("crc-64-redis", 109),
    ("crc-64-we", 110),
    ("crc-64-xz", 111),
    ("crc-7", 12),
    ("crc-7-mmc", 12),
    ("crc-7-rohc", 13),
    ("crc-7-umts", 14),
    ("crc-8", 32),
    ("crc-8-aes", 33),
    ("crc-8-autosar", 15),
    ("crc-8-bluetooth", 16),
    ("crc-8-cdma2000", 17),
    ("crc-8-darc", 18),
    ("crc-8-dvb-s2", 19),
    ("crc-8-ebu", 33),
    ("crc-8-gsm-a", 20),
    ("crc-8-gsm-b", 21),
    ("crc-8-hitag", 22),
    ("crc-8-i-432-1", 23),
    ("crc-8-i-code", 24),
    ("crc-8-itu", 23),
    ("crc-8-lte", 25),
    ("crc-8-maxim", 26),
    ("crc-8-maxim-dow", 26),
    ("crc-8-mifare-mad", 27),
    ("crc-8-nrsc-5", 28),
    ("crc-8-opensafety", 29),
    ("crc-8-rohc", 30),
    ("crc-8-sae-j1850", 31),
    ("crc-8-smbus", 32),
    ("crc-8-tech-3250", 33),
    ("crc-8-wcdma", 34),
    ("crc-a", 61),
    ("crc-b", 60),
    ("crc-ccitt", 62),
    ("crc-ibm", 49),
    ("dow-crc", 26),
    ("jamcrc", 100),
    ("kermit", 62),
    ("modbus", 67),
    ("pkzip", 99),
    ("r-crc-16", 53),
    ("x-25", 60),
    ("x-crc-12", 41),
    ("x-crc-16", 54),
    ("xfer", 103),
    ("xmodem", 79),
    ("zmodem", 79),
];

/// Looks up `name` in the built-in catalogue and builds its [`Configuration`].
///
/// Matching is case-sensitive and exact, against either an algorithm's
/// primary name or one of its aliases. Lookup is a binary search over
/// [`NAMES`], which is sorted by declaration.
pub fn lookup(name: &str) -> Result<Configuration, CrcError> {
    let index = NAMES
        .binary_search_by(|(candidate, _)| (*candidate).cmp(name))
        .map_err(|_| CrcError::UnknownTemplate { name: name.to_owned() })?;
    let (_, template_index) = NAMES[index];
    let template = &TEMPLATES[template_index];
    Ok(Configuration::new(
        template.width,
        template.poly,
        template.init,
        template.refin,
        template.refout,
        template.xorout,
    )
    .expect("catalogue templates are pre-validated"))
}

/// Returns the primary name of every distinct algorithm in the catalogue, in
/// declaration order. Aliases are not included; see [`all_names`] for the
/// full lookupable set.
pub fn names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|template| template.name)
}

/// Returns every lookupable name in the catalogue, primary names and aliases
/// alike, ASCII-sorted -- the full `name -> Configuration` mapping the
/// source module's `crc_templates_dict` builds by walking `crc_name_ids` in
/// its entirety.
pub fn all_names() -> impl Iterator<Item = &'static str> {
    NAMES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn every_template_matches_its_published_check_value() {
        for template in TEMPLATES {
            let config = lookup(template.name).unwrap();
            let mut engine = Engine::new(config);
            engine.update(b"123456789");
            assert_eq!(
                engine.digest(),
                template.check,
                "catalogue entry {} did not match its check value",
                template.name
            );
        }
    }

    #[test]
    fn names_table_is_sorted_for_binary_search() {
        let names: Vec<&str> = NAMES.iter().map(|(name, _)| *name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted, "NAMES must stay ASCII-sorted for binary_search_by");
    }

    #[test]
    fn names_table_has_no_duplicates() {
        let mut names: Vec<&str> = NAMES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before, "duplicate name in catalogue");
    }

    #[test]
    fn aliases_resolve_to_the_same_configuration() {
        let primary = lookup("crc-32-iso-hdlc").unwrap();
        let alias = lookup("crc-32").unwrap();
        assert_eq!(primary, alias);
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = lookup("crc-999-not-a-real-algorithm").unwrap_err();
        assert!(matches!(err, CrcError::UnknownTemplate { .. }));
    }

    #[test]
    fn names_lists_every_template_exactly_once() {
        let all: Vec<_> = names().collect();
        assert_eq!(all.len(), TEMPLATES.len());
        let mut sorted = all.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), all.len(), "duplicate primary name in catalogue");
    }

    #[test]
    fn darc_alias_quirk_is_preserved_verbatim() {
        // The source module routes "crc-16-darc" to crc-16-genibus, not a
        // distinct DARC variant -- see the module doc comment above.
        let darc = lookup("crc-16-darc").unwrap();
        let genibus = lookup("crc-16-genibus").unwrap();
        assert_eq!(darc, genibus);
    }

    #[test]
    fn width_one_through_sixty_four_all_appear() {
        // Not every width 1..=64 has a named template in the reveng
        // catalogue (there is no standard 1- or 2-bit CRC, for instance),
        // but the ones that exist should span a wide range.
        let widths: std::collections::BTreeSet<u8> = TEMPLATES.iter().map(|t| t.width).collect();
        assert!(widths.contains(&3));
        assert!(widths.contains(&8));
        assert!(widths.contains(&16));
        assert!(widths.contains(&32));
        assert!(widths.contains(&64));
        assert!(widths.len() >= 20);
    }
}
