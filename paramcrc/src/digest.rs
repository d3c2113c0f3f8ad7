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

//! Turning an internalized accumulator into the external, user-visible CRC
//! value.
//!
//! The accumulator an [`crate::Engine`] carries between `update` calls is
//! shaped for the update kernels, not for display: it's left-aligned or
//! bit-reversed depending on `refin`, per [`crate::engine`]'s internalized
//! representation. Finalizing recovers the canonical, most-significant-bit-
//! first register value, optionally reflects it again for `refout`, and
//! applies `xorout`.

use crate::bits::bit_reverse;

/// Converts an internalized accumulator into the external CRC value.
pub(crate) fn finalize(accum: u64, width: u8, refin: bool, refout: bool, xorout: u64) -> u64 {
    let canonical = if refin {
        bit_reverse(accum, width)
    } else {
        accum >> (64 - width as u32)
    };
    let register = if refout {
        bit_reverse(canonical, width)
    } else {
        canonical
    };
    register ^ xorout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::bit_reverse as reflect;
    use crate::kernel::bitwise;

    #[test]
    fn crc32_iso_hdlc_check_value() {
        // refin == refout == true: canonical un-reflection and the output
        // reflection cancel out, leaving the accumulator as-is before xorout.
        let poly = reflect(0x04C11DB7u64, 32);
        let init = reflect(0xFFFF_FFFFu64, 32);
        let accum = bitwise::update_bytes(init, poly, true, b"123456789");
        let crc = finalize(accum, 32, true, true, 0xFFFF_FFFF);
        assert_eq!(crc, 0xCBF4_3926);
    }

    #[test]
    fn crc16_xmodem_check_value() {
        // refin == refout == false, init == 0, xorout == 0.
        let poly = 0x1021u64 << 48;
        let accum = bitwise::update_bytes(0, poly, false, b"123456789");
        let crc = finalize(accum, 16, false, false, 0);
        assert_eq!(crc, 0x31C3);
    }

    #[test]
    fn asymmetric_refin_refout_round_trips_through_zero_message() {
        // With an empty message the accumulator equals `init`, so finalize
        // must recover a value consistent with reflecting init by hand.
        let width = 12;
        let init = 0x0FFu64 << (64 - width);
        let crc = finalize(init, width, false, true, 0);
        let expected = reflect(init >> (64 - width as u32), width);
        assert_eq!(crc, expected);
    }
}
