// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */

//! Kinetis SIM unique identification registers.

use teensyid_format::KinetisUid;

use crate::board::UidWidth;
use crate::regs::{sim, Registers};

pub fn uid(regs: &impl Registers, width: UidWidth) -> KinetisUid {
    let mh = regs.read32(sim::UIDMH);
    let ml = regs.read32(sim::UIDML);
    let l = regs.read32(sim::UIDL);
    match width {
        // KL26 has no UIDH
        UidWidth::Bits80 => KinetisUid::Bits80([mh, ml, l]),
        UidWidth::Bits128 => {
            KinetisUid::Bits128([regs.read32(sim::UIDH), mh, ml, l])
        }
    }
}

/// (UIDML, UIDL), the words that go into the chip UUID.
pub fn uuid_words(regs: &impl Registers) -> (u32, u32) {
    (regs.read32(sim::UIDML), regs.read32(sim::UIDL))
}
