// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */

//! i.MX RT1062 fuse identifiers, Teensy 4.x.

#[cfg(feature = "defmt")]
#[allow(unused)]
use defmt::{debug, error, info, trace, warn};

#[cfg(feature = "log")]
#[allow(unused)]
use log::{debug, error, info, trace, warn};

use teensyid_format::{MacAddress, Uid64};

use crate::regs::{ocotp, Registers};

/// PJRC serial, the low 24 bits of MAC0.
pub fn serial(regs: &impl Registers) -> u32 {
    regs.read32(ocotp::MAC0) & 0x00FF_FFFF
}

/// First of the two fused MAC addresses.
pub fn mac(regs: &impl Registers) -> MacAddress {
    let mac1 = regs.read32(ocotp::MAC1);
    let mac0 = regs.read32(ocotp::MAC0);
    trace!("ocotp mac1 {:#x} mac0 {:#x}", mac1, mac0);
    let m1 = mac1.to_be_bytes();
    let m2 = mac0.to_be_bytes();
    MacAddress([m1[2], m1[3], m2[0], m2[1], m2[2], m2[3]])
}

pub fn uid64(regs: &impl Registers) -> Uid64 {
    let cfg0 = regs.read32(ocotp::CFG0);
    let cfg1 = regs.read32(ocotp::CFG1);
    trace!("ocotp cfg0 {:#x} cfg1 {:#x}", cfg0, cfg1);
    Uid64::from_words(cfg0, cfg1)
}
