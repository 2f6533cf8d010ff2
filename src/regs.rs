// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */

//! Register access for Teensy 3.x/LC (Kinetis) and 4.x (i.MX RT1062).

/// Byte and word access to absolute peripheral addresses.
pub trait Registers {
    fn read8(&self, addr: usize) -> u8;
    fn read32(&self, addr: usize) -> u32;
    fn write8(&mut self, addr: usize, val: u8);
    fn write32(&mut self, addr: usize, val: u32);
}

/// Memory-mapped registers of the running chip.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Register addresses are those of the board selected at build time.
    /// The caller must be running on that chip, and nothing else may be
    /// driving the flash controller or power mode at the same time.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Registers for Mmio {
    fn read8(&self, addr: usize) -> u8 {
        // SAFETY: addr is a peripheral register of this chip, per Mmio::new
        unsafe { (addr as *const u8).read_volatile() }
    }

    fn read32(&self, addr: usize) -> u32 {
        // SAFETY: as read8. Callers only pass word aligned addresses.
        unsafe { (addr as *const u32).read_volatile() }
    }

    fn write8(&mut self, addr: usize, val: u8) {
        // SAFETY: as read8
        unsafe { (addr as *mut u8).write_volatile(val) }
    }

    fn write32(&mut self, addr: usize, val: u32) {
        // SAFETY: as read32
        unsafe { (addr as *mut u32).write_volatile(val) }
    }
}

/// i.MX RT1062 on-chip OTP controller shadow registers.
pub mod ocotp {
    const BASE: usize = 0x401F_4000;

    pub const CFG0: usize = BASE + 0x410;
    pub const CFG1: usize = BASE + 0x420;
    pub const MAC0: usize = BASE + 0x620;
    pub const MAC1: usize = BASE + 0x630;
}

/// Kinetis flash memory module (FTFL, FTFA and FTFE share this layout).
pub mod ftfl {
    const BASE: usize = 0x4002_0000;

    pub const FSTAT: usize = BASE;
    /// Word window over FCCOB3..FCCOB0 (FCCOB0 in the top byte).
    pub const FCCOB3: usize = BASE + 0x4;
    pub const FCCOB1: usize = BASE + 0x6;
    pub const FCCOB0: usize = BASE + 0x7;
    /// Word window over FCCOB7..FCCOB4.
    pub const FCCOB7: usize = BASE + 0x8;
    /// Word window over FCCOBB..FCCOB8.
    pub const FCCOBB: usize = BASE + 0xC;

    pub const FSTAT_CCIF: u8 = 0x80;
    pub const FSTAT_RDCOLERR: u8 = 0x40;
    pub const FSTAT_ACCERR: u8 = 0x20;
    pub const FSTAT_FPVIOL: u8 = 0x10;
}

/// Kinetis system integration module.
pub mod sim {
    pub const CLKDIV1: usize = 0x4004_8044;
    pub const UIDH: usize = 0x4004_8054;
    pub const UIDMH: usize = 0x4004_8058;
    pub const UIDML: usize = 0x4004_805C;
    pub const UIDL: usize = 0x4004_8060;

    pub const CLKDIV1_OUTDIV1_SHIFT: u32 = 28;
    pub const CLKDIV1_OUTDIV2_SHIFT: u32 = 24;
    pub const CLKDIV1_OUTDIV_MASK: u32 = 0xF;
}

/// Kinetis system mode controller.
pub mod smc {
    pub const PMCTRL: usize = 0x4007_E001;
    pub const PMSTAT: usize = 0x4007_E003;

    pub const fn pmctrl_runm(mode: u8) -> u8 {
        (mode & 0x3) << 5
    }
    pub const RUNM_RUN: u8 = 0;
    pub const RUNM_HSRUN: u8 = 3;
}
