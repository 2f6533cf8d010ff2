// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */

//! Kinetis flash controller "Read Once" of the factory serial number.
//!
//! PJRC programs the serial into a program-once flash record. Reading it
//! back is a flash command, so it runs with interrupts masked, and on the
//! MK66 the core has to drop out of HSRUN first.

#[cfg(feature = "defmt")]
#[allow(unused)]
use defmt::{debug, error, info, trace, warn};

#[cfg(feature = "log")]
#[allow(unused)]
use log::{debug, error, info, trace, warn};

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::board::FlashModule;
use crate::regs::ftfl::*;
use crate::regs::{sim, smc, Registers};
use crate::{Error, Result};

#[repr(u8)]
#[derive(Clone, Copy, Debug)]
enum FlashCommand {
    ReadOnce = 0x41,
}

/// Program-once record index holding the serial, 4 byte records.
const FTFL_SERIAL_RECORD: u8 = 15;
/// Same record on FTFE, which has 8 byte records.
const FTFE_SERIAL_RECORD: u8 = 7;

/// SMC_PMSTAT values.
#[repr(u8)]
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    Run = 0x01,
    Stop = 0x02,
    Vlpr = 0x04,
    Vlpw = 0x08,
    Vlps = 0x10,
    Lls = 0x20,
    Vlls = 0x40,
    HighSpeedRun = 0x80,
}

impl PowerMode {
    pub fn read(regs: &impl Registers) -> Option<Self> {
        Self::from_u8(regs.read8(smc::PMSTAT))
    }
}

/// Result of a read-once command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Word read from the FCCOB result registers.
    pub word: u32,
    /// FSTAT once CCIF was set.
    pub fstat: u8,
}

impl Completion {
    /// The word, unless the controller flagged an error.
    pub fn check(&self) -> Result<u32> {
        if self.fstat & FSTAT_ACCERR != 0 {
            Err(Error::FlashAccess)
        } else if self.fstat & FSTAT_FPVIOL != 0 {
            Err(Error::FlashProtection)
        } else if self.fstat & FSTAT_RDCOLERR != 0 {
            Err(Error::ReadCollision)
        } else {
            Ok(self.word)
        }
    }
}

/// Reads the serial record with interrupts masked.
///
/// `hsrun` is set for boards that may be running in HSRUN.
/// Spins on CCIF with no timeout.
pub fn read_serial<R: Registers>(
    regs: &mut R,
    module: FlashModule,
    hsrun: bool,
) -> Completion {
    critical_section::with(|_cs| {
        let saved = if hsrun { hsrun_exit(regs) } else { None };

        let c = match module {
            FlashModule::Ftfl => read_once_ftfl(regs),
            FlashModule::Ftfe => read_once_ftfe(regs),
        };

        if let Some(clkdiv) = saved {
            hsrun_restore(regs, clkdiv);
        }
        c
    })
}

fn read_once_ftfl<R: Registers>(regs: &mut R) -> Completion {
    clear_errors(regs);
    regs.write8(FCCOB0, FlashCommand::ReadOnce as u8);
    regs.write8(FCCOB1, FTFL_SERIAL_RECORD);
    let fstat = launch(regs);
    let word = regs.read32(FCCOB7);
    debug!("ftfl read once {:#x} fstat {:#x}", word, fstat);
    Completion { word, fstat }
}

fn read_once_ftfe<R: Registers>(regs: &mut R) -> Completion {
    clear_errors(regs);
    // FCCOB0 command, FCCOB1 record, FCCOB2/3 zero
    let cmd = u32::from_be_bytes([
        FlashCommand::ReadOnce as u8,
        FTFE_SERIAL_RECORD,
        0,
        0,
    ]);
    regs.write32(FCCOB3, cmd);
    let fstat = launch(regs);
    // serial is the second half of the 8 byte record
    let word = regs.read32(FCCOBB);
    debug!("ftfe read once {:#x} fstat {:#x}", word, fstat);
    Completion { word, fstat }
}

fn clear_errors<R: Registers>(regs: &mut R) {
    // write-one-to-clear
    regs.write8(FSTAT, FSTAT_RDCOLERR | FSTAT_ACCERR | FSTAT_FPVIOL);
}

/// Starts the command and waits for CCIF. Returns the final FSTAT.
fn launch<R: Registers>(regs: &mut R) -> u8 {
    regs.write8(FSTAT, FSTAT_CCIF);
    loop {
        let fstat = regs.read8(FSTAT);
        if fstat & FSTAT_CCIF != 0 {
            return fstat;
        }
        core::hint::spin_loop();
    }
}

/// Leaves HSRUN if the chip is in it, returning SIM_CLKDIV1 to restore.
///
/// The core is first slowed to the bus clock so RUN mode limits hold.
/// Bus and flash dividers are untouched, so peripherals keep their rates.
fn hsrun_exit<R: Registers>(regs: &mut R) -> Option<u32> {
    if PowerMode::read(&*regs) != Some(PowerMode::HighSpeedRun) {
        return None;
    }

    let clkdiv = regs.read32(sim::CLKDIV1);
    let m = sim::CLKDIV1_OUTDIV_MASK;
    let outdiv2 = (clkdiv >> sim::CLKDIV1_OUTDIV2_SHIFT) & m;
    let slow = (clkdiv & !(m << sim::CLKDIV1_OUTDIV1_SHIFT))
        | (outdiv2 << sim::CLKDIV1_OUTDIV1_SHIFT);
    trace!("hsrun exit, clkdiv1 {:#x} -> {:#x}", clkdiv, slow);
    regs.write32(sim::CLKDIV1, slow);

    regs.write8(smc::PMCTRL, smc::pmctrl_runm(smc::RUNM_RUN));
    while PowerMode::read(&*regs) == Some(PowerMode::HighSpeedRun) {
        core::hint::spin_loop();
    }
    Some(clkdiv)
}

fn hsrun_restore<R: Registers>(regs: &mut R, clkdiv: u32) {
    if PowerMode::read(&*regs) != Some(PowerMode::Run) {
        warn!("not in RUN, leaving HSRUN disabled");
        return;
    }

    regs.write8(smc::PMCTRL, smc::pmctrl_runm(smc::RUNM_HSRUN));
    while PowerMode::read(&*regs) == Some(PowerMode::Run) {
        core::hint::spin_loop();
    }
    regs.write32(sim::CLKDIV1, clkdiv);
    trace!("hsrun restored");
}
