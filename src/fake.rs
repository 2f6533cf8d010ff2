// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2025 Code Construct
 */

//! Simulated register file for host tests.
//!
//! Plain memory, except FSTAT (write-one-to-clear errors, CCIF launches a
//! command) and SMC_PMCTRL (switches SMC_PMSTAT).

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::ftfl::PowerMode;
use crate::regs::ftfl::*;
use crate::regs::{sim, smc, Registers};

const ERRORS: u8 = FSTAT_RDCOLERR | FSTAT_ACCERR | FSTAT_FPVIOL;

pub(crate) struct FakeRegs {
    mem: BTreeMap<usize, u8>,
    records: BTreeMap<u8, [u32; 2]>,
    launches: usize,
    busy_polls: usize,
    busy_left: Cell<usize>,
    next_error: u8,
    clkdiv_at_launch: Option<u32>,
    pmctrl_writes: usize,
    // mode entered when RUNM(0) is requested
    run_mode: PowerMode,
}

impl FakeRegs {
    pub fn new() -> Self {
        let mut r = Self {
            mem: BTreeMap::new(),
            records: BTreeMap::new(),
            launches: 0,
            busy_polls: 0,
            busy_left: Cell::new(0),
            next_error: 0,
            clkdiv_at_launch: None,
            pmctrl_writes: 0,
            run_mode: PowerMode::Run,
        };
        r.mem.insert(FSTAT, FSTAT_CCIF);
        r.mem.insert(smc::PMSTAT, PowerMode::Run as u8);
        r
    }

    /// Program-once record as (FCCOB7..4, FCCOBB..8) words.
    pub fn set_record(&mut self, index: u8, words: [u32; 2]) {
        self.records.insert(index, words);
    }

    /// FSTAT reads that report busy after each launch.
    pub fn set_busy_polls(&mut self, n: usize) {
        self.busy_polls = n;
    }

    pub fn busy_polls_left(&self) -> usize {
        self.busy_left.get()
    }

    pub fn launches(&self) -> usize {
        self.launches
    }

    pub fn raise_fstat(&mut self, bits: u8) {
        let v = self.byte(FSTAT) | bits;
        self.mem.insert(FSTAT, v);
    }

    pub fn fail_next_command(&mut self, bits: u8) {
        self.next_error = bits;
    }

    pub fn set_power_mode(&mut self, mode: PowerMode) {
        self.mem.insert(smc::PMSTAT, mode as u8);
    }

    /// Mode PMSTAT settles in when leaving HSRUN.
    pub fn set_run_mode_result(&mut self, mode: PowerMode) {
        self.run_mode = mode;
    }

    pub fn pmctrl_writes(&self) -> usize {
        self.pmctrl_writes
    }

    pub fn clkdiv_at_launch(&self) -> Option<u32> {
        self.clkdiv_at_launch
    }

    fn byte(&self, addr: usize) -> u8 {
        self.mem.get(&addr).copied().unwrap_or(0)
    }

    fn store32(&mut self, addr: usize, val: u32) {
        for (i, b) in val.to_le_bytes().into_iter().enumerate() {
            self.mem.insert(addr + i, b);
        }
    }

    fn run_command(&mut self) {
        self.launches += 1;
        self.clkdiv_at_launch = Some(self.read32(sim::CLKDIV1));

        let mut err = core::mem::take(&mut self.next_error);
        let hsrun = self.byte(smc::PMSTAT) == PowerMode::HighSpeedRun as u8;
        let cmd = self.byte(FCCOB0);
        let index = self.byte(FCCOB1);

        match self.records.get(&index).copied() {
            Some(rec) if !hsrun && cmd == 0x41 => {
                self.store32(FCCOB7, rec[0]);
                self.store32(FCCOBB, rec[1]);
            }
            _ => err |= FSTAT_ACCERR,
        }

        let fstat = (self.byte(FSTAT) & !ERRORS) | err | FSTAT_CCIF;
        self.mem.insert(FSTAT, fstat);
        self.busy_left.set(self.busy_polls);
    }
}

impl Registers for FakeRegs {
    fn read8(&self, addr: usize) -> u8 {
        let v = self.byte(addr);
        if addr == FSTAT && self.busy_left.get() > 0 {
            self.busy_left.set(self.busy_left.get() - 1);
            return v & !FSTAT_CCIF;
        }
        v
    }

    fn read32(&self, addr: usize) -> u32 {
        u32::from_le_bytes([
            self.byte(addr),
            self.byte(addr + 1),
            self.byte(addr + 2),
            self.byte(addr + 3),
        ])
    }

    fn write8(&mut self, addr: usize, val: u8) {
        match addr {
            FSTAT => {
                let cleared = self.byte(FSTAT) & !(val & ERRORS);
                self.mem.insert(FSTAT, cleared);
                if val & FSTAT_CCIF != 0 {
                    self.run_command();
                }
            }
            smc::PMCTRL => {
                self.mem.insert(addr, val);
                self.pmctrl_writes += 1;
                let mode = if (val >> 5) & 0x3 == smc::RUNM_HSRUN {
                    PowerMode::HighSpeedRun
                } else {
                    self.run_mode
                };
                self.set_power_mode(mode);
            }
            _ => {
                self.mem.insert(addr, val);
            }
        }
    }

    fn write32(&mut self, addr: usize, val: u32) {
        self.store32(addr, val);
    }
}
