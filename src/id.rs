// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */

#[cfg(feature = "defmt")]
#[allow(unused)]
use defmt::{debug, error, info, trace, warn};

#[cfg(feature = "log")]
#[allow(unused)]
use log::{debug, error, info, trace, warn};

use core::fmt;

use teensyid_format::{
    id_string, no_uid, ChipUuid, IdString, KinetisUid, MacAddress,
    SerialNumber, Uid64,
};

use crate::board::{Board, Family};
use crate::regs::{Mmio, Registers};
use crate::{ftfl, ocotp, sim, Error, Result};

/// Reads a board's identifiers through a register source.
pub struct TeensyId<R> {
    regs: R,
    board: Board,
}

impl TeensyId<Mmio> {
    /// Reader for the board selected at build time.
    ///
    /// # Safety
    ///
    /// See [`Mmio::new`].
    pub unsafe fn current() -> Self {
        Self::new(Mmio::new(), Board::CURRENT)
    }
}

impl<R: Registers> TeensyId<R> {
    pub fn new(regs: R, board: Board) -> Self {
        Self { regs, board }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn into_inner(self) -> R {
        self.regs
    }

    /// Factory serial number.
    ///
    /// A flash controller error is logged and the result word returned
    /// anyway. Use [`try_serial_number`](Self::try_serial_number) to see
    /// the error.
    pub fn serial_number(&mut self) -> SerialNumber {
        let (raw, status) = self.read_serial();
        if let Err(e) = status {
            warn!("serial read failed: {}", e);
        }
        SerialNumber(raw)
    }

    pub fn try_serial_number(&mut self) -> Result<SerialNumber> {
        let (raw, status) = self.read_serial();
        status.map(|()| SerialNumber(raw))
    }

    fn read_serial(&mut self) -> (u32, Result<()>) {
        if self.board.family() == Family::Imxrt {
            return (ocotp::serial(&self.regs), Ok(()));
        }

        match self.board.flash_module() {
            Some(module) => {
                let hsrun = self.board.has_hsrun();
                let c = ftfl::read_serial(&mut self.regs, module, hsrun);
                (c.word, c.check().map(|_| ()))
            }
            // no flash controller to ask
            None => (0, Ok(())),
        }
    }

    /// Serial as shown in the USB descriptor.
    pub fn usb_serial(&mut self) -> u32 {
        self.serial_number().usb()
    }

    pub fn serial_bytes(&mut self) -> [u8; 4] {
        self.serial_number().bytes()
    }

    pub fn serial_string(&mut self) -> IdString {
        id_string(&self.serial_number())
    }

    /// Fused MAC on Teensy 4.x, otherwise derived from the serial.
    pub fn mac_address(&mut self) -> MacAddress {
        match self.board.family() {
            Family::Imxrt => ocotp::mac(&self.regs),
            Family::Kinetis => MacAddress::from_serial(self.serial_number()),
        }
    }

    /// As `mac_address`, with the serial already read.
    fn mac_for(&self, serial: SerialNumber) -> MacAddress {
        match self.board.family() {
            Family::Imxrt => ocotp::mac(&self.regs),
            Family::Kinetis => MacAddress::from_serial(serial),
        }
    }

    pub fn mac_string(&mut self) -> IdString {
        id_string(&self.mac_address())
    }

    pub fn kinetis_uid(&mut self) -> Result<KinetisUid> {
        let width = self.board.uid_width().ok_or(Error::Unsupported)?;
        Ok(sim::uid(&self.regs, width))
    }

    /// `"no UID"` on Teensy 4.x.
    pub fn kinetis_uid_string(&mut self) -> IdString {
        match self.kinetis_uid() {
            Ok(uid) => id_string(&uid),
            Err(_) => no_uid(),
        }
    }

    pub fn uuid(&mut self) -> Result<ChipUuid> {
        if self.board.family() != Family::Kinetis {
            return Err(Error::Unsupported);
        }
        let mac = self.mac_address();
        self.uuid_for(mac)
    }

    fn uuid_for(&self, mac: MacAddress) -> Result<ChipUuid> {
        if self.board.family() != Family::Kinetis {
            return Err(Error::Unsupported);
        }
        let (uidml, uidl) = sim::uuid_words(&self.regs);
        Ok(ChipUuid::from_kinetis(uidml, uidl, mac))
    }

    /// `"no UID"` on Teensy 4.x.
    pub fn uuid_string(&mut self) -> IdString {
        match self.uuid() {
            Ok(u) => id_string(&u),
            Err(_) => no_uid(),
        }
    }

    /// Teensy 4.x only.
    pub fn uid64(&mut self) -> Result<Uid64> {
        if self.board.family() != Family::Imxrt {
            return Err(Error::Unsupported);
        }
        Ok(ocotp::uid64(&self.regs))
    }

    /// `"no UID"` on Teensy 3.x and LC.
    pub fn uid64_string(&mut self) -> IdString {
        match self.uid64() {
            Ok(u) => id_string(&u),
            Err(_) => no_uid(),
        }
    }

    /// Reads everything with a single flash command on Kinetis.
    pub fn identity(&mut self) -> Identity {
        let serial = self.serial_number();
        let mac = self.mac_for(serial);
        let id = Identity {
            board: self.board,
            serial,
            mac,
            kinetis_uid: self.kinetis_uid().ok(),
            uuid: self.uuid_for(mac).ok(),
            uid64: self.uid64().ok(),
        };
        debug!("identity {}", id.serial);
        id
    }
}

/// Every identifier the board has, read once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identity {
    pub board: Board,
    pub serial: SerialNumber,
    pub mac: MacAddress,
    pub kinetis_uid: Option<KinetisUid>,
    pub uuid: Option<ChipUuid>,
    pub uid64: Option<Uid64>,
}

impl Identity {
    /// Reads the board selected at build time.
    pub fn read() -> Self {
        crate::current().identity()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "board: {}", self.board.name())?;
        writeln!(f, "serial: {} ({})", self.serial, self.serial.usb())?;
        writeln!(f, "mac: {}", self.mac)?;
        if let Some(uid) = &self.kinetis_uid {
            writeln!(f, "uid: {uid}")?;
        }
        if let Some(uuid) = &self.uuid {
            writeln!(f, "uuid: {uuid}")?;
        }
        if let Some(uid64) = &self.uid64 {
            writeln!(f, "uid64: {uid64}")?;
        }
        Ok(())
    }
}
