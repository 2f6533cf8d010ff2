// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */

//! Factory identifiers of Teensy boards.
//!
//! Select the board with one Cargo feature (`teensy30`, `teensy31`,
//! `teensy32`, `teensy35`, `teensy36`, `teensylc`, `teensy40`,
//! `teensy41`). The free functions then read the running chip:
//!
//! - Teensy 4.x: OCOTP fuses hold the serial, MAC and a 64-bit UID.
//! - Teensy 3.x/LC: the serial sits in a program-once flash record, the
//!   MAC is derived from it, and the SIM holds an 80 or 128 bit UID.
//!
//! Strings come back as [`IdString`] values, so callers may keep several
//! at once.
//!
//! The free functions assume they run on the selected board. Use
//! [`TeensyId`] with another [`Registers`] source to read elsewhere.
#![cfg_attr(not(test), no_std)]

// critical-section implementation
#[cfg(all(target_arch = "arm", target_os = "none"))]
use cortex_m as _;

// Logging compiled out when neither "log" nor "defmt" is enabled.
// Defined before the modules so they are in textual scope there.
#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! trace {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}
#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}
#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

mod board;
mod error;
pub mod ftfl;
mod id;
pub mod ocotp;
pub mod regs;
pub mod sim;

#[cfg(test)]
mod board_select;
#[cfg(test)]
mod fake;

pub use board::{board_name, Board, Family, FlashModule, UidWidth};
pub use error::{Error, Result};
pub use id::{Identity, TeensyId};
pub use regs::{Mmio, Registers};

pub use teensyid_format::{
    ChipUuid, IdString, KinetisUid, MacAddress, SerialNumber, Uid64, NO_UID,
};

fn current() -> TeensyId<Mmio> {
    // SAFETY: register addresses follow the board feature this crate was
    // built for, which is the board it is running on.
    unsafe { TeensyId::current() }
}

/// Factory serial number. Flash errors are logged, not returned.
pub fn serial_number() -> SerialNumber {
    current().serial_number()
}

pub fn try_serial_number() -> Result<SerialNumber> {
    current().try_serial_number()
}

/// Serial number as reported over USB.
pub fn usb_serial() -> u32 {
    current().usb_serial()
}

/// Serial number, big-endian.
pub fn serial_bytes() -> [u8; 4] {
    current().serial_bytes()
}

/// Serial number as `xx-xx-xx-xx`.
pub fn serial_string() -> IdString {
    current().serial_string()
}

pub fn mac_address() -> MacAddress {
    current().mac_address()
}

/// MAC as `xx:xx:xx:xx:xx:xx`.
pub fn mac_string() -> IdString {
    current().mac_string()
}

/// SIM unique ID, Teensy 3.x and LC.
pub fn kinetis_uid() -> Result<KinetisUid> {
    current().kinetis_uid()
}

pub fn kinetis_uid_string() -> IdString {
    current().kinetis_uid_string()
}

/// UUID built from the SIM UID and MAC, Teensy 3.x and LC.
pub fn uuid() -> Result<ChipUuid> {
    current().uuid()
}

pub fn uuid_string() -> IdString {
    current().uuid_string()
}

/// OCOTP 64-bit UID, Teensy 4.x.
pub fn uid64() -> Result<Uid64> {
    current().uid64()
}

pub fn uid64_string() -> IdString {
    current().uid64_string()
}
