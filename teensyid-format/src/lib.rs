// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */

//! Teensy chip identifiers and their text forms.
//!
//! These are plain values. Reading them from hardware is the job of the
//! `teensyid` crate, this crate only knows how the bytes are laid out and
//! printed.
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

use core::fmt::{Display, Write};

mod chip_uuid;
mod mac;
mod serial;
mod uid;

pub use chip_uuid::ChipUuid;
pub use mac::MacAddress;
pub use serial::SerialNumber;
pub use uid::{KinetisUid, Uid64};

/// Longest formatted identifier, a hyphenated UUID.
pub const MAX_ID_LEN: usize = 36;

/// Text form of an identifier.
pub type IdString = heapless::String<MAX_ID_LEN>;

/// Returned in place of an identifier the board does not have.
pub const NO_UID: &str = "no UID";

/// Formats any identifier into an [`IdString`].
pub fn id_string(id: &impl Display) -> IdString {
    let mut s = IdString::new();
    // All identifier formats fit in MAX_ID_LEN
    let _ = write!(&mut s, "{id}");
    s
}

/// The [`NO_UID`] placeholder as an [`IdString`].
pub fn no_uid() -> IdString {
    let mut s = IdString::new();
    let _ = s.push_str(NO_UID);
    s
}
