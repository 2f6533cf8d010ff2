// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2025 Code Construct
 */
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The selected board has no such identifier.
    Unsupported,
    /// Flash controller flagged ACCERR for the read-once command.
    FlashAccess,
    /// Flash controller flagged FPVIOL.
    FlashProtection,
    /// Flash was read while the command ran (RDCOLERR).
    ReadCollision,
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unsupported => "identifier not available on this board",
            Self::FlashAccess => "flash command access error",
            Self::FlashProtection => "flash protection violation",
            Self::ReadCollision => "flash read collision",
        };
        f.write_str(s)
    }
}

impl core::error::Error for Error {}
