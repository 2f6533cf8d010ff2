// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */
use core::fmt;

/// Factory serial number word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialNumber(pub u32);

impl SerialNumber {
    /// Serials below this are shown by the USB descriptor with a
    /// trailing zero.
    const USB_SCALE_BELOW: u32 = 10_000_000;

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Big-endian bytes.
    pub const fn bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The number reported in the USB serial string descriptor.
    ///
    /// Short serials are multiplied by ten so they are never mistaken
    /// for older bootloader-assigned numbers.
    pub const fn usb(&self) -> u32 {
        if self.0 < Self::USB_SCALE_BELOW {
            self.0 * 10
        } else {
            self.0
        }
    }
}

impl From<u32> for SerialNumber {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// `xx-xx-xx-xx`, lower case hex.
impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bytes();
        write!(f, "{:02x}-{:02x}-{:02x}-{:02x}", b[0], b[1], b[2], b[3])
    }
}
