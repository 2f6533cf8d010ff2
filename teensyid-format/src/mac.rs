// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */
use core::fmt;

use crate::SerialNumber;

/// 48-bit Ethernet MAC address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// PJRC's IEEE OUI, used for MACs derived from a Kinetis serial.
    pub const PJRC_OUI: [u8; 3] = [0x04, 0xe9, 0xe5];

    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// PJRC OUI followed by the low three serial bytes.
    pub const fn from_serial(sn: SerialNumber) -> Self {
        let s = sn.bytes();
        let o = Self::PJRC_OUI;
        Self([o[0], o[1], o[2], s[1], s[2], s[3]])
    }

    pub const fn bytes(&self) -> [u8; 6] {
        self.0
    }

    pub const fn oui(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    pub const fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x02 != 0
    }
}

/// `xx:xx:xx:xx:xx:xx`, lower case hex.
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}
