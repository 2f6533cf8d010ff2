// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */
use core::fmt;

use uuid::Uuid;

use crate::MacAddress;

/// UUID assembled from the Kinetis unique ID and MAC address.
///
/// The version nibble claims v4, but the value is fixed per chip rather
/// than random.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChipUuid(pub Uuid);

impl ChipUuid {
    const VERSION: u8 = 0x40;
    const VARIANT: u8 = 0x80;

    /// Lays out UIDML, UIDL and the MAC into the 16 UUID bytes.
    pub fn from_kinetis(uidml: u32, uidl: u32, mac: MacAddress) -> Self {
        let ml = uidml.to_be_bytes();
        let l = uidl.to_be_bytes();
        let m = mac.bytes();
        Self(Uuid::from_bytes([
            ml[0],
            ml[1],
            ml[2],
            ml[3],
            l[0],
            l[1],
            Self::VERSION,
            l[2],
            Self::VARIANT,
            l[3],
            m[0],
            m[1],
            m[2],
            m[3],
            m[4],
            m[5],
        ]))
    }

    pub fn bytes(&self) -> [u8; 16] {
        *self.0.as_bytes()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

/// Lower case 8-4-4-4-12.
impl fmt::Display for ChipUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChipUuid {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{:x}", self.0.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{id_string, SerialNumber};

    #[test]
    fn layout() {
        let mac = MacAddress::from_serial(SerialNumber(0x0012_d687));
        let u = ChipUuid::from_kinetis(0x1122_3344, 0x5566_7788, mac);
        assert_eq!(
            u.bytes(),
            [
                0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x40, 0x77, 0x80, 0x88,
                0x04, 0xe9, 0xe5, 0x12, 0xd6, 0x87,
            ]
        );
        assert_eq!(u.as_uuid().get_version_num(), 4);
        assert_eq!(u.as_uuid().get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn text() {
        let mac = MacAddress::from_serial(SerialNumber(0x0012_d687));
        let u = ChipUuid::from_kinetis(0x1122_3344, 0x5566_7788, mac);
        assert_eq!(
            id_string(&u).as_str(),
            "11223344-5566-4077-8088-04e9e512d687"
        );
    }
}
