// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */
use core::fmt;

/// Kinetis SIM unique identification registers, most significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KinetisUid {
    /// KL26 (Teensy LC): UIDMH, UIDML, UIDL.
    Bits80([u32; 3]),
    /// K20/K64/K66 (Teensy 3.x): UIDH, UIDMH, UIDML, UIDL.
    Bits128([u32; 4]),
}

impl KinetisUid {
    pub fn words(&self) -> &[u32] {
        match self {
            Self::Bits80(w) => w,
            Self::Bits128(w) => w,
        }
    }
}

/// Words as `%08x` joined by `-`.
impl fmt::Display for KinetisUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.words().iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{w:08x}")?;
        }
        Ok(())
    }
}

/// i.MX RT 64-bit unique ID from OCOTP CFG0/CFG1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uid64(pub [u8; 8]);

impl Uid64 {
    /// CFG0 then CFG1, each big-endian.
    pub fn from_words(cfg0: u32, cfg1: u32) -> Self {
        let mut b = [0u8; 8];
        b[..4].copy_from_slice(&cfg0.to_be_bytes());
        b[4..].copy_from_slice(&cfg1.to_be_bytes());
        Self(b)
    }

    pub const fn bytes(&self) -> [u8; 8] {
        self.0
    }

    pub const fn raw(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }
}

impl fmt::Display for Uid64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_string;

    #[test]
    fn uid80_text() {
        let uid = KinetisUid::Bits80([0x0000_002b, 0x3f0a_1234, 0x4e45_8001]);
        assert_eq!(id_string(&uid).as_str(), "0000002b-3f0a1234-4e458001");
    }

    #[test]
    fn uid128_text() {
        let uid = KinetisUid::Bits128([0x1, 0x2, 0xabcd_ef00, 0xffff_ffff]);
        assert_eq!(
            id_string(&uid).as_str(),
            "00000001-00000002-abcdef00-ffffffff"
        );
        assert_eq!(uid.words().len(), 4);
    }

    #[test]
    fn uid64_layout() {
        let uid = Uid64::from_words(0x0102_0304, 0xa0b0_c0d0);
        assert_eq!(uid.bytes(), [1, 2, 3, 4, 0xa0, 0xb0, 0xc0, 0xd0]);
        assert_eq!(uid.raw(), 0x0102_0304_a0b0_c0d0);
        assert_eq!(id_string(&uid).as_str(), "01-02-03-04-a0-b0-c0-d0");
    }
}
