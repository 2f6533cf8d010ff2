// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2017 Stefan Staub
 * Copyright (c) 2025 Code Construct
 */

//! Board variants and their identifier sources.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Board {
    Teensy30,
    Teensy31,
    Teensy32,
    Teensy35,
    Teensy36,
    TeensyLc,
    Teensy40,
    Teensy41,
    Unknown,
}

/// Where a chip keeps its identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Family {
    /// Teensy 4.x, OCOTP fuses.
    Imxrt,
    /// Teensy 3.x and LC, flash program-once records and SIM UID.
    Kinetis,
}

/// Kinetis flash controller flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashModule {
    /// FTFL or FTFA, 4 byte program-once records.
    Ftfl,
    /// FTFE, 8 byte program-once records.
    Ftfe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UidWidth {
    Bits80,
    Bits128,
}

impl Board {
    #[cfg(board = "teensy30")]
    pub const CURRENT: Board = Board::Teensy30;
    #[cfg(board = "teensy31")]
    pub const CURRENT: Board = Board::Teensy31;
    #[cfg(board = "teensy32")]
    pub const CURRENT: Board = Board::Teensy32;
    #[cfg(board = "teensy35")]
    pub const CURRENT: Board = Board::Teensy35;
    #[cfg(board = "teensy36")]
    pub const CURRENT: Board = Board::Teensy36;
    #[cfg(board = "teensylc")]
    pub const CURRENT: Board = Board::TeensyLc;
    #[cfg(board = "teensy40")]
    pub const CURRENT: Board = Board::Teensy40;
    #[cfg(board = "teensy41")]
    pub const CURRENT: Board = Board::Teensy41;
    #[cfg(not(any(
        board = "teensy30",
        board = "teensy31",
        board = "teensy32",
        board = "teensy35",
        board = "teensy36",
        board = "teensylc",
        board = "teensy40",
        board = "teensy41",
    )))]
    pub const CURRENT: Board = Board::Unknown;

    pub const fn name(self) -> &'static str {
        match self {
            Self::Teensy41 => "Teensy 4.1",
            Self::Teensy40 => "Teensy 4.0",
            Self::TeensyLc => "Teensy LC",
            Self::Teensy36 => "Teensy 3.6",
            Self::Teensy35 => "Teensy 3.5",
            Self::Teensy32 => "Teensy 3.2",
            Self::Teensy31 => "Teensy 3.1",
            Self::Teensy30 => "Teensy 3.0",
            Self::Unknown => "Unknown Teensy",
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Self::Teensy40 | Self::Teensy41 => Family::Imxrt,
            _ => Family::Kinetis,
        }
    }

    /// `None` for i.MX RT, and for an unknown board where there is no
    /// flash command to issue.
    pub const fn flash_module(self) -> Option<FlashModule> {
        match self {
            Self::Teensy30 | Self::Teensy31 | Self::Teensy32 | Self::TeensyLc => {
                Some(FlashModule::Ftfl)
            }
            Self::Teensy35 | Self::Teensy36 => Some(FlashModule::Ftfe),
            Self::Teensy40 | Self::Teensy41 | Self::Unknown => None,
        }
    }

    pub const fn uid_width(self) -> Option<UidWidth> {
        match self {
            Self::TeensyLc => Some(UidWidth::Bits80),
            Self::Teensy40 | Self::Teensy41 => None,
            _ => Some(UidWidth::Bits128),
        }
    }

    /// MK66 can run in HSRUN, where flash commands are refused.
    pub const fn has_hsrun(self) -> bool {
        matches!(self, Self::Teensy36)
    }
}

/// Name of the board this crate was built for.
pub fn board_name() -> &'static str {
    Board::CURRENT.name()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Board; 9] = [
        Board::Teensy30,
        Board::Teensy31,
        Board::Teensy32,
        Board::Teensy35,
        Board::Teensy36,
        Board::TeensyLc,
        Board::Teensy40,
        Board::Teensy41,
        Board::Unknown,
    ];

    #[test]
    fn names() {
        assert_eq!(Board::Teensy41.name(), "Teensy 4.1");
        assert_eq!(Board::TeensyLc.name(), "Teensy LC");
        assert_eq!(Board::Teensy30.name(), "Teensy 3.0");
        assert_eq!(Board::Unknown.name(), "Unknown Teensy");
    }

    #[test]
    fn imxrt_has_no_kinetis_sources() {
        for b in ALL.into_iter().filter(|b| b.family() == Family::Imxrt) {
            assert_eq!(b.flash_module(), None);
            assert_eq!(b.uid_width(), None);
            assert!(!b.has_hsrun());
        }
    }

    #[test]
    fn kinetis_layouts() {
        assert_eq!(Board::Teensy32.flash_module(), Some(FlashModule::Ftfl));
        assert_eq!(Board::TeensyLc.flash_module(), Some(FlashModule::Ftfl));
        assert_eq!(Board::Teensy35.flash_module(), Some(FlashModule::Ftfe));
        assert_eq!(Board::TeensyLc.uid_width(), Some(UidWidth::Bits80));
        assert_eq!(Board::Teensy36.uid_width(), Some(UidWidth::Bits128));
        assert!(Board::Teensy36.has_hsrun());
        assert!(!Board::Teensy35.has_hsrun());
    }

    #[test]
    fn unknown_falls_back_to_kinetis() {
        assert_eq!(Board::Unknown.family(), Family::Kinetis);
        assert_eq!(Board::Unknown.flash_module(), None);
        assert_eq!(Board::Unknown.uid_width(), Some(UidWidth::Bits128));
    }

    #[test]
    fn current_matches_name() {
        assert_eq!(board_name(), Board::CURRENT.name());
    }
}
