// SPDX-License-Identifier: MIT OR Apache-2.0
/*
 * Copyright (c) 2025 Code Construct
 */

//! Board feature selection, shared with `build.rs`.

pub const BOARDS: &[&str] = &[
    "teensy30", "teensy31", "teensy32", "teensy35", "teensy36", "teensylc",
    "teensy40", "teensy41",
];

/// Picks the one enabled board, `None` if there is none.
///
/// Errors with the enabled boards when more than one is set.
pub fn select(
    enabled: impl Fn(&str) -> bool,
) -> Result<Option<&'static str>, Vec<&'static str>> {
    let selected = BOARDS
        .iter()
        .copied()
        .filter(|b| enabled(b))
        .collect::<Vec<_>>();

    match selected.as_slice() {
        [] => Ok(None),
        [board] => Ok(Some(*board)),
        _ => Err(selected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_board() {
        assert_eq!(select(|_| false), Ok(None));
    }

    #[test]
    fn single_board() {
        assert_eq!(select(|b| b == "teensylc"), Ok(Some("teensylc")));
    }

    #[test]
    fn several_boards_rejected() {
        let r = select(|b| b == "teensy36" || b == "teensy41");
        assert_eq!(r, Err(vec!["teensy36", "teensy41"]));
    }
}
