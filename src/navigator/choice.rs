//! Interpretation of one line typed at a menu prompt.

use std::num::IntErrorKind;

/// Hidden choice that opens the shell escape from the root menu
pub const SHELL_SHORTCUT: i64 = 99;

/// What a line typed at a menu with `child_count` entries means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Descend into the child at this zero-based index
    Child(usize),
    /// Leave this menu (the entry listed after the last child)
    Back,
    /// Open the shell escape; only produced at the root
    Shell,
    /// Not an integer
    NotANumber,
    /// An integer that matches no entry
    OutOfRange,
}

/// Map operator input to a [`Choice`].
///
/// `Back` is checked before the shell shortcut, so a root menu with 98
/// children treats `99` as Back.
pub fn parse_choice(input: &str, child_count: usize, at_root: bool) -> Choice {
    let value = match input.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Choice::OutOfRange;
        }
        Err(_) => return Choice::NotANumber,
    };

    let count = i64::try_from(child_count).unwrap_or(i64::MAX - 1);
    if value == count + 1 {
        Choice::Back
    } else if value == SHELL_SHORTCUT && at_root {
        Choice::Shell
    } else if (1..=count).contains(&value) {
        Choice::Child((value - 1) as usize)
    } else {
        Choice::OutOfRange
    }
}
