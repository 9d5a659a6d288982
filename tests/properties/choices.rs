//! Property tests for menu choice parsing.

use proptest::prelude::*;

use magnascale::navigator::{parse_choice, Choice, SHELL_SHORTCUT};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary input never panics and only root menus yield the shell.
    #[test]
    fn property_parse_choice_never_panics(input in ".{0,24}", count in 0usize..200, at_root in any::<bool>()) {
        let choice = parse_choice(&input, count, at_root);
        if choice == Choice::Shell {
            prop_assert!(at_root);
        }
        if let Choice::Child(index) = choice {
            prop_assert!(index < count);
        }
    }

    /// PROPERTY: every listed number maps to exactly the entry shown next to it.
    /// (Menus with 99 or more entries shadow one of them at the root.)
    #[test]
    fn property_listed_numbers_select_their_entry(count in 1usize..99, at_root in any::<bool>()) {
        for n in 1..=count {
            prop_assert_eq!(parse_choice(&n.to_string(), count, at_root), Choice::Child(n - 1));
        }
        prop_assert_eq!(parse_choice(&(count + 1).to_string(), count, at_root), Choice::Back);
    }

    /// PROPERTY: the shell shortcut works at the root unless it is a listed entry.
    #[test]
    fn property_shortcut_only_when_unlisted(count in 0usize..97) {
        let shortcut = SHELL_SHORTCUT.to_string();
        prop_assert_eq!(parse_choice(&shortcut, count, true), Choice::Shell);
        prop_assert_eq!(parse_choice(&shortcut, count, false), Choice::OutOfRange);
    }
}
