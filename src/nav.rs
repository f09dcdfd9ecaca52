//! Keyboard navigation: which keys move between tabs, and where to.
//!
//! The key set is closed. [`NavKey::lookup`] is a table scan over the four
//! navigation keys; everything else falls out as `None` and is left for the
//! caller's default handling.

use crossterm::event::KeyCode;

/// A key the tab strip reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowRight: next tab, wrapping to the first.
    Next,
    /// ArrowLeft: previous tab, wrapping to the last.
    Previous,
    /// Home: first tab.
    First,
    /// End: last tab.
    Last,
}

const NAV_KEYS: [(KeyCode, NavKey); 4] = [
    (KeyCode::Right, NavKey::Next),
    (KeyCode::Left, NavKey::Previous),
    (KeyCode::Home, NavKey::First),
    (KeyCode::End, NavKey::Last),
];

impl NavKey {
    /// Map a key code to a navigation key. Unlisted keys are `None`.
    pub fn lookup(code: KeyCode) -> Option<NavKey> {
        NAV_KEYS
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, nav)| *nav)
    }

    /// Target tab index for this key from `current` in a strip of `len` tabs.
    ///
    /// `len` must be non-zero; the result is always in `[0, len)`.
    pub fn target_index(self, current: usize, len: usize) -> usize {
        let last = len.saturating_sub(1);
        match self {
            NavKey::Next => {
                if current < last {
                    current + 1
                } else {
                    0
                }
            }
            NavKey::Previous => {
                if current > 0 {
                    (current - 1).min(last)
                } else {
                    last
                }
            }
            NavKey::First => 0,
            NavKey::Last => last,
        }
    }
}

// ============================================================================
// KEY NAMES
// ============================================================================

/// Parse a DOM-style key name (`ArrowRight`, `Home`, `a`, ...) into a key code.
///
/// Single characters map to `KeyCode::Char`. Returns None for unknown
/// multi-character names.
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let code = match name {
        "ArrowRight" => KeyCode::Right,
        "ArrowLeft" => KeyCode::Left,
        "ArrowUp" => KeyCode::Up,
        "ArrowDown" => KeyCode::Down,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Esc,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        "Space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Inverse of [`parse_key_name`] for display in logs and snapshot traces.
pub fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Right => "ArrowRight".into(),
        KeyCode::Left => "ArrowLeft".into(),
        KeyCode::Up => "ArrowUp".into(),
        KeyCode::Down => "ArrowDown".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Escape".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "Shift+Tab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Delete => "Delete".into(),
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}"),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_four_keys_are_navigation_keys() {
        assert_eq!(NavKey::lookup(KeyCode::Right), Some(NavKey::Next));
        assert_eq!(NavKey::lookup(KeyCode::Left), Some(NavKey::Previous));
        assert_eq!(NavKey::lookup(KeyCode::Home), Some(NavKey::First));
        assert_eq!(NavKey::lookup(KeyCode::End), Some(NavKey::Last));

        for other in [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Tab,
            KeyCode::Esc,
            KeyCode::Char('a'),
            KeyCode::Char(' '),
        ] {
            assert_eq!(NavKey::lookup(other), None, "{other:?} should not navigate");
        }
    }

    #[test]
    fn next_wraps_past_last() {
        assert_eq!(NavKey::Next.target_index(0, 3), 1);
        assert_eq!(NavKey::Next.target_index(1, 3), 2);
        assert_eq!(NavKey::Next.target_index(2, 3), 0);
    }

    #[test]
    fn previous_wraps_before_first() {
        assert_eq!(NavKey::Previous.target_index(2, 3), 1);
        assert_eq!(NavKey::Previous.target_index(1, 3), 0);
        assert_eq!(NavKey::Previous.target_index(0, 3), 2);
    }

    #[test]
    fn home_and_end_ignore_current() {
        for current in 0..3 {
            assert_eq!(NavKey::First.target_index(current, 3), 0);
            assert_eq!(NavKey::Last.target_index(current, 3), 2);
        }
    }

    #[test]
    fn single_tab_strip_always_lands_on_zero() {
        for key in [NavKey::Next, NavKey::Previous, NavKey::First, NavKey::Last] {
            assert_eq!(key.target_index(0, 1), 0);
        }
    }

    #[test]
    fn targets_stay_in_range() {
        for len in 1..6 {
            for current in 0..len {
                for key in [NavKey::Next, NavKey::Previous, NavKey::First, NavKey::Last] {
                    assert!(key.target_index(current, len) < len);
                }
            }
        }
    }

    #[test]
    fn key_names_parse() {
        assert_eq!(parse_key_name("ArrowRight"), Some(KeyCode::Right));
        assert_eq!(parse_key_name("Home"), Some(KeyCode::Home));
        assert_eq!(parse_key_name("x"), Some(KeyCode::Char('x')));
        assert_eq!(parse_key_name("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key_name("Hyper"), None);
    }

    #[test]
    fn key_name_inverts_parse() {
        for name in ["ArrowLeft", "End", "Enter", "Escape", "Tab", "q", "Space"] {
            let code = parse_key_name(name).unwrap();
            assert_eq!(key_name(code), name);
        }
    }
}
