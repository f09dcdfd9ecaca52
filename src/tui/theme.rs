//! TUI style constants.
//!
//! Bold marks the selected tab (the visual weight cue), reversed video marks
//! keyboard focus, cyan marks interactive chrome.

use ratatui::style::{Color, Modifier, Style};

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Unselected tab button.
pub const STYLE_TAB: Style = Style::new().fg(Color::Gray);

/// Selected tab button.
pub const STYLE_TAB_SELECTED: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Added on top of a tab style while the button has keyboard focus.
pub const STYLE_FOCUS_RING: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Border of an unfocused container.
pub const STYLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Border of the container holding focus.
pub const STYLE_BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Panel content.
pub const STYLE_CONTENT: Style = Style::new().fg(Color::White);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_tab_is_bold_and_plain_tab_is_not() {
        assert!(STYLE_TAB_SELECTED.add_modifier.contains(Modifier::BOLD));
        assert!(!STYLE_TAB.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn focus_ring_is_reversed() {
        assert!(STYLE_FOCUS_RING.add_modifier.contains(Modifier::REVERSED));
    }
}
