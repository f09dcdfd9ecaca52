//! TUI state: the page around the widget.
//!
//! The widget owns which tab is active. The page owns where keyboard focus
//! is, because focus can leave the tab strip (Tab key to the panel) while
//! the active tab stays put.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::types::TabSet;
use crate::widget::TabsWidget;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized; the next draw lays the buttons out again.
    Resize,
}

// ============================================================================
// FOCUS
// ============================================================================

/// Which element has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Nothing on the page is focused.
    #[default]
    Outside,
    /// The tab button at this index.
    Tab(usize),
    /// The content panel.
    Panel,
}

impl Focus {
    /// Next stop of sequential (Tab-key) navigation.
    ///
    /// Only `tabindex="0"` elements are stops: the active tab button and the
    /// panel. Past the panel focus leaves the page, then wraps around.
    pub fn next_sequential(self, active: usize) -> Self {
        match self {
            Focus::Outside => Focus::Tab(active),
            Focus::Tab(_) => Focus::Panel,
            Focus::Panel => Focus::Outside,
        }
    }

    /// Shift+Tab counterpart of [`Focus::next_sequential`].
    pub fn previous_sequential(self, active: usize) -> Self {
        match self {
            Focus::Outside => Focus::Panel,
            Focus::Tab(_) => Focus::Outside,
            Focus::Panel => Focus::Tab(active),
        }
    }

    pub fn tab_index(self) -> Option<usize> {
        match self {
            Focus::Tab(index) => Some(index),
            _ => None,
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub widget: TabsWidget,
    pub focus: Focus,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Page with the tab strip focused on its first tab, so arrow keys work
    /// from the first keypress.
    pub fn new(tabs: TabSet) -> Self {
        App {
            widget: TabsWidget::new(tabs),
            focus: Focus::Tab(0),
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(TabSet::user_options())
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Page-level default behaviour for keys the tab strip did not consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Tab: next sequential focus stop.
    FocusNext,
    /// Shift+Tab: previous sequential focus stop.
    FocusPrevious,
    /// Enter / Space: activate the focused button.
    Activate,
    Quit,
}

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running and redraw.
    Continue,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_on_first_tab_with_focus() {
        let app = App::default();
        assert_eq!(app.widget.active_index(), 0);
        assert_eq!(app.focus, Focus::Tab(0));
        assert!(!app.should_quit);
    }

    #[test]
    fn sequential_focus_visits_active_tab_then_panel() {
        let mut focus = Focus::Outside;
        focus = focus.next_sequential(2);
        assert_eq!(focus, Focus::Tab(2));
        focus = focus.next_sequential(2);
        assert_eq!(focus, Focus::Panel);
        focus = focus.next_sequential(2);
        assert_eq!(focus, Focus::Outside);
    }

    #[test]
    fn previous_sequential_reverses_next() {
        for focus in [Focus::Outside, Focus::Tab(1), Focus::Panel] {
            assert_eq!(focus.next_sequential(1).previous_sequential(1), focus);
        }
    }

    #[test]
    fn focus_default_is_outside() {
        assert_eq!(Focus::default(), Focus::Outside);
        assert_eq!(Focus::Outside.tab_index(), None);
        assert_eq!(Focus::Tab(2).tab_index(), Some(2));
    }
}
