//! Event dispatch: widget first, page defaults second.
//!
//! A key reaches the tab strip only while a tab button has focus. Whatever
//! the strip does not consume falls through to [`map_default_key`], which
//! plays the part of the browser's default actions. Fully testable without
//! a terminal.

use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::focus::{TabButton, hit_test};
use crate::widget::KeyOutcome;

use super::state::{Action, App, AppEvent, Focus, Transition};

/// Handle one event against the buttons of the last rendered frame.
pub fn handle_event(app: &mut App, event: AppEvent, buttons: &[Rc<TabButton>]) -> Transition {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse, buttons),
        AppEvent::Resize => Transition::Continue,
    }
}

/// What one key press did: the focused button's verdict and the page's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDispatch {
    pub outcome: KeyOutcome,
    pub transition: Transition,
}

/// Deliver a key to the focused element, then to the page.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Transition {
    dispatch_key(app, key).transition
}

/// [`handle_key`], also reporting whether the tab strip consumed the key.
pub fn dispatch_key(app: &mut App, key: KeyEvent) -> KeyDispatch {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyDispatch {
            outcome: KeyOutcome::Propagate,
            transition: Transition::Quit,
        };
    }

    if let Some(current) = app.focus.tab_index() {
        let outcome = app.widget.handle_key_navigation(key.code, current);
        if let KeyOutcome::Consumed { focused, .. } = outcome {
            if let Some(index) = focused {
                app.focus = Focus::Tab(index);
            }
            return KeyDispatch {
                outcome,
                transition: Transition::Continue,
            };
        }
    }

    let transition = match map_default_key(key) {
        Some(action) => apply_action(app, action),
        None => Transition::Continue,
    };
    KeyDispatch {
        outcome: KeyOutcome::Propagate,
        transition,
    }
}

/// Map an unconsumed key to the page's default action.
///
/// Returns None for keys with no default action.
pub fn map_default_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Action::FocusPrevious),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrevious),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn apply_action(app: &mut App, action: Action) -> Transition {
    let active = app.widget.active_index();
    match action {
        Action::FocusNext => {
            app.focus = app.focus.next_sequential(active);
            debug!(focus = ?app.focus, "focus moved forward");
            Transition::Continue
        }
        Action::FocusPrevious => {
            app.focus = app.focus.previous_sequential(active);
            debug!(focus = ?app.focus, "focus moved back");
            Transition::Continue
        }
        Action::Activate => {
            // Buttons turn Enter/Space into a click; the panel has no action.
            if let Some(index) = app.focus.tab_index() {
                app.widget.select_tab(index);
            }
            Transition::Continue
        }
        Action::Quit => Transition::Quit,
    }
}

/// Left-button presses on a tab button select it and focus it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, buttons: &[Rc<TabButton>]) -> Transition {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        handle_click(app, hit_test(buttons, mouse.column, mouse.row));
    }
    Transition::Continue
}

/// Pointer activation of the tab at `hit`. Misses are ignored.
pub fn handle_click(app: &mut App, hit: Option<usize>) {
    if let Some(index) = hit {
        app.widget.select_tab(index);
        app.focus = Focus::Tab(index);
    }
}

// ============================================================================
// TESTS
// ============================================================================
