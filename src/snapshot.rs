//! Headless replay: feed a list of events to a fresh page, report the result.
//!
//! Events go through the same dispatch as the interactive session, against
//! buttons laid out for a fixed-size virtual screen, so focus handles are
//! live exactly as they would be after a real draw.

use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use serde::Serialize;
use tracing::debug;

use crate::a11y::{AccessibilityTree, accessibility_tree, panel_element_id, tab_element_id};
use crate::error::EventParseError;
use crate::focus::TabButton;
use crate::nav::{key_name, parse_key_name};
use crate::tui::state::{App, AppEvent, Focus, Transition};
use crate::tui::update::{dispatch_key, handle_event};
use crate::tui::view::tab_buttons;
use crate::types::{OutputFormat, TabSet};

/// Size of the virtual screen buttons are laid out on.
const VIRTUAL_SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 24,
};

// ============================================================================
// EVENTS
// ============================================================================

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotEvent {
    /// Key press delivered to the focused element.
    Key(KeyCode),
    /// Pointer click on the button of tab N.
    Click(usize),
    /// Programmatic focus on the button of tab N, without selecting it.
    Focus(usize),
}

impl SnapshotEvent {
    fn describe(&self) -> String {
        match self {
            SnapshotEvent::Key(code) => key_name(*code),
            SnapshotEvent::Click(index) => format!("click:{index}"),
            SnapshotEvent::Focus(index) => format!("focus:{index}"),
        }
    }
}

/// Parse a comma-separated event list such as `ArrowLeft,click:1,End`.
///
/// # Errors
///
/// Empty entries, unknown key names, and tab indices that are not numbers
/// or not below `len`.
pub fn parse_events(list: &str, len: usize) -> Result<Vec<SnapshotEvent>, EventParseError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',')
        .map(|raw| parse_event(raw.trim(), len))
        .collect()
}

fn parse_event(raw: &str, len: usize) -> Result<SnapshotEvent, EventParseError> {
    if raw.is_empty() {
        return Err(EventParseError::Empty);
    }
    if let Some(index) = raw.strip_prefix("click:") {
        return parse_index(index, len).map(SnapshotEvent::Click);
    }
    if let Some(index) = raw.strip_prefix("focus:") {
        return parse_index(index, len).map(SnapshotEvent::Focus);
    }
    parse_key_name(raw)
        .map(SnapshotEvent::Key)
        .ok_or_else(|| EventParseError::UnknownKey(raw.to_string()))
}

fn parse_index(raw: &str, len: usize) -> Result<usize, EventParseError> {
    let index: usize = raw
        .parse()
        .map_err(|_| EventParseError::BadIndex(raw.to_string()))?;
    if index >= len {
        return Err(EventParseError::OutOfRange { index, len });
    }
    Ok(index)
}

// ============================================================================
// REPLAY
// ============================================================================

/// State after one replayed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub event: String,
    /// True when the tab strip consumed the key (default action suppressed).
    pub default_prevented: bool,
    pub active_index: usize,
    /// Id of the focused element, or `none`.
    pub focus: String,
}

/// Result of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub trace: Vec<TraceEntry>,
    /// True when an event (`q`, `Escape`) ended the session early.
    pub quit: bool,
    pub tree: AccessibilityTree,
}

fn focus_id(focus: Focus, active: usize) -> String {
    match focus {
        Focus::Outside => "none".to_string(),
        Focus::Tab(index) => tab_element_id(index),
        Focus::Panel => panel_element_id(active),
    }
}

/// Replay `events` against a freshly mounted widget.
pub fn replay(tabs: TabSet, events: &[SnapshotEvent]) -> Snapshot {
    let mut app = App::new(tabs);
    let mut trace = Vec::with_capacity(events.len());
    let mut quit = false;

    for event in events {
        // Rebuild the handle table from a fresh layout, as a draw would.
        let buttons = tab_buttons(app.widget.tabs(), VIRTUAL_SCREEN);
        app.widget.attach_buttons(&buttons);

        let (default_prevented, transition) = apply(&mut app, *event, &buttons);
        let active = app.widget.active_index();
        debug!(event = %event.describe(), default_prevented, active, "replayed event");

        trace.push(TraceEntry {
            event: event.describe(),
            default_prevented,
            active_index: active,
            focus: focus_id(app.focus, active),
        });

        if transition == Transition::Quit {
            quit = true;
            break;
        }
    }

    Snapshot {
        trace,
        quit,
        tree: accessibility_tree(&app.widget),
    }
}

fn apply(app: &mut App, event: SnapshotEvent, buttons: &[Rc<TabButton>]) -> (bool, Transition) {
    match event {
        SnapshotEvent::Key(code) => {
            let dispatch = dispatch_key(app, KeyEvent::new(code, KeyModifiers::NONE));
            (dispatch.outcome.default_prevented(), dispatch.transition)
        }
        SnapshotEvent::Click(index) => {
            // Click the button's first cell; a clipped-away button is a miss.
            let Some(button) = buttons.iter().find(|b| b.index == index) else {
                return (false, Transition::Continue);
            };
            let mouse = MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: button.area.x,
                row: button.area.y,
                modifiers: KeyModifiers::NONE,
            };
            (false, handle_event(app, AppEvent::Mouse(mouse), buttons))
        }
        SnapshotEvent::Focus(index) => {
            if app.widget.focus_handle(index).is_some() {
                app.focus = Focus::Tab(index);
            }
            (false, Transition::Continue)
        }
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a snapshot for output.
///
/// # Errors
///
/// Only the JSON format can fail, on serialization.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(format_human(snapshot)),
        OutputFormat::Json => serde_json::to_string_pretty(snapshot),
    }
}

fn format_human(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    if !snapshot.trace.is_empty() {
        out.push_str("=== Events ===\n");
        for entry in &snapshot.trace {
            out.push_str(&format!(
                "  {:<12} {:<10} active={}  focus={}\n",
                entry.event,
                if entry.default_prevented { "prevented" } else { "default" },
                entry.active_index,
                entry.focus
            ));
        }
        if snapshot.quit {
            out.push_str("  (session quit)\n");
        }
        out.push('\n');
    }

    out.push_str("=== Accessibility tree ===\n");
    out.push_str(&snapshot.tree.to_markup());
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn run(list: &str) -> Snapshot {
        let tabs = TabSet::user_options();
        let events = parse_events(list, tabs.len()).unwrap();
        replay(tabs, &events)
    }

    #[test]
    fn parses_mixed_event_list() {
        let events = parse_events("ArrowLeft, click:1 ,End,x", 3).unwrap();
        assert_eq!(
            events,
            vec![
                SnapshotEvent::Key(KeyCode::Left),
                SnapshotEvent::Click(1),
                SnapshotEvent::Key(KeyCode::End),
                SnapshotEvent::Key(KeyCode::Char('x')),
            ]
        );
    }

    #[test]
    fn empty_list_means_no_events() {
        assert!(parse_events("  ", 3).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_events() {
        assert_eq!(parse_events("Home,,End", 3), Err(EventParseError::Empty));
        assert_eq!(
            parse_events("click:two", 3),
            Err(EventParseError::BadIndex("two".into()))
        );
        assert_eq!(
            parse_events("focus:3", 3),
            Err(EventParseError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            parse_events("Hyper", 3),
            Err(EventParseError::UnknownKey("Hyper".into()))
        );
    }

    #[test]
    fn no_events_shows_first_tab() {
        let snapshot = run("");
        assert!(snapshot.trace.is_empty());
        assert_eq!(snapshot.tree.panel.content, "Información de perfil");
    }

    #[test]
    fn arrow_left_wraps_and_moves_focus() {
        let snapshot = run("ArrowLeft");
        let entry = &snapshot.trace[0];
        assert!(entry.default_prevented);
        assert_eq!(entry.active_index, 2);
        assert_eq!(entry.focus, "tab-2");
        assert_eq!(snapshot.tree.panel.content, "Preferencias de notificaciones");
    }

    #[test]
    fn end_then_arrow_right_wraps_to_first() {
        let snapshot = run("End,ArrowRight");
        assert_eq!(snapshot.trace[0].active_index, 2);
        assert_eq!(snapshot.trace[1].active_index, 0);
        assert_eq!(snapshot.trace[1].focus, "tab-0");
    }

    #[test]
    fn click_selects_tab() {
        let snapshot = run("click:1");
        assert_eq!(snapshot.trace[0].active_index, 1);
        assert!(!snapshot.trace[0].default_prevented);
        assert!(snapshot.tree.tablist.tabs[1].aria_selected);
    }

    #[test]
    fn unknown_key_is_not_prevented() {
        let snapshot = run("click:1,x");
        let entry = &snapshot.trace[1];
        assert!(!entry.default_prevented);
        assert_eq!(entry.active_index, 1);
    }

    #[test]
    fn navigation_uses_focused_button_index() {
        // Focus tab 2 without selecting it, then step right from there.
        let snapshot = run("focus:2,ArrowRight");
        assert_eq!(snapshot.trace[0].active_index, 0);
        assert_eq!(snapshot.trace[0].focus, "tab-2");
        assert_eq!(snapshot.trace[1].active_index, 0);
        assert_eq!(snapshot.trace[1].focus, "tab-0");
    }

    #[test]
    fn tab_key_moves_focus_to_panel() {
        let snapshot = run("End,Tab,ArrowLeft");
        assert_eq!(snapshot.trace[1].focus, "panel-2");
        assert!(!snapshot.trace[2].default_prevented, "panel ignores arrows");
        assert_eq!(snapshot.trace[2].active_index, 2);
    }

    #[test]
    fn quit_stops_replay() {
        let snapshot = run("ArrowRight,q,ArrowRight");
        assert!(snapshot.quit);
        assert_eq!(snapshot.trace.len(), 2);
        assert_eq!(snapshot.tree.panel.content, "Opciones de configuración");
    }

    #[test]
    fn human_format_lists_events_and_markup() {
        let out = format_snapshot(&run("Home,x"), OutputFormat::Human).unwrap();
        assert!(out.contains("=== Events ==="));
        assert!(out.contains("prevented"));
        assert!(out.contains("default"));
        assert!(out.contains("<div role=\"tablist\" aria-label=\"opciones de usuario\">"));
    }

    #[test]
    fn json_format_round_trips_through_value() {
        let out = format_snapshot(&run("End"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["trace"][0]["active_index"], 2);
        assert_eq!(value["tree"]["panel"]["id"], "panel-2");
        assert_eq!(value["quit"], false);
    }
}
