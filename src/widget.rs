//! The tab widget: one active index, one mutator, weak focus handles.
//!
//! `active_index` is the single source of truth for which tab and panel are
//! shown. It is written only by [`TabsWidget::select_tab`]; keyboard
//! navigation computes a target and goes through the same path.

use std::rc::Rc;

use crossterm::event::KeyCode;
use tracing::{debug, trace, warn};

use crate::focus::{FocusHandles, TabButton};
use crate::nav::{NavKey, key_name};
use crate::types::{Tab, TabSet};

/// What happened to a key delivered to a tab button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Navigation key: default action suppressed, `target` is now active.
    /// `focused` is the button that received focus, None when no live
    /// button exists for the target (nothing rendered yet).
    Consumed {
        target: usize,
        focused: Option<usize>,
    },
    /// Not a navigation key. Nothing changed; the caller applies its
    /// default handling.
    Propagate,
}

impl KeyOutcome {
    pub fn default_prevented(&self) -> bool {
        matches!(self, KeyOutcome::Consumed { .. })
    }
}

/// Accessible tab strip plus one content panel.
#[derive(Debug)]
pub struct TabsWidget {
    tabs: TabSet,
    active_index: usize,
    focus_handles: FocusHandles,
}

impl TabsWidget {
    /// Mount a widget with the first tab active and no rendered buttons.
    pub fn new(tabs: TabSet) -> Self {
        let focus_handles = FocusHandles::with_len(tabs.len());
        TabsWidget {
            tabs,
            active_index: 0,
            focus_handles,
        }
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_index
    }

    /// The tab whose content the panel shows.
    pub fn active_tab(&self) -> &Tab {
        &self.tabs.as_slice()[self.active_index]
    }

    /// Make `index` the active tab.
    ///
    /// Callers pass indices taken from the tab set itself. An out-of-range
    /// index is logged and dropped so the active index never leaves range.
    pub fn select_tab(&mut self, index: usize) {
        if index >= self.tabs.len() {
            warn!(index, len = self.tabs.len(), "ignoring out-of-range tab selection");
            return;
        }
        if index != self.active_index {
            debug!(from = self.active_index, to = index, "tab selected");
        }
        self.active_index = index;
    }

    /// Handle a key pressed while the button at `current_index` has focus.
    ///
    /// ArrowRight/ArrowLeft step with wrap-around, Home/End jump to the ends.
    /// On those keys the target becomes active and focus moves to its button.
    /// Every other key is a no-op returning [`KeyOutcome::Propagate`].
    pub fn handle_key_navigation(&mut self, key: KeyCode, current_index: usize) -> KeyOutcome {
        let Some(nav) = NavKey::lookup(key) else {
            trace!(key = %key_name(key), "key not handled by tab strip");
            return KeyOutcome::Propagate;
        };

        let target = nav.target_index(current_index, self.tabs.len());
        self.select_tab(target);

        let focused = self.focus_handles.get(target).map(|button| button.index);
        debug!(?nav, current_index, target, ?focused, "tab navigation");

        KeyOutcome::Consumed { target, focused }
    }

    /// Point the focus handles at the buttons of the frame just rendered.
    pub fn attach_buttons(&mut self, buttons: &[Rc<TabButton>]) {
        self.focus_handles.rebuild(buttons);
    }

    /// Drop all focus handles, e.g. when the strip is hidden.
    pub fn detach_buttons(&mut self) {
        self.focus_handles.invalidate();
    }

    /// Live handle for the button at `index`.
    pub fn focus_handle(&self, index: usize) -> Option<Rc<TabButton>> {
        self.focus_handles.get(index)
    }
}

impl Default for TabsWidget {
    fn default() -> Self {
        TabsWidget::new(TabSet::user_options())
    }
}

// ============================================================================
// TESTS
// ============================================================================
