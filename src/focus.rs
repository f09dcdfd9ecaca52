//! Rendered tab buttons and the weak handle table used to focus them.
//!
//! The view produces a fresh `Rc<TabButton>` per tab on every frame and the
//! event loop owns those for exactly one frame. The widget only ever holds
//! `Weak` references, so a handle from an old frame stops upgrading as soon
//! as that frame is dropped.

use std::rc::{Rc, Weak};

use ratatui::layout::{Position, Rect};

/// One tab button as laid out in the last rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    /// Position of the tab in its set.
    pub index: usize,
    /// Screen cells the button occupies.
    pub area: Rect,
}

impl TabButton {
    pub fn new(index: usize, area: Rect) -> Self {
        TabButton { index, area }
    }

    /// Whether a pointer at (column, row) lands on this button.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// Find the button under the pointer.
pub fn hit_test(buttons: &[Rc<TabButton>], column: u16, row: u16) -> Option<usize> {
    buttons
        .iter()
        .find(|button| button.contains(column, row))
        .map(|button| button.index)
}

/// Non-owning table of rendered buttons, indexed by tab position.
#[derive(Debug, Default)]
pub struct FocusHandles {
    slots: Vec<Option<Weak<TabButton>>>,
}

impl FocusHandles {
    /// Empty table with one slot per tab.
    pub fn with_len(len: usize) -> Self {
        FocusHandles {
            slots: vec![None; len],
        }
    }

    /// Replace every slot with handles to the buttons of a new frame.
    ///
    /// Slots for tabs missing from `buttons` (e.g. clipped by a narrow
    /// terminal) are cleared rather than left pointing at an older frame.
    pub fn rebuild(&mut self, buttons: &[Rc<TabButton>]) {
        self.invalidate();
        for button in buttons {
            if let Some(slot) = self.slots.get_mut(button.index) {
                *slot = Some(Rc::downgrade(button));
            }
        }
    }

    /// Drop every handle.
    pub fn invalidate(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// The live button at `index`, if its frame is still alive.
    pub fn get(&self, index: usize) -> Option<Rc<TabButton>> {
        self.slots.get(index)?.as_ref()?.upgrade()
    }

    /// Number of slots whose button is still alive.
    pub fn live_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.as_ref().is_some_and(|weak| weak.strong_count() > 0))
            .count()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_of(n: usize) -> Vec<Rc<TabButton>> {
        (0..n)
            .map(|i| Rc::new(TabButton::new(i, Rect::new(i as u16 * 10, 0, 8, 1))))
            .collect()
    }

    #[test]
    fn empty_table_has_no_live_handles() {
        let handles = FocusHandles::with_len(3);
        assert_eq!(handles.live_count(), 0);
        assert!(handles.get(0).is_none());
    }

    #[test]
    fn rebuild_points_at_current_frame() {
        let frame = frame_of(3);
        let mut handles = FocusHandles::with_len(3);
        handles.rebuild(&frame);
        assert_eq!(handles.live_count(), 3);
        assert_eq!(handles.get(2).map(|b| b.index), Some(2));
    }

    #[test]
    fn handles_do_not_keep_a_dropped_frame_alive() {
        let mut handles = FocusHandles::with_len(3);
        {
            let frame = frame_of(3);
            handles.rebuild(&frame);
        }
        assert_eq!(handles.live_count(), 0);
        assert!(handles.get(1).is_none());
    }

    #[test]
    fn rebuild_clears_slots_missing_from_new_frame() {
        let first = frame_of(3);
        let mut handles = FocusHandles::with_len(3);
        handles.rebuild(&first);

        let clipped = frame_of(2);
        handles.rebuild(&clipped);
        assert!(handles.get(2).is_none(), "slot 2 must not point at the older frame");
        assert_eq!(handles.live_count(), 2);
    }

    #[test]
    fn out_of_range_button_is_ignored() {
        let stray = vec![Rc::new(TabButton::new(9, Rect::new(0, 0, 1, 1)))];
        let mut handles = FocusHandles::with_len(3);
        handles.rebuild(&stray);
        assert_eq!(handles.live_count(), 0);
    }

    #[test]
    fn hit_test_finds_button_under_pointer() {
        let frame = frame_of(3);
        assert_eq!(hit_test(&frame, 0, 0), Some(0));
        assert_eq!(hit_test(&frame, 12, 0), Some(1));
        assert_eq!(hit_test(&frame, 9, 0), None, "gap between buttons");
        assert_eq!(hit_test(&frame, 12, 1), None, "below the strip");
    }
}
