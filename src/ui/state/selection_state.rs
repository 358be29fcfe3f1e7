//! # Selection State Module
//!
//! Drag-to-select date range state machine.
//!
//! ## States:
//! Idle → (pointer down on a day) → Dragging → (pointer up) → Selected →
//! (Escape) → Idle. While dragging, the active endpoint follows the pointer
//! and the range is continuously recomputed.
//!
//! The two endpoints are order-independent; `range()` normalizes them to
//! (min, max). Endpoints may lie outside the currently visible month window:
//! the counts stay valid, only the visible intersection gets highlighted.

use chrono::NaiveDate;

use crate::calendar::spanned_iso_weeks;

/// Phase of the drag-to-select state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// No selection
    #[default]
    Idle,
    /// Pointer held down, active endpoint follows the pointer
    Dragging,
    /// Range frozen after pointer release, still displayed
    Selected,
}

/// What a press of Escape should do, decided by the selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeAction {
    /// A selection was active and has been cleared; window stays visible
    ClearedSelection,
    /// No selection was active; the shell should hide the window
    HideWindow,
}

/// Drag-to-select state: phase plus the two range endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    pub phase: SelectionPhase,
    /// Day the drag started on
    pub anchor: Option<NaiveDate>,
    /// Day the pointer is currently over (or ended on)
    pub active: Option<NaiveDate>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no selection exists in any phase
    pub fn is_empty(&self) -> bool {
        self.anchor.is_none()
    }

    /// Pointer-down on a day cell: start dragging with a single-day range
    pub fn begin_drag(&mut self, day: NaiveDate) {
        self.phase = SelectionPhase::Dragging;
        self.anchor = Some(day);
        self.active = Some(day);
    }

    /// Pointer-move over a day cell while dragging: update the active endpoint
    pub fn drag_over(&mut self, day: NaiveDate) {
        if self.phase != SelectionPhase::Dragging {
            return;
        }
        if self.active != Some(day) {
            self.active = Some(day);
        }
    }

    /// Pointer-up: freeze the range
    pub fn end_drag(&mut self) {
        if self.phase == SelectionPhase::Dragging {
            self.phase = SelectionPhase::Selected;
            if let Some((lo, hi)) = self.range() {
                log::info!("🖱️ Selected range {lo} → {hi}");
            }
        }
    }

    /// Drop any selection and return to Idle
    pub fn clear(&mut self) {
        self.phase = SelectionPhase::Idle;
        self.anchor = None;
        self.active = None;
    }

    /// Handle an Escape press: clear first, hide only when already empty
    pub fn handle_escape(&mut self) -> EscapeAction {
        if self.is_empty() {
            EscapeAction::HideWindow
        } else {
            self.clear();
            EscapeAction::ClearedSelection
        }
    }

    /// Normalized (min, max) endpoints of the current range
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let (a, b) = (self.anchor?, self.active?);
        Some((a.min(b), a.max(b)))
    }

    /// True when the day falls inside the current range
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.range().is_some_and(|(lo, hi)| lo <= day && day <= hi)
    }

    /// Inclusive number of days in the range
    pub fn day_count(&self) -> Option<i64> {
        let (lo, hi) = self.range()?;
        Some((hi - lo).num_days() + 1)
    }

    /// Number of distinct ISO (year, week) pairs the range touches
    pub fn week_count(&self) -> Option<i64> {
        let (lo, hi) = self.range()?;
        Some(spanned_iso_weeks(lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_single_day_drag() {
        let mut sel = SelectionState::new();
        sel.begin_drag(d(2024, 3, 15));
        sel.end_drag();
        assert_eq!(sel.phase, SelectionPhase::Selected);
        assert_eq!(sel.day_count(), Some(1));
        assert_eq!(sel.week_count(), Some(1));
    }

    #[test]
    fn test_full_iso_week_drag() {
        // 2024-01-01 is a Monday, 2024-01-07 the following Sunday
        let mut sel = SelectionState::new();
        sel.begin_drag(d(2024, 1, 1));
        sel.drag_over(d(2024, 1, 7));
        sel.end_drag();
        assert_eq!(sel.day_count(), Some(7));
        assert_eq!(sel.week_count(), Some(1));
    }

    #[test]
    fn test_backwards_drag_normalizes() {
        let mut sel = SelectionState::new();
        sel.begin_drag(d(2024, 3, 20));
        sel.drag_over(d(2024, 3, 10));
        assert_eq!(sel.range(), Some((d(2024, 3, 10), d(2024, 3, 20))));
        assert_eq!(sel.day_count(), Some(11));
    }

    #[test]
    fn test_drag_over_ignored_when_not_dragging() {
        let mut sel = SelectionState::new();
        sel.drag_over(d(2024, 3, 10));
        assert!(sel.is_empty());

        sel.begin_drag(d(2024, 3, 1));
        sel.end_drag();
        sel.drag_over(d(2024, 3, 10));
        assert_eq!(sel.range(), Some((d(2024, 3, 1), d(2024, 3, 1))));
    }

    #[test]
    fn test_contains() {
        let mut sel = SelectionState::new();
        sel.begin_drag(d(2024, 3, 10));
        sel.drag_over(d(2024, 3, 12));
        assert!(sel.contains(d(2024, 3, 11)));
        assert!(!sel.contains(d(2024, 3, 13)));
    }

    #[test]
    fn test_escape_clears_then_hides() {
        let mut sel = SelectionState::new();
        sel.begin_drag(d(2024, 3, 10));
        sel.end_drag();

        // First Escape clears the selection, window stays visible
        assert_eq!(sel.handle_escape(), EscapeAction::ClearedSelection);
        assert!(sel.is_empty());
        assert_eq!(sel.phase, SelectionPhase::Idle);

        // Second Escape hides the window
        assert_eq!(sel.handle_escape(), EscapeAction::HideWindow);
    }

    #[test]
    fn test_week_count_across_year_boundary() {
        // 2024-12-30 (Mon, ISO 2025-W01) .. 2025-01-06 (Mon, ISO 2025-W02)
        let mut sel = SelectionState::new();
        sel.begin_drag(d(2024, 12, 30));
        sel.drag_over(d(2025, 1, 6));
        assert_eq!(sel.day_count(), Some(8));
        assert_eq!(sel.week_count(), Some(2));
    }
}
