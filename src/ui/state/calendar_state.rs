//! # Calendar State Module
//!
//! Anchor month and visible month window.
//!
//! ## Responsibilities:
//! - Track the anchor (year, month) the grid is centered on
//! - Regenerate the contiguous month window whenever the anchor moves or the
//!   grid is refitted
//! - Month / page / year navigation
//!
//! ## Invariant:
//! The month window always holds exactly `columns × rows` consecutive
//! (year, month) pairs, centered on the anchor. Resizing refits the window
//! but never moves the anchor; navigation moves the anchor only.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::calendar::shift_month;

/// Calendar navigation state and the currently visible month window
#[derive(Debug, Clone)]
pub struct CalendarState {
    /// Anchor year the month window is centered on
    pub anchor_year: i32,
    /// Anchor month (1-12)
    pub anchor_month: u32,
    /// Ordered (year, month) pairs currently displayed
    pub month_window: Vec<(i32, u32)>,
}

impl CalendarState {
    /// Create calendar state anchored on the given date, with a 1-panel window
    pub fn new(today: NaiveDate) -> Self {
        let mut state = Self {
            anchor_year: today.year(),
            anchor_month: today.month(),
            month_window: Vec::new(),
        };
        state.regenerate(1);
        state
    }

    /// Rebuild the month window as `panel_count` consecutive months centered
    /// on the anchor (months before = (count - 1) / 2)
    pub fn regenerate(&mut self, panel_count: usize) {
        let panel_count = panel_count.max(1);
        let before = (panel_count as i32 - 1) / 2;
        let (mut y, mut m) = shift_month(self.anchor_year, self.anchor_month, -before);

        self.month_window.clear();
        for _ in 0..panel_count {
            self.month_window.push((y, m));
            let next = crate::calendar::next_month(y, m);
            y = next.0;
            m = next.1;
        }
    }

    /// Number of panels the window currently holds
    pub fn panel_count(&self) -> usize {
        self.month_window.len()
    }

    /// Distinct years touched by the visible window (for holiday lookups)
    pub fn visible_years(&self) -> BTreeSet<i32> {
        self.month_window.iter().map(|(y, _)| *y).collect()
    }

    /// Shift the anchor by a number of months and regenerate
    fn shift_anchor(&mut self, delta: i32) {
        let (y, m) = shift_month(self.anchor_year, self.anchor_month, delta);
        self.anchor_year = y;
        self.anchor_month = m;
        self.regenerate(self.panel_count());
        log::info!("📅 Navigated to anchor {}/{}", self.anchor_month, self.anchor_year);
    }

    /// Navigate one month back
    pub fn prev_month(&mut self) {
        self.shift_anchor(-1);
    }

    /// Navigate one month forward
    pub fn next_month(&mut self) {
        self.shift_anchor(1);
    }

    /// Navigate one full page (current panel count) back
    pub fn prev_page(&mut self) {
        self.shift_anchor(-(self.panel_count() as i32));
    }

    /// Navigate one full page (current panel count) forward
    pub fn next_page(&mut self) {
        self.shift_anchor(self.panel_count() as i32);
    }

    /// Navigate one year back
    pub fn prev_year(&mut self) {
        self.shift_anchor(-12);
    }

    /// Navigate one year forward
    pub fn next_year(&mut self) {
        self.shift_anchor(12);
    }

    /// Re-anchor on today's month
    pub fn go_today(&mut self, today: NaiveDate) {
        self.anchor_year = today.year();
        self.anchor_month = today.month();
        self.regenerate(self.panel_count());
        log::info!("📅 Re-anchored on today ({}/{})", self.anchor_month, self.anchor_year);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(y: i32, m: u32, panels: usize) -> CalendarState {
        let mut s = CalendarState::new(NaiveDate::from_ymd_opt(y, m, 15).unwrap());
        s.regenerate(panels);
        s
    }

    #[test]
    fn test_window_length_matches_panel_count() {
        for panels in 1..=24 {
            let s = state(2024, 6, panels);
            assert_eq!(s.month_window.len(), panels);
        }
    }

    #[test]
    fn test_window_is_contiguous_and_centered() {
        let s = state(2024, 6, 3);
        assert_eq!(s.month_window, vec![(2024, 5), (2024, 6), (2024, 7)]);

        let s = state(2024, 1, 5);
        assert_eq!(
            s.month_window,
            vec![(2023, 11), (2023, 12), (2024, 1), (2024, 2), (2024, 3)]
        );
    }

    #[test]
    fn test_even_count_puts_anchor_left_of_center() {
        let s = state(2024, 6, 4);
        assert_eq!(s.month_window, vec![(2024, 5), (2024, 6), (2024, 7), (2024, 8)]);
    }

    #[test]
    fn test_month_navigation() {
        let mut s = state(2024, 1, 3);
        s.prev_month();
        assert_eq!((s.anchor_year, s.anchor_month), (2023, 12));
        s.next_month();
        assert_eq!((s.anchor_year, s.anchor_month), (2024, 1));
    }

    #[test]
    fn test_page_navigation_round_trip() {
        let mut s = state(2024, 6, 6);
        let before = (s.anchor_year, s.anchor_month);
        s.next_page();
        assert_eq!((s.anchor_year, s.anchor_month), (2024, 12));
        s.prev_page();
        assert_eq!((s.anchor_year, s.anchor_month), before);
    }

    #[test]
    fn test_year_navigation() {
        let mut s = state(2024, 6, 1);
        s.next_year();
        assert_eq!((s.anchor_year, s.anchor_month), (2025, 6));
        s.prev_year();
        assert_eq!((s.anchor_year, s.anchor_month), (2024, 6));
    }

    #[test]
    fn test_resize_keeps_anchor() {
        let mut s = state(2024, 6, 3);
        s.regenerate(8);
        assert_eq!((s.anchor_year, s.anchor_month), (2024, 6));
        assert_eq!(s.month_window.len(), 8);
        assert!(s.month_window.contains(&(2024, 6)));
    }

    #[test]
    fn test_visible_years() {
        let s = state(2024, 1, 5);
        let years: Vec<i32> = s.visible_years().into_iter().collect();
        assert_eq!(years, vec![2023, 2024]);
    }
}
