//! # Footer Module
//!
//! The status line under the calendar grid: today's date and day-of-year,
//! plus live range counts while a selection exists.

use chrono::NaiveDate;
use egui::{RichText, Ui};

use crate::calendar::day_of_year;
use crate::ui::app_state::MiniCalendarApp;
use crate::ui::state::selection_state::SelectionState;

impl MiniCalendarApp {
    /// Render the footer line
    pub fn render_footer(&mut self, ui: &mut Ui) {
        let text = footer_text(self.today, &self.selection);
        let color = self.theme().footer_text;
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(text).color(color).size(12.0));
        });
    }
}

/// Build the footer text. Always shows today; with a multi-day selection it
/// also shows the range, the inclusive day count with a weeks/days breakdown,
/// and the number of ISO weeks the range touches.
pub fn footer_text(today: NaiveDate, selection: &SelectionState) -> String {
    let today_str = format!(
        "Today: {}  (day {})",
        today.format("%d.%m.%Y"),
        day_of_year(today)
    );

    let Some((lo, hi)) = selection.range() else {
        return today_str;
    };
    if lo == hi {
        return today_str;
    }

    let total_days = selection.day_count().unwrap_or(0);
    let iso_weeks = selection.week_count().unwrap_or(0);
    let (full_weeks, rem_days) = (total_days / 7, total_days % 7);

    let mut parts: Vec<String> = Vec::new();
    if full_weeks > 0 {
        parts.push(format!("{full_weeks} week{}", plural(full_weeks)));
    }
    if rem_days > 0 {
        parts.push(format!("{rem_days} day{}", plural(rem_days)));
    }

    format!(
        "{} → {}:  {} days ({}), {} ISO week{}     {}",
        lo.format("%d.%m"),
        hi.format("%d.%m"),
        total_days,
        parts.join(", "),
        iso_weeks,
        plural(iso_weeks),
        today_str,
    )
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_footer_without_selection() {
        let selection = SelectionState::new();
        let text = footer_text(d(2024, 6, 15), &selection);
        assert_eq!(text, "Today: 15.06.2024  (day 167)");
    }

    #[test]
    fn test_footer_single_day_selection_shows_today_only() {
        let mut selection = SelectionState::new();
        selection.begin_drag(d(2024, 6, 10));
        selection.end_drag();
        let text = footer_text(d(2024, 6, 15), &selection);
        assert!(!text.contains('→'));
    }

    #[test]
    fn test_footer_with_range() {
        let mut selection = SelectionState::new();
        selection.begin_drag(d(2024, 1, 1));
        selection.drag_over(d(2024, 1, 10));
        selection.end_drag();
        let text = footer_text(d(2024, 1, 15), &selection);
        assert!(text.starts_with("01.01 → 10.01:  10 days (1 week, 3 days), 2 ISO weeks"));
        assert!(text.ends_with("Today: 15.01.2024  (day 15)"));
    }

    #[test]
    fn test_footer_exact_week() {
        let mut selection = SelectionState::new();
        selection.begin_drag(d(2024, 1, 1));
        selection.drag_over(d(2024, 1, 7));
        selection.end_drag();
        let text = footer_text(d(2024, 1, 15), &selection);
        assert!(text.contains("7 days (1 week), 1 ISO week "));
    }
}
