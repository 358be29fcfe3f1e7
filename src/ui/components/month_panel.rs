//! # Month Panel Module
//!
//! Pooled month panels with in-place reconfiguration.
//!
//! ## Responsibilities:
//! - Own a reusable pool of month panels sized to the maximum grid
//!   (grow on demand, never shrink; surplus panels are hidden, not dropped)
//! - `configure` rewrites a panel's header, week-number labels, and 6×7 day
//!   cells in place: day numbers, weekend/holiday/selection/today colors,
//!   blank slots, holiday stripes, and the multi-holiday outline
//!
//! ## Purpose:
//! Reconfiguring cached cell data is much cheaper than rebuilding widget
//! trees, which keeps interactive window resizing smooth. Rendering (see
//! `panel_grid`) only draws what `configure` computed.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use egui::Color32;

use crate::calendar::{
    is_weekend, month_grid, week_numbers, Country, MONTH_NAMES,
};
use crate::settings::Settings;
use crate::ui::components::theme::{color_from_hex, Theme};
use crate::ui::state::layout_state::{MAX_GRID_COLS, MAX_GRID_ROWS};

/// Holiday entries per date: (display name, country)
pub type HolidayMap = BTreeMap<NaiveDate, Vec<(&'static str, Country)>>;

/// One day slot of a month panel, fully resolved for drawing
#[derive(Debug, Clone, Default)]
pub struct DayCell {
    /// Date of this slot; `None` for leading/trailing blanks
    pub date: Option<NaiveDate>,
    /// Day-number text; empty for blanks
    pub label: String,
    /// Background stripe colors, top to bottom (empty = panel background)
    pub stripes: Vec<Color32>,
    /// Day-number text color
    pub text_color: Color32,
    /// Bold day number (today)
    pub bold: bool,
    /// Outline the day number when several holiday stripes overlap
    pub outlined: bool,
    /// Holiday names for the hover tooltip
    pub tooltip: Option<String>,
}

/// A reusable month panel: header + week numbers + 6×7 day cells
#[derive(Debug, Clone)]
pub struct MonthPanel {
    pub year: i32,
    pub month: u32,
    /// Hidden panels stay allocated but are skipped by the renderer
    pub visible: bool,
    /// e.g. "March 2024"
    pub title: String,
    /// ISO week label per grid row; empty for all-blank rows
    pub week_labels: [String; 6],
    pub cells: [[DayCell; 7]; 6],
}

impl MonthPanel {
    fn hidden() -> Self {
        Self {
            year: 0,
            month: 0,
            visible: false,
            title: String::new(),
            week_labels: Default::default(),
            cells: std::array::from_fn(|_| std::array::from_fn(|_| DayCell::default())),
        }
    }

    /// Rewrite this panel's labels and cells in place for the given month.
    ///
    /// No allocation beyond the per-cell stripe lists; the panel itself is
    /// reused across reconfigurations.
    pub fn configure(
        &mut self,
        year: i32,
        month: u32,
        today: NaiveDate,
        selection: Option<(NaiveDate, NaiveDate)>,
        holiday_map: &HolidayMap,
        settings: &Settings,
        theme: &Theme,
    ) {
        self.year = year;
        self.month = month;
        self.visible = true;
        self.title.clear();
        if let Some(name) = MONTH_NAMES.get(month as usize - 1) {
            self.title.push_str(name);
        }
        self.title.push(' ');
        self.title.push_str(&year.to_string());

        let grid = month_grid(year, month);
        let weeks = week_numbers(year, month);

        for row in 0..6 {
            self.week_labels[row] = weeks[row].map(|w| w.to_string()).unwrap_or_default();
            for col in 0..7 {
                let cell = &mut self.cells[row][col];
                match grid[row][col].and_then(|day| NaiveDate::from_ymd_opt(year, month, day)) {
                    Some(date) => {
                        configure_day_cell(cell, date, today, selection, holiday_map, settings, theme)
                    }
                    None => clear_cell(cell),
                }
            }
        }
    }
}

/// Resolve one day's colors. Priority: today > selection > holidays > weekend.
fn configure_day_cell(
    cell: &mut DayCell,
    date: NaiveDate,
    today: NaiveDate,
    selection: Option<(NaiveDate, NaiveDate)>,
    holiday_map: &HolidayMap,
    settings: &Settings,
    theme: &Theme,
) {
    cell.date = Some(date);
    cell.label = date.day().to_string();
    cell.bold = date == today;
    cell.stripes.clear();
    cell.outlined = false;
    cell.tooltip = None;

    let in_selection = selection.is_some_and(|(lo, hi)| lo <= date && date <= hi);
    let holidays = holiday_map.get(&date);

    if let Some(entries) = holidays {
        let lines: Vec<String> = entries
            .iter()
            .map(|(name, country)| format!("{name} ({})", country.code()))
            .collect();
        cell.tooltip = Some(lines.join("\n"));
    }

    if date == today {
        cell.stripes.push(theme.today_background);
        cell.text_color = theme.today_text;
    } else if in_selection {
        cell.stripes.push(theme.selection_background);
        cell.text_color = theme.selection_text;
    } else if let Some(entries) = holidays {
        // One stripe per distinct country, in registry order
        let mut seen: Vec<Country> = Vec::new();
        for (_, country) in entries {
            if !seen.contains(country) {
                seen.push(*country);
                cell.stripes.push(color_from_hex(settings.holiday_color(country.code())));
            }
        }
        cell.text_color = theme.holiday_text;
        cell.outlined = cell.stripes.len() > 1;
    } else if is_weekend(date) {
        cell.text_color = theme.weekend_text;
    } else {
        cell.text_color = theme.day_text;
    }
}

fn clear_cell(cell: &mut DayCell) {
    cell.date = None;
    cell.label.clear();
    cell.stripes.clear();
    cell.text_color = Color32::TRANSPARENT;
    cell.bold = false;
    cell.outlined = false;
    cell.tooltip = None;
}

/// Fixed-capacity pool of month panels, indexed by grid slot
#[derive(Debug)]
pub struct PanelPool {
    panels: Vec<MonthPanel>,
}

impl PanelPool {
    /// Pool capacity bound: the maximum supported grid
    pub const MAX_PANELS: usize = MAX_GRID_COLS * MAX_GRID_ROWS;

    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    /// Number of panels currently allocated (never shrinks)
    pub fn allocated(&self) -> usize {
        self.panels.len()
    }

    /// Reconfigure the pool for a month window: grow if needed, rewrite the
    /// first `window.len()` panels in place, hide the rest.
    pub fn configure_window(
        &mut self,
        window: &[(i32, u32)],
        today: NaiveDate,
        selection: Option<(NaiveDate, NaiveDate)>,
        holiday_map: &HolidayMap,
        settings: &Settings,
        theme: &Theme,
    ) {
        let wanted = window.len().min(Self::MAX_PANELS);
        while self.panels.len() < wanted {
            self.panels.push(MonthPanel::hidden());
        }

        for (panel, &(year, month)) in self.panels.iter_mut().zip(window) {
            panel.configure(year, month, today, selection, holiday_map, settings, theme);
        }
        for panel in self.panels.iter_mut().skip(wanted) {
            panel.visible = false;
        }
    }

    /// Panels that should currently be drawn, in window order
    pub fn visible_panels(&self) -> impl Iterator<Item = &MonthPanel> {
        self.panels.iter().filter(|p| p.visible)
    }
}

impl Default for PanelPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::holiday_map;
    use crate::ui::components::theme::LIGHT;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn configure_pool(pool: &mut PanelPool, window: &[(i32, u32)], keys: &[&str]) {
        let settings = Settings::default();
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let map = holiday_map(2024, &keys);
        pool.configure_window(window, d(2024, 1, 15), None, &map, &settings, &LIGHT);
    }

    #[test]
    fn test_pool_grows_but_never_shrinks() {
        let mut pool = PanelPool::new();
        configure_pool(&mut pool, &[(2024, 1), (2024, 2), (2024, 3)], &[]);
        assert_eq!(pool.allocated(), 3);
        assert_eq!(pool.visible_panels().count(), 3);

        configure_pool(&mut pool, &[(2024, 1)], &[]);
        assert_eq!(pool.allocated(), 3);
        assert_eq!(pool.visible_panels().count(), 1);

        configure_pool(&mut pool, &[(2024, 1), (2024, 2)], &[]);
        assert_eq!(pool.allocated(), 3);
        assert_eq!(pool.visible_panels().count(), 2);
    }

    #[test]
    fn test_configure_rewrites_in_place() {
        let mut pool = PanelPool::new();
        configure_pool(&mut pool, &[(2024, 1)], &[]);
        let jan_title = pool.visible_panels().next().unwrap().title.clone();
        assert_eq!(jan_title, "January 2024");

        configure_pool(&mut pool, &[(2024, 2)], &[]);
        let panel = pool.visible_panels().next().unwrap();
        assert_eq!(panel.title, "February 2024");
        // Jan 31 slot must be blank now (Feb 2024 ends on the 29th)
        assert!(panel.cells.iter().flatten().all(|c| c.label != "31"));
    }

    #[test]
    fn test_today_beats_selection_and_weekend() {
        let mut pool = PanelPool::new();
        let settings = Settings::default();
        let map = HolidayMap::new();
        // Today is Saturday Jan 6 and inside the selection
        pool.configure_window(
            &[(2024, 1)],
            d(2024, 1, 6),
            Some((d(2024, 1, 1), d(2024, 1, 10))),
            &map,
            &settings,
            &LIGHT,
        );
        let panel = pool.visible_panels().next().unwrap();
        let cell = panel
            .cells
            .iter()
            .flatten()
            .find(|c| c.date == Some(d(2024, 1, 6)))
            .unwrap();
        assert!(cell.bold);
        assert_eq!(cell.stripes, vec![LIGHT.today_background]);
    }

    #[test]
    fn test_selection_highlight_and_weekend_text() {
        let mut pool = PanelPool::new();
        let settings = Settings::default();
        let map = HolidayMap::new();
        pool.configure_window(
            &[(2024, 1)],
            d(2024, 1, 15),
            Some((d(2024, 1, 2), d(2024, 1, 4))),
            &map,
            &settings,
            &LIGHT,
        );
        let panel = pool.visible_panels().next().unwrap();
        let selected = panel.cells.iter().flatten().find(|c| c.date == Some(d(2024, 1, 3))).unwrap();
        assert_eq!(selected.stripes, vec![LIGHT.selection_background]);

        let weekend = panel.cells.iter().flatten().find(|c| c.date == Some(d(2024, 1, 7))).unwrap();
        assert!(weekend.stripes.is_empty());
        assert_eq!(weekend.text_color, LIGHT.weekend_text);
    }

    #[test]
    fn test_multi_holiday_stripes_get_outline() {
        let mut pool = PanelPool::new();
        // Jan 1 is a holiday in CH, DE, and CN
        configure_pool(&mut pool, &[(2024, 1)], &["ch_neujahr", "de_neujahr", "cn_neujahr"]);
        let panel = pool.visible_panels().next().unwrap();
        let cell = panel.cells.iter().flatten().find(|c| c.date == Some(d(2024, 1, 1))).unwrap();
        assert_eq!(cell.stripes.len(), 3);
        assert!(cell.outlined);
        assert!(cell.tooltip.as_ref().unwrap().contains("Neujahr (CH)"));

        // Single-country holiday: stripe but no outline
        configure_pool(&mut pool, &[(2024, 1)], &["ch_berchtoldstag"]);
        let panel = pool.visible_panels().next().unwrap();
        let cell = panel.cells.iter().flatten().find(|c| c.date == Some(d(2024, 1, 2))).unwrap();
        assert_eq!(cell.stripes.len(), 1);
        assert!(!cell.outlined);
    }

    #[test]
    fn test_blank_cells_have_no_date() {
        let mut pool = PanelPool::new();
        configure_pool(&mut pool, &[(2024, 6)], &[]);
        let panel = pool.visible_panels().next().unwrap();
        // June 2024 starts on Saturday: first five slots are blank
        for col in 0..5 {
            assert!(panel.cells[0][col].date.is_none());
            assert!(panel.cells[0][col].label.is_empty());
        }
        assert_eq!(panel.cells[0][5].date, Some(d(2024, 6, 1)));
    }

    #[test]
    fn test_week_labels_follow_iso_weeks() {
        let mut pool = PanelPool::new();
        configure_pool(&mut pool, &[(2024, 1)], &[]);
        let panel = pool.visible_panels().next().unwrap();
        assert_eq!(panel.week_labels[0], "1");
        assert_eq!(panel.week_labels[4], "5");
        assert_eq!(panel.week_labels[5], "");
    }
}
