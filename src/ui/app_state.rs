//! # Core Application State
//!
//! The central app struct composing all calendar state.
//!
//! ## Responsibilities:
//! - Own the persisted settings and derived runtime state (month window,
//!   selection, layout, panel pool, holiday map)
//! - Window show/hide/toggle with geometry persistence
//! - Panel reconfiguration whenever state affecting the grid changed
//!
//! The eframe update loop itself lives in `app_coordinator`.

use chrono::{Local, NaiveDate};

use crate::calendar::{day_of_year, holiday_map};
use crate::settings::Settings;
use crate::tray::Tray;
use crate::ui::components::month_panel::{HolidayMap, PanelPool};
use crate::ui::components::settings_modal::SettingsForm;
use crate::ui::components::theme::Theme;
use crate::ui::state::calendar_state::CalendarState;
use crate::ui::state::layout_state::{GridLayout, ResizeDebouncer, MAX_GRID_COLS, MAX_GRID_ROWS};
use crate::ui::state::selection_state::SelectionState;

/// Main application struct for the mini calendar
pub struct MiniCalendarApp {
    /// Persisted settings (saved on every mutation and on hide/exit)
    pub settings: Settings,

    /// Today's date, refreshed every frame so midnight rollovers are caught
    pub today: NaiveDate,

    /// Anchor month and visible month window
    pub calendar: CalendarState,

    /// Drag-to-select state machine
    pub selection: SelectionState,

    /// Current columns × rows of month panels
    pub layout: GridLayout,

    /// Coalesces resize bursts into one recompute
    pub debouncer: ResizeDebouncer,

    /// Reusable month panels (grow on demand, never shrink)
    pub pool: PanelPool,

    /// Enabled holidays for all visible years
    pub holiday_map: HolidayMap,

    /// Tray icon; None when tray creation failed (app still runs windowed)
    pub tray: Option<Tray>,

    /// Whether the main window is currently shown. The applet starts hidden
    /// in the tray; the first tray toggle shows it.
    pub window_visible: bool,

    /// True until the first frame has run (startup visibility is decided there)
    pub first_frame: bool,

    /// Set once Exit was chosen, so the close request is not intercepted
    pub exiting: bool,

    /// Panels must be reconfigured before the next draw
    pub needs_reconfigure: bool,

    /// Working copy of the settings dialog; None while closed
    pub settings_form: Option<SettingsForm>,

    /// About dialog visibility
    pub about_open: bool,

    /// Last observed window size, for resize detection
    pub last_window_size: Option<(f32, f32)>,
}

/// Whether the window should be visible at startup. A working tray means the
/// applet starts hidden; without one a hidden window could never be shown
/// again, so it falls back to a normal visible window.
pub fn starts_visible(has_tray: bool) -> bool {
    !has_tray
}

impl MiniCalendarApp {
    /// Create the app from loaded settings
    pub fn new(settings: Settings) -> Self {
        let tray = match Tray::new(Local::now().date_naive()) {
            Ok(tray) => Some(tray),
            Err(e) => {
                log::error!("❌ Tray icon unavailable: {e:#}");
                None
            }
        };
        Self::with_tray(settings, tray)
    }

    #[cfg(test)]
    pub(crate) fn without_tray(settings: Settings) -> Self {
        Self::with_tray(settings, None)
    }

    fn with_tray(settings: Settings, tray: Option<Tray>) -> Self {
        let today = Local::now().date_naive();

        // Re-assert the autostart registration if it went missing
        if settings.autostart && !crate::autostart::is_enabled() {
            if let Err(e) = crate::autostart::set_enabled(true) {
                log::warn!("⚠️ Could not restore autostart registration: {e:#}");
            }
        }

        // Restore the persisted grid if present, clamped to the pool bounds
        let layout = match (settings.grid_cols, settings.grid_rows) {
            (Some(cols), Some(rows)) => GridLayout {
                cols: cols.clamp(1, MAX_GRID_COLS),
                rows: rows.clamp(1, MAX_GRID_ROWS),
            },
            _ => GridLayout::default(),
        };

        let mut calendar = CalendarState::new(today);
        calendar.regenerate(layout.panel_count());

        let mut app = Self {
            settings,
            today,
            calendar,
            selection: SelectionState::new(),
            layout,
            debouncer: ResizeDebouncer::new(),
            pool: PanelPool::new(),
            holiday_map: HolidayMap::new(),
            tray,
            window_visible: false,
            first_frame: true,
            exiting: false,
            needs_reconfigure: true,
            settings_form: None,
            about_open: false,
            last_window_size: None,
        };
        app.rebuild_holiday_map();
        app
    }

    /// Active theme variant for the persisted dark-mode flag
    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.settings.dark_mode)
    }

    /// Window title showing the current day-of-year
    pub fn window_title(&self) -> String {
        format!("Mini Calendar  Day: {}", day_of_year(self.today))
    }

    /// Recompute the holiday map for all years the month window touches
    pub fn rebuild_holiday_map(&mut self) {
        self.holiday_map.clear();
        for year in self.calendar.visible_years() {
            self.holiday_map.append(&mut holiday_map(year, &self.settings.holidays));
        }
    }

    /// Rewrite the pooled panels from the current state (no rebuild)
    pub fn reconfigure_panels(&mut self) {
        self.pool.configure_window(
            &self.calendar.month_window,
            self.today,
            self.selection.range(),
            &self.holiday_map,
            &self.settings,
            self.theme(),
        );
        self.needs_reconfigure = false;
    }

    /// Apply a settled (debounced) resize: refit the grid and persist
    pub fn apply_resize(&mut self, width: f32, height: f32) {
        self.settings.window_width = Some(width);
        self.settings.window_height = Some(height);

        let layout = GridLayout::fit(width, height);
        if layout != self.layout {
            log::info!(
                "📐 Window refit: {}×{} panels for {width:.0}×{height:.0}",
                layout.cols,
                layout.rows
            );
            self.layout = layout;
            self.settings.grid_cols = Some(layout.cols);
            self.settings.grid_rows = Some(layout.rows);
            self.calendar.regenerate(layout.panel_count());
            self.rebuild_holiday_map();
            self.needs_reconfigure = true;
        }

        if let Err(e) = self.settings.save() {
            log::warn!("⚠️ Failed to save settings: {e}");
        }
    }

    /// Show the window: re-anchor on today, drop any stale selection
    pub fn show_window(&mut self, ctx: &egui::Context) {
        self.today = Local::now().date_naive();
        self.calendar.go_today(self.today);
        self.selection.clear();
        self.rebuild_holiday_map();
        self.needs_reconfigure = true;
        self.window_visible = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
    }

    /// Hide the window, persisting geometry first. Without a tray there is
    /// no way to bring a hidden window back, so hiding becomes an exit.
    pub fn hide_window(&mut self, ctx: &egui::Context) {
        if self.tray.is_none() {
            self.exit(ctx);
            return;
        }
        if let Err(e) = self.settings.save() {
            log::warn!("⚠️ Failed to save settings: {e}");
        }
        self.window_visible = false;
        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
    }

    /// Tray left-click: toggle window visibility
    pub fn toggle_window(&mut self, ctx: &egui::Context) {
        if self.window_visible {
            self.hide_window(ctx);
        } else {
            self.show_window(ctx);
        }
    }

    /// Exit from the tray menu: persist and close for real
    pub fn exit(&mut self, ctx: &egui::Context) {
        if let Err(e) = self.settings.save() {
            log::warn!("⚠️ Failed to save settings: {e}");
        }
        self.exiting = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tray_applet_starts_hidden() {
        assert!(!starts_visible(true));
        // Without a tray a hidden window could never be shown again
        assert!(starts_visible(false));

        let app = MiniCalendarApp::without_tray(Settings::default());
        assert!(!app.window_visible);
        assert!(app.first_frame);
    }
}
