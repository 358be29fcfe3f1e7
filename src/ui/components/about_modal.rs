//! # About Modal Module
//!
//! The About dialog and the "Check for Updates" browser launch.

use egui::{Context, RichText};

use crate::ui::app_state::MiniCalendarApp;

/// Project page opened by "Check for Updates"
pub const RELEASES_URL: &str = "https://github.com/mini-calendar/mini-calendar/releases";

impl MiniCalendarApp {
    /// Render the About dialog while `self.about_open` is set
    pub fn render_about_modal(&mut self, ctx: &Context) {
        if !self.about_open {
            return;
        }
        let mut open = self.about_open;

        egui::Window::new("About Mini Calendar")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("Mini Calendar").strong().size(16.0));
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(4.0);
                ui.label("Multi-month tray calendar with ISO week numbers,");
                ui.label("holiday highlighting and drag-to-select date ranges.");
                ui.add_space(8.0);
                if ui.button("Check for Updates").clicked() {
                    open_releases_page();
                }
            });

        self.about_open = open;
    }
}

/// Open the releases page in the default browser; failures are non-fatal
pub fn open_releases_page() {
    match webbrowser::open(RELEASES_URL) {
        Ok(()) => log::info!("🌐 Opened releases page"),
        Err(e) => log::warn!("⚠️ Could not open browser: {e}"),
    }
}
