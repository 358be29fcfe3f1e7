//! # Navigation Bar Module
//!
//! The top row of the calendar window: year / month navigation arrows and
//! the Today button. Page navigation (shift by one full grid of months) is
//! bound to PageUp / PageDown and handled in the coordinator.

use egui::{RichText, Ui};

use crate::ui::app_state::MiniCalendarApp;

impl MiniCalendarApp {
    /// Render the ◀◀ ◀ Today ▶ ▶▶ navigation row
    pub fn render_nav_bar(&mut self, ui: &mut Ui) {
        let accent = self.theme().accent;
        let header_text = self.theme().header_text;

        ui.horizontal(|ui| {
            ui.add_space(6.0);

            if nav_button(ui, "◀◀", header_text).on_hover_text("Previous year").clicked() {
                self.calendar.prev_year();
                self.after_navigation();
            }
            if nav_button(ui, "◀", header_text).on_hover_text("Previous month").clicked() {
                self.calendar.prev_month();
                self.after_navigation();
            }

            if ui
                .button(RichText::new("Today").color(accent).strong())
                .on_hover_text("Jump back to the current month")
                .clicked()
            {
                self.calendar.go_today(self.today);
                self.selection.clear();
                self.after_navigation();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(6.0);
                if nav_button(ui, "▶▶", header_text).on_hover_text("Next year").clicked() {
                    self.calendar.next_year();
                    self.after_navigation();
                }
                if nav_button(ui, "▶", header_text).on_hover_text("Next month").clicked() {
                    self.calendar.next_month();
                    self.after_navigation();
                }
            });
        });
    }

    /// Common tail of every navigation action: panels get reconfigured, the
    /// window itself is never rebuilt.
    pub fn after_navigation(&mut self) {
        self.rebuild_holiday_map();
        self.needs_reconfigure = true;
    }
}

fn nav_button(ui: &mut Ui, label: &str, color: egui::Color32) -> egui::Response {
    ui.button(RichText::new(label).color(color).size(14.0))
}
