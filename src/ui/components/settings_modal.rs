//! # Settings Modal Module
//!
//! The settings dialog: theme toggle, per-holiday checkboxes grouped by
//! country, per-country stripe colors, and the autostart toggle.
//!
//! ## Behavior:
//! - The dialog edits a working copy; OK persists and applies, Cancel drops it
//! - Autostart registration failure keeps the dialog open, shows the error,
//!   and reverts the toggle (registration is the only step that can fail
//!   without a defaults fallback)

use std::collections::{BTreeMap, BTreeSet};

use egui::{Context, RichText};

use crate::autostart;
use crate::calendar::{holidays_by_country, Country};
use crate::settings::Settings;
use crate::ui::app_state::MiniCalendarApp;
use crate::ui::components::theme::{color_from_hex, hex_from_color};

/// Working copy of the settings while the dialog is open
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub dark_mode: bool,
    pub enabled_holidays: BTreeSet<String>,
    /// Country code -> RGB, edited through egui's color button
    pub colors: BTreeMap<String, [u8; 3]>,
    pub autostart: bool,
    /// Non-fatal error from the last failed apply (autostart registration)
    pub error: Option<String>,
}

impl SettingsForm {
    /// Snapshot the current settings into an editable form
    pub fn from_settings(settings: &Settings) -> Self {
        let colors = Country::ALL
            .iter()
            .map(|country| {
                let color = color_from_hex(settings.holiday_color(country.code()));
                (country.code().to_string(), [color.r(), color.g(), color.b()])
            })
            .collect();

        Self {
            dark_mode: settings.dark_mode,
            enabled_holidays: settings.holidays.iter().cloned().collect(),
            colors,
            autostart: settings.autostart,
            error: None,
        }
    }

    /// Write the form back into the settings struct
    pub fn apply_to(&self, settings: &mut Settings) {
        settings.dark_mode = self.dark_mode;
        settings.holidays = self.enabled_holidays.iter().cloned().collect();
        settings.holiday_colors = self
            .colors
            .iter()
            .map(|(code, [r, g, b])| {
                (code.clone(), hex_from_color(egui::Color32::from_rgb(*r, *g, *b)))
            })
            .collect();
        settings.autostart = self.autostart;
    }
}

impl MiniCalendarApp {
    /// Render the settings dialog while `self.settings_form` is open
    pub fn render_settings_modal(&mut self, ctx: &Context) {
        let Some(mut form) = self.settings_form.take() else {
            return;
        };
        let mut keep_open = true;
        let mut apply = false;

        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.checkbox(&mut form.dark_mode, "Dark theme");
                ui.checkbox(&mut form.autostart, "Start with Windows");
                ui.separator();

                ui.label(RichText::new("Holidays").strong());
                ui.horizontal_top(|ui| {
                    for country in Country::ALL {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(country.display_name()).strong());
                                if let Some(rgb) = form.colors.get_mut(country.code()) {
                                    ui.color_edit_button_srgb(rgb);
                                }
                            });
                            for (key, name) in holidays_by_country(country) {
                                let mut enabled = form.enabled_holidays.contains(key);
                                if ui.checkbox(&mut enabled, name).changed() {
                                    if enabled {
                                        form.enabled_holidays.insert(key.to_string());
                                    } else {
                                        form.enabled_holidays.remove(key);
                                    }
                                }
                            }
                        });
                        ui.add_space(8.0);
                    }
                });

                if let Some(error) = &form.error {
                    ui.separator();
                    ui.colored_label(egui::Color32::from_rgb(204, 0, 0), error);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        apply = true;
                    }
                    if ui.button("Cancel").clicked() {
                        keep_open = false;
                    }
                });
            });

        if apply {
            keep_open = !self.apply_settings_form(&mut form);
        }
        if keep_open {
            self.settings_form = Some(form);
        }
    }

    /// Apply and persist the form; returns true when the dialog may close
    fn apply_settings_form(&mut self, form: &mut SettingsForm) -> bool {
        // Autostart registration is attempted first so a failure can revert
        // the toggle without having mutated anything else
        if form.autostart != self.settings.autostart {
            if let Err(e) = autostart::set_enabled(form.autostart) {
                log::warn!("⚠️ Autostart registration failed: {e:#}");
                form.error = Some(format!("Autostart registration failed: {e}"));
                form.autostart = self.settings.autostart;
                return false;
            }
        }

        form.apply_to(&mut self.settings);
        if let Err(e) = self.settings.save() {
            log::warn!("⚠️ Failed to save settings: {e}");
        }

        self.rebuild_holiday_map();
        self.needs_reconfigure = true;
        log::info!("⚙️ Settings applied ({} holidays enabled)", self.settings.holidays.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_round_trip() {
        let mut settings = Settings::default();
        settings.dark_mode = true;
        settings.holidays = vec!["ch_neujahr".to_string(), "de_karfreitag".to_string()];
        settings.autostart = true;

        let form = SettingsForm::from_settings(&settings);
        let mut restored = Settings::default();
        form.apply_to(&mut restored);

        assert_eq!(restored.dark_mode, settings.dark_mode);
        assert_eq!(restored.holidays, settings.holidays);
        assert_eq!(restored.autostart, settings.autostart);
        assert_eq!(restored.holiday_colors, settings.holiday_colors);
    }

    #[test]
    fn test_form_colors_cover_all_countries() {
        let form = SettingsForm::from_settings(&Settings::default());
        for country in Country::ALL {
            assert!(form.colors.contains_key(country.code()));
        }
        // Default CH color is pure red
        assert_eq!(form.colors["CH"], [255, 0, 0]);
    }
}
