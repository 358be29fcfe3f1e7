//! # Application Coordinator
//!
//! The eframe update loop. Each frame it:
//!
//! 1. Refreshes today's date (midnight rollover updates tray + title)
//! 2. Drains tray commands
//! 3. Handles keyboard input (Escape, PageUp / PageDown)
//! 4. Detects resizes and settles them through the debouncer
//! 5. Intercepts window close requests, hiding to the tray instead
//! 6. Reconfigures panels when anything marked them stale, then draws

use std::time::{Duration, Instant};

use chrono::Local;
use egui::{Context, Key, ViewportCommand};

use crate::tray::TrayCommand;
use crate::ui::app_state::{starts_visible, MiniCalendarApp};
use crate::ui::state::selection_state::EscapeAction;

/// Repaint cadence while idle, so tray events are still noticed promptly
const IDLE_REPAINT: Duration = Duration::from_millis(200);

impl eframe::App for MiniCalendarApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if std::mem::take(&mut self.first_frame) && starts_visible(self.tray.is_some()) {
            self.show_window(ctx);
        }

        self.refresh_today(ctx);
        self.handle_tray_commands(ctx);
        self.handle_keys(ctx);
        self.track_resize(ctx, now);
        self.handle_close_request(ctx);

        if self.needs_reconfigure {
            self.reconfigure_panels();
        }

        let theme = self.theme();
        ctx.set_visuals(if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("nav_bar")
            .frame(egui::Frame::default().fill(theme.header_background).inner_margin(4.0))
            .show(ctx, |ui| self.render_nav_bar(ui));

        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::default().fill(theme.background).inner_margin(4.0))
            .show(ctx, |ui| self.render_footer(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme.background).inner_margin(6.0))
            .show(ctx, |ui| self.render_month_panels(ui));

        self.render_settings_modal(ctx);
        self.render_about_modal(ctx);

        // A pending resize needs a wakeup right when its debounce settles;
        // otherwise a slow heartbeat keeps the tray responsive.
        match self.debouncer.time_remaining(now) {
            Some(remaining) => ctx.request_repaint_after(remaining),
            None => ctx.request_repaint_after(IDLE_REPAINT),
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.settings.save() {
            log::warn!("⚠️ Failed to save settings on exit: {e}");
        }
        log::info!("👋 Mini Calendar shutting down");
    }
}

impl MiniCalendarApp {
    /// Re-read today's date; on rollover update the tray badge and title
    fn refresh_today(&mut self, ctx: &Context) {
        let today = Local::now().date_naive();
        if today != self.today {
            log::info!("📅 Date rollover: {today}");
            self.today = today;
            if let Some(tray) = &mut self.tray {
                tray.refresh_week(today);
            }
            ctx.send_viewport_cmd(ViewportCommand::Title(self.window_title()));
            self.needs_reconfigure = true;
        }
    }

    fn handle_tray_commands(&mut self, ctx: &Context) {
        let Some(tray) = &self.tray else {
            return;
        };
        for command in tray.poll_commands() {
            match command {
                TrayCommand::ToggleWindow => self.toggle_window(ctx),
                TrayCommand::OpenSettings => {
                    self.show_window(ctx);
                    self.settings_form =
                        Some(crate::ui::components::settings_modal::SettingsForm::from_settings(
                            &self.settings,
                        ));
                }
                TrayCommand::OpenAbout => {
                    self.show_window(ctx);
                    self.about_open = true;
                }
                TrayCommand::CheckForUpdates => {
                    crate::ui::components::about_modal::open_releases_page();
                }
                TrayCommand::Exit => self.exit(ctx),
            }
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            // An open dialog takes the Escape; selection / hide handling only
            // runs with no dialog in the way
            if self.settings_form.is_some() || self.about_open {
                self.settings_form = None;
                self.about_open = false;
            } else {
                match self.selection.handle_escape() {
                    EscapeAction::ClearedSelection => self.needs_reconfigure = true,
                    EscapeAction::HideWindow => self.hide_window(ctx),
                }
            }
        }
        if ctx.input(|i| i.key_pressed(Key::PageUp)) {
            self.calendar.prev_page();
            self.after_navigation();
        }
        if ctx.input(|i| i.key_pressed(Key::PageDown)) {
            self.calendar.next_page();
            self.after_navigation();
        }
    }

    /// Feed window size changes into the debouncer and apply settled ones
    fn track_resize(&mut self, ctx: &Context, now: Instant) {
        let size = ctx.screen_rect().size();
        let size = (size.x, size.y);

        match self.last_window_size {
            Some(last) if last != size => self.debouncer.note_resize(size, now),
            None => self.last_window_size = Some(size),
            _ => {}
        }
        self.last_window_size = Some(size);

        if let Some((width, height)) = self.debouncer.poll(now) {
            self.apply_resize(width, height);
        }
    }

    /// Closing the window hides it to the tray unless Exit was chosen.
    /// Without a tray the close request goes through as a normal exit.
    fn handle_close_request(&mut self, ctx: &Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.exiting && self.tray.is_some() {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            self.hide_window(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::ui::components::settings_modal::SettingsForm;
    use chrono::NaiveDate;

    fn escape_frame(ctx: &Context, app: &mut MiniCalendarApp) {
        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key: Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.handle_keys(ctx));
    }

    #[test]
    fn test_escape_dismisses_dialogs_before_touching_selection() {
        let mut app = MiniCalendarApp::without_tray(Settings::default());
        app.window_visible = true;
        app.selection.begin_drag(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        app.selection.end_drag();
        app.settings_form = Some(SettingsForm::from_settings(&app.settings));
        app.about_open = true;

        let ctx = Context::default();

        // First Escape only closes the dialogs
        escape_frame(&ctx, &mut app);
        assert!(app.settings_form.is_none());
        assert!(!app.about_open);
        assert!(!app.selection.is_empty());
        assert!(app.window_visible);

        // With no dialog open, Escape clears the selection as usual
        escape_frame(&ctx, &mut app);
        assert!(app.selection.is_empty());
        assert!(app.window_visible);
    }
}
