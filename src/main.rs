use eframe::egui;
use log::info;

mod app;
mod autostart;
mod calendar;
mod settings;
mod tray;
mod ui;

use app::MiniCalendarApp;
use settings::Settings;
use ui::state::layout_state::{GridLayout, CHROME_HEIGHT, CHROME_WIDTH, PANEL_EST_HEIGHT, PANEL_EST_WIDTH};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Mini Calendar");

    let settings = Settings::load();

    // Restore the persisted geometry, or size the window for the default grid
    let (width, height) = match (settings.window_width, settings.window_height) {
        (Some(w), Some(h)) => (w, h),
        _ => default_window_size(),
    };

    let title = format!(
        "Mini Calendar  Day: {}",
        calendar::day_of_year(chrono::Local::now().date_naive())
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([
                CHROME_WIDTH + PANEL_EST_WIDTH,
                CHROME_HEIGHT + PANEL_EST_HEIGHT,
            ])
            .with_title(title)
            // Tray applet: the window stays hidden until the tray shows it
            .with_visible(false)
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching calendar window ({width:.0}×{height:.0})");
    eframe::run_native(
        "Mini Calendar",
        options,
        Box::new(move |_cc| {
            let app = MiniCalendarApp::new(settings);
            Ok(Box::new(app))
        }),
    )
}

/// Window size that fits the default grid exactly
fn default_window_size() -> (f32, f32) {
    let layout = GridLayout::default();
    (
        CHROME_WIDTH + layout.cols as f32 * PANEL_EST_WIDTH,
        CHROME_HEIGHT + layout.rows as f32 * PANEL_EST_HEIGHT,
    )
}
