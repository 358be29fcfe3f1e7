//! # Tray Module
//!
//! System-tray icon, menu, and week-number icon rendering.
//!
//! ## Responsibilities:
//! - Build the tray icon with its context menu (Show / Settings / About /
//!   Check for Updates / Exit)
//! - Render the current ISO week number into a 64×64 icon image and refresh
//!   it whenever the week rolls over
//! - Drain tray click and menu events into app-level commands each frame
//!
//! The tray crate delivers events through global channels; the app polls
//! them from the frame loop, so everything stays on the UI thread.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use image::{Rgba, RgbaImage};
use tray_icon::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};

use crate::calendar::iso_week;

/// Pixel size of the rendered tray icon
const ICON_SIZE: u32 = 64;

/// Commands produced by tray interaction, executed by the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    /// Left click or "Show Calendar": toggle main window visibility
    ToggleWindow,
    OpenSettings,
    OpenAbout,
    CheckForUpdates,
    Exit,
}

/// Tray icon wrapper that keeps the icon in sync with the ISO week
pub struct Tray {
    icon: TrayIcon,
    /// ISO week currently rendered into the icon
    current_week: u32,
}

impl Tray {
    /// Build the tray icon for the given date (usually today)
    pub fn new(today: NaiveDate) -> Result<Self> {
        let (_, week) = iso_week(today);

        let show = MenuItem::with_id("show", "Show Calendar", true, None);
        let settings = MenuItem::with_id("settings", "Settings", true, None);
        let about = MenuItem::with_id("about", "About", true, None);
        let updates = MenuItem::with_id("updates", "Check for Updates", true, None);
        let exit = MenuItem::with_id("exit", "Exit", true, None);

        let menu = Menu::with_items(&[
            &show,
            &settings,
            &about,
            &updates,
            &PredefinedMenuItem::separator(),
            &exit,
        ])
        .context("building tray menu")?;

        let icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(format!("Mini Calendar – CW {week}"))
            .with_icon(week_icon(week)?)
            .build()
            .context("creating tray icon")?;

        log::info!("📌 Tray icon created for ISO week {week}");
        Ok(Self { icon, current_week: week })
    }

    /// Re-render the icon if the ISO week changed since the last call
    pub fn refresh_week(&mut self, today: NaiveDate) {
        let (_, week) = iso_week(today);
        if week == self.current_week {
            return;
        }
        match week_icon(week) {
            Ok(icon) => {
                if let Err(e) = self.icon.set_icon(Some(icon)) {
                    log::warn!("⚠️ Failed to update tray icon: {e}");
                    return;
                }
                let _ = self.icon.set_tooltip(Some(format!("Mini Calendar – CW {week}")));
                log::info!("📌 Tray icon updated to ISO week {week}");
                self.current_week = week;
            }
            Err(e) => log::warn!("⚠️ Failed to render tray icon: {e}"),
        }
    }

    /// Drain all pending tray and menu events into commands
    pub fn poll_commands(&self) -> Vec<TrayCommand> {
        let mut commands = Vec::new();

        while let Ok(event) = TrayIconEvent::receiver().try_recv() {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                commands.push(TrayCommand::ToggleWindow);
            }
        }

        while let Ok(event) = MenuEvent::receiver().try_recv() {
            match event.id.0.as_str() {
                "show" => commands.push(TrayCommand::ToggleWindow),
                "settings" => commands.push(TrayCommand::OpenSettings),
                "about" => commands.push(TrayCommand::OpenAbout),
                "updates" => commands.push(TrayCommand::CheckForUpdates),
                "exit" => commands.push(TrayCommand::Exit),
                other => log::warn!("⚠️ Unknown tray menu id: {other}"),
            }
        }

        commands
    }
}

/// Build a tray `Icon` showing the week number as large black glyphs on white
fn week_icon(week: u32) -> Result<Icon> {
    let img = render_week_image(week);
    Icon::from_rgba(img.into_raw(), ICON_SIZE, ICON_SIZE).context("converting tray icon image")
}

/// Render the week number into a 64×64 RGBA image.
///
/// Digits come from a small 3×5 bitmap font scaled up to fill the icon, so
/// no font rasterization dependency is needed for two glyphs.
pub fn render_week_image(week: u32) -> RgbaImage {
    // Each digit row is 3 bits, most significant bit = left column
    const DIGITS: [[u8; 5]; 10] = [
        [0b111, 0b101, 0b101, 0b101, 0b111], // 0
        [0b010, 0b110, 0b010, 0b010, 0b111], // 1
        [0b111, 0b001, 0b111, 0b100, 0b111], // 2
        [0b111, 0b001, 0b111, 0b001, 0b111], // 3
        [0b101, 0b101, 0b111, 0b001, 0b001], // 4
        [0b111, 0b100, 0b111, 0b001, 0b111], // 5
        [0b111, 0b100, 0b111, 0b101, 0b111], // 6
        [0b111, 0b001, 0b001, 0b010, 0b010], // 7
        [0b111, 0b101, 0b111, 0b101, 0b111], // 8
        [0b111, 0b101, 0b111, 0b001, 0b111], // 9
    ];

    let white = Rgba([255u8, 255, 255, 255]);
    let black = Rgba([0u8, 0, 0, 255]);
    let mut img = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, white);

    let text = week.to_string();
    let n = text.len() as u32;
    // Glyphs are 3 wide, 5 tall, with a 1-column gap between digits
    let grid_w = n * 3 + n.saturating_sub(1);
    let grid_h = 5;
    let margin = 4;
    let scale = ((ICON_SIZE - margin) / grid_w).min((ICON_SIZE - margin) / grid_h).max(1);

    let x0 = (ICON_SIZE - grid_w * scale) / 2;
    let y0 = (ICON_SIZE - grid_h * scale) / 2;

    for (i, ch) in text.chars().enumerate() {
        let digit = ch.to_digit(10).unwrap_or(0) as usize;
        let glyph_x = x0 + i as u32 * 4 * scale;
        for (row, bits) in DIGITS[digit].iter().enumerate() {
            for col in 0..3u32 {
                if bits & (0b100 >> col) == 0 {
                    continue;
                }
                let px = glyph_x + col * scale;
                let py = y0 + row as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(px + dx, py + dy, black);
                    }
                }
            }
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_pixels(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p.0 == [0, 0, 0, 255]).count()
    }

    #[test]
    fn test_render_week_image_dimensions() {
        let img = render_week_image(42);
        assert_eq!(img.dimensions(), (ICON_SIZE, ICON_SIZE));
    }

    #[test]
    fn test_render_week_image_draws_glyphs() {
        assert!(black_pixels(&render_week_image(1)) > 0);
        assert!(black_pixels(&render_week_image(53)) > 0);
    }

    #[test]
    fn test_render_week_image_differs_per_week() {
        let a = render_week_image(1);
        let b = render_week_image(52);
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_two_digit_weeks_wider_than_one() {
        // Two digits should paint more glyph area than a lone "1"
        assert!(black_pixels(&render_week_image(11)) > black_pixels(&render_week_image(1)));
    }
}
