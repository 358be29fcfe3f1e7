//! # Theme Configuration
//!
//! Centralized color configuration for the mini calendar.
//!
//! Exactly two variants exist (light and dark), selected by the persisted
//! `dark_mode` flag. All rendering code takes colors from the active theme
//! rather than hardcoding them, so the variants stay in sync.

use egui::Color32;

/// Named color roles for the calendar UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Window and panel background
    pub background: Color32,
    /// Month header strip background
    pub header_background: Color32,
    /// Month header text
    pub header_text: Color32,
    /// Regular day-number text
    pub day_text: Color32,
    /// Saturday/Sunday day-number text
    pub weekend_text: Color32,
    /// "Wk" column and week-number text
    pub week_number_text: Color32,
    /// Today's cell fill and text
    pub today_background: Color32,
    pub today_text: Color32,
    /// Selected-range cell fill and text
    pub selection_background: Color32,
    pub selection_text: Color32,
    /// Day-number text on top of holiday stripes
    pub holiday_text: Color32,
    /// Outline around day numbers when several holiday stripes overlap
    pub multi_holiday_outline: Color32,
    /// Nav arrows and the Today button accent
    pub accent: Color32,
    /// Footer text
    pub footer_text: Color32,
}

/// Light theme - the classic white calendar look
pub const LIGHT: Theme = Theme {
    background: Color32::WHITE,
    header_background: Color32::from_rgb(243, 243, 243),
    header_text: Color32::from_rgb(51, 51, 51),
    day_text: Color32::BLACK,
    weekend_text: Color32::from_rgb(204, 0, 0),
    week_number_text: Color32::from_rgb(136, 136, 136),
    today_background: Color32::from_rgb(0, 120, 212),
    today_text: Color32::WHITE,
    selection_background: Color32::from_rgb(179, 215, 242),
    selection_text: Color32::BLACK,
    holiday_text: Color32::WHITE,
    multi_holiday_outline: Color32::BLACK,
    accent: Color32::from_rgb(0, 120, 212),
    footer_text: Color32::from_rgb(85, 85, 85),
};

/// Dark theme
pub const DARK: Theme = Theme {
    background: Color32::from_rgb(32, 32, 32),
    header_background: Color32::from_rgb(48, 48, 48),
    header_text: Color32::from_rgb(220, 220, 220),
    day_text: Color32::from_rgb(230, 230, 230),
    weekend_text: Color32::from_rgb(255, 110, 110),
    week_number_text: Color32::from_rgb(140, 140, 140),
    today_background: Color32::from_rgb(0, 120, 212),
    today_text: Color32::WHITE,
    selection_background: Color32::from_rgb(42, 84, 120),
    selection_text: Color32::WHITE,
    holiday_text: Color32::WHITE,
    multi_holiday_outline: Color32::WHITE,
    accent: Color32::from_rgb(90, 170, 255),
    footer_text: Color32::from_rgb(170, 170, 170),
};

impl Theme {
    /// Select the theme variant for the persisted dark-mode flag
    pub fn for_mode(dark_mode: bool) -> &'static Theme {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}

/// Parse an "#RRGGBB" string; invalid input maps to neutral gray
pub fn color_from_hex(hex: &str) -> Color32 {
    let stripped = hex.strip_prefix('#').unwrap_or(hex);
    if stripped.len() == 6 {
        if let Ok(value) = u32::from_str_radix(stripped, 16) {
            return Color32::from_rgb(
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            );
        }
    }
    Color32::from_rgb(0x88, 0x88, 0x88)
}

/// Format a color back into the "#RRGGBB" form used by the settings file
pub fn hex_from_color(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}
