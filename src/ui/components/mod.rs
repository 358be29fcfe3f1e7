//! # UI Components Module
//!
//! This module organizes all UI components of the calendar window.
//!
//! ## Module Organization:
//! - `theme` - Light / dark color roles and hex conversion helpers
//! - `month_panel` - Pooled month panels with precomputed day cells
//! - `panel_grid` - Grid rendering and pointer routing for the panels
//! - `nav_bar` - Year / month navigation and the Today button
//! - `footer` - Status line with today and live selection counts
//! - `settings_modal` - Settings dialog (theme, holidays, autostart)
//! - `about_modal` - About dialog and the update check link

pub mod about_modal;
pub mod footer;
pub mod month_panel;
pub mod nav_bar;
pub mod panel_grid;
pub mod settings_modal;
pub mod theme;

pub use theme::*;
