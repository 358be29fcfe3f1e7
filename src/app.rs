//! # App Module
//!
//! Entry point re-exports for the calendar application. `main` pulls the
//! app struct from here; everything else lives under `crate::ui`.

pub use crate::ui::app_state::MiniCalendarApp;
