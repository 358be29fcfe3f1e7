//! # Calendar Module
//!
//! Pure calendar arithmetic and holiday data, with no UI dependencies.
//!
//! ## Responsibilities:
//! - Month grids and ISO week numbering (`logic`)
//! - Public holiday rules for Switzerland, Germany, and China (`holidays`)

pub mod holidays;
pub mod logic;

pub use holidays::*;
pub use logic::*;
