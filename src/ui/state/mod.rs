//! # UI State Module
//!
//! Pure state types behind the calendar window. Nothing in here touches
//! egui; every type can be driven and asserted from plain unit tests.
//!
//! ## Module Organization:
//! - `calendar_state` - Anchor month and the visible month window
//! - `selection_state` - Drag-to-select state machine
//! - `layout_state` - Grid fitting and the resize debouncer

pub mod calendar_state;
pub mod layout_state;
pub mod selection_state;

pub use calendar_state::*;
pub use layout_state::*;
pub use selection_state::*;
