pub mod state;
pub mod components;
pub mod app_state;
pub mod app_coordinator;

pub use app_state::*;
