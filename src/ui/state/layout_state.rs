//! # Layout State Module
//!
//! Grid layout engine and resize debouncing.
//!
//! ## Responsibilities:
//! - Fit the number of month-panel columns/rows to the window size from a
//!   fixed panel size estimate, clamped to a configured maximum
//! - Coalesce rapid-fire resize events into a single recompute via a
//!   cancel-and-reschedule deadline polled from the frame loop
//!
//! Degenerate window sizes (zero or negative available space) clamp to the
//! 1×1 minimum instead of failing.

use std::time::{Duration, Instant};

/// Estimated pixel width of one month panel, including padding
pub const PANEL_EST_WIDTH: f32 = 196.0;

/// Estimated pixel height of one month panel, including padding
pub const PANEL_EST_HEIGHT: f32 = 188.0;

/// Horizontal window chrome (outer padding) excluded from panel space
pub const CHROME_WIDTH: f32 = 24.0;

/// Vertical window chrome (nav bar + footer) excluded from panel space
pub const CHROME_HEIGHT: f32 = 72.0;

/// Upper bounds keep the panel pool and per-frame work bounded
pub const MAX_GRID_COLS: usize = 6;
pub const MAX_GRID_ROWS: usize = 4;

/// Quiesce interval for resize bursts
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(30);

/// Columns × rows of month panels that fit the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Fit the grid to the available window size in logical pixels
    pub fn fit(avail_width: f32, avail_height: f32) -> Self {
        let usable_w = (avail_width - CHROME_WIDTH).max(0.0);
        let usable_h = (avail_height - CHROME_HEIGHT).max(0.0);
        Self {
            cols: ((usable_w / PANEL_EST_WIDTH) as usize).clamp(1, MAX_GRID_COLS),
            rows: ((usable_h / PANEL_EST_HEIGHT) as usize).clamp(1, MAX_GRID_ROWS),
        }
    }

    /// Total number of month panels
    pub fn panel_count(&self) -> usize {
        self.cols * self.rows
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { cols: 3, rows: 1 }
    }
}

/// Coalesces resize events: each new event supersedes the pending recompute
/// and restarts the quiesce deadline. Single-threaded, polled every frame.
#[derive(Debug, Default)]
pub struct ResizeDebouncer {
    pending: Option<(f32, f32)>,
    deadline: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resize event; cancels and reschedules any pending recompute
    pub fn note_resize(&mut self, size: (f32, f32), now: Instant) {
        self.pending = Some(size);
        self.deadline = Some(now + RESIZE_DEBOUNCE);
    }

    /// Return the settled size once the quiesce deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<(f32, f32)> {
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.deadline = None;
            self.pending.take()
        } else {
            None
        }
    }

    /// True while a recompute is still scheduled
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time until the pending recompute fires (for repaint scheduling)
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}
