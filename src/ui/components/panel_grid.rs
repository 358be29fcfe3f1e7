//! # Panel Grid Module
//!
//! Draws the pooled month panels and routes day-cell pointer events into the
//! selection state machine.
//!
//! ## Interaction model:
//! - primary press on a day cell starts a drag (anchor = that day)
//! - while dragging, the cell under the pointer updates the active endpoint
//! - primary release freezes the range
//!
//! Cells are painted from the data `PanelPool::configure_window` prepared;
//! nothing is computed per cell here beyond hit testing.

use chrono::NaiveDate;
use egui::{Align2, FontId, Rect, Sense, Stroke, Ui, Vec2};

use crate::calendar::DAY_ABBR;
use crate::ui::app_state::MiniCalendarApp;
use crate::ui::components::month_panel::{DayCell, MonthPanel};
use crate::ui::components::theme::Theme;
use crate::ui::state::selection_state::SelectionPhase;

/// Cell and panel geometry in logical pixels
pub const CELL_W: f32 = 22.0;
pub const CELL_H: f32 = 20.0;
pub const WEEK_COL_W: f32 = 26.0;
pub const HEADER_H: f32 = 22.0;
pub const DOW_ROW_H: f32 = 18.0;
pub const PANEL_PAD: f32 = 6.0;
pub const PANEL_GAP: f32 = 4.0;

/// Full pixel size of one month panel
pub fn panel_size() -> Vec2 {
    Vec2::new(
        WEEK_COL_W + 7.0 * CELL_W + 2.0 * PANEL_PAD,
        HEADER_H + DOW_ROW_H + 6.0 * CELL_H + 2.0 * PANEL_PAD,
    )
}

impl MiniCalendarApp {
    /// Render all visible month panels in a `cols × rows` grid and feed the
    /// resulting pointer events into the selection controller.
    pub fn render_month_panels(&mut self, ui: &mut Ui) {
        let theme = *self.theme();
        let cols = self.layout.cols;
        let mut hovered_day: Option<NaiveDate> = None;

        egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            let mut panels = self.pool.visible_panels().peekable();
            let mut row_index = 0;
            while panels.peek().is_some() {
                ui.horizontal(|ui| {
                    for panel in panels.by_ref().take(cols) {
                        if let Some(day) = draw_month_panel(ui, panel, &theme) {
                            hovered_day = Some(day);
                        }
                        ui.add_space(PANEL_GAP);
                    }
                });
                ui.add_space(PANEL_GAP);
                row_index += 1;
                if row_index >= self.layout.rows {
                    break;
                }
            }
        });

        self.route_pointer_events(ui, hovered_day);
    }

    /// Translate raw pointer state plus the hovered day into selection
    /// transitions (press → drag → release).
    fn route_pointer_events(&mut self, ui: &Ui, hovered_day: Option<NaiveDate>) {
        let (pressed, released) = ui.input(|i| {
            (i.pointer.primary_pressed(), i.pointer.primary_released())
        });

        if pressed {
            if let Some(day) = hovered_day {
                self.selection.begin_drag(day);
                self.needs_reconfigure = true;
            }
        }

        if self.selection.phase == SelectionPhase::Dragging {
            if let Some(day) = hovered_day {
                if self.selection.active != Some(day) {
                    self.selection.drag_over(day);
                    self.needs_reconfigure = true;
                }
            }
            if released {
                self.selection.end_drag();
            }
        }
    }
}

/// Draw one month panel; returns the day under the pointer, if any
fn draw_month_panel(ui: &mut Ui, panel: &MonthPanel, theme: &Theme) -> Option<NaiveDate> {
    let (panel_rect, _) = ui.allocate_exact_size(panel_size(), Sense::hover());
    if !ui.is_rect_visible(panel_rect) {
        return None;
    }

    let painter = ui.painter();
    painter.rect_filled(panel_rect, 2.0, theme.background);

    // Month header strip
    let inner = panel_rect.shrink(PANEL_PAD);
    let header_rect = Rect::from_min_size(inner.min, Vec2::new(inner.width(), HEADER_H));
    painter.rect_filled(header_rect, 2.0, theme.header_background);
    painter.text(
        header_rect.center(),
        Align2::CENTER_CENTER,
        &panel.title,
        FontId::proportional(13.0),
        theme.header_text,
    );

    // Weekday header row: "Wk" column + Mon..Sun
    let dow_top = inner.min.y + HEADER_H;
    painter.text(
        egui::pos2(inner.min.x + WEEK_COL_W / 2.0, dow_top + DOW_ROW_H / 2.0),
        Align2::CENTER_CENTER,
        "Wk",
        FontId::proportional(11.0),
        theme.week_number_text,
    );
    for (col, abbr) in DAY_ABBR.iter().enumerate() {
        let x = inner.min.x + WEEK_COL_W + (col as f32 + 0.5) * CELL_W;
        let color = if col >= 5 { theme.weekend_text } else { theme.header_text };
        painter.text(
            egui::pos2(x, dow_top + DOW_ROW_H / 2.0),
            Align2::CENTER_CENTER,
            *abbr,
            FontId::proportional(11.0),
            color,
        );
    }

    // Week rows
    let mut hovered = None;
    let grid_top = dow_top + DOW_ROW_H;
    for (row, cells) in panel.cells.iter().enumerate() {
        let y = grid_top + row as f32 * CELL_H;
        let week_label = &panel.week_labels[row];
        if !week_label.is_empty() {
            ui.painter().text(
                egui::pos2(inner.min.x + WEEK_COL_W / 2.0, y + CELL_H / 2.0),
                Align2::CENTER_CENTER,
                week_label,
                FontId::proportional(10.0),
                theme.week_number_text,
            );
        }
        for (col, cell) in cells.iter().enumerate() {
            let cell_rect = Rect::from_min_size(
                egui::pos2(inner.min.x + WEEK_COL_W + col as f32 * CELL_W, y),
                Vec2::new(CELL_W, CELL_H),
            );
            if let Some(day) = draw_day_cell(ui, cell_rect, cell, panel, row, col, theme) {
                hovered = Some(day);
            }
        }
    }
    hovered
}

/// Draw one day cell; returns its date when the pointer is over it
fn draw_day_cell(
    ui: &mut Ui,
    rect: Rect,
    cell: &DayCell,
    panel: &MonthPanel,
    row: usize,
    col: usize,
    theme: &Theme,
) -> Option<NaiveDate> {
    let date = cell.date?;

    // Background: single fill or stacked holiday stripes
    match cell.stripes.len() {
        0 => {}
        1 => {
            ui.painter().rect_filled(rect.shrink(0.5), 2.0, cell.stripes[0]);
        }
        n => {
            let stripe_h = rect.height() / n as f32;
            for (i, color) in cell.stripes.iter().enumerate() {
                let stripe = Rect::from_min_size(
                    egui::pos2(rect.min.x, rect.min.y + i as f32 * stripe_h),
                    Vec2::new(rect.width(), stripe_h),
                );
                ui.painter().rect_filled(stripe.shrink2(Vec2::new(0.5, 0.0)), 0.0, *color);
            }
        }
    }

    // Readability outline when several holiday stripes overlap the number
    if cell.outlined {
        ui.painter().rect_stroke(
            rect.shrink(1.0),
            2.0,
            Stroke::new(1.0, theme.multi_holiday_outline),
        );
    }

    let font = FontId::proportional(if cell.bold { 12.5 } else { 11.0 });
    ui.painter().text(rect.center(), Align2::CENTER_CENTER, &cell.label, font, cell.text_color);

    // Hit test + holiday tooltip. `hovered()` is suppressed on every widget
    // except the one being dragged, which would pin the reported day to the
    // drag anchor; `contains_pointer()` keeps tracking the pointer.
    let id = ui.id().with((panel.year, panel.month, row, col));
    let response = ui.interact(rect, id, Sense::click_and_drag());
    let response = match &cell.tooltip {
        Some(text) => response.on_hover_text(text.clone()),
        None => response,
    };
    response.contains_pointer().then_some(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::theme::LIGHT;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn test_panel() -> MonthPanel {
        MonthPanel {
            year: 2024,
            month: 1,
            visible: true,
            title: "January 2024".to_string(),
            week_labels: Default::default(),
            cells: std::array::from_fn(|_| std::array::from_fn(|_| DayCell::default())),
        }
    }

    fn test_cell(day: u32) -> DayCell {
        DayCell {
            date: Some(d(day)),
            label: day.to_string(),
            ..Default::default()
        }
    }

    fn cell_center(col: usize) -> egui::Pos2 {
        egui::pos2(20.0 + col as f32 * CELL_W + CELL_W / 2.0, 20.0 + CELL_H / 2.0)
    }

    fn button_event(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Run one frame with the given pointer events; two day cells are drawn
    /// side by side and the day reported under the pointer is returned.
    fn drive_frame(
        ctx: &egui::Context,
        panel: &MonthPanel,
        events: Vec<egui::Event>,
    ) -> Option<NaiveDate> {
        let mut hovered = None;
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(
                egui::pos2(0.0, 0.0),
                Vec2::new(200.0, 200.0),
            )),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                for (col, day) in [1u32, 2].into_iter().enumerate() {
                    let rect = Rect::from_min_size(
                        egui::pos2(20.0 + col as f32 * CELL_W, 20.0),
                        Vec2::new(CELL_W, CELL_H),
                    );
                    if let Some(date) = draw_day_cell(ui, rect, &test_cell(day), panel, 0, col, &LIGHT) {
                        hovered = Some(date);
                    }
                }
            });
        });
        hovered
    }

    #[test]
    fn test_hovered_day_follows_pointer_through_a_drag() {
        let ctx = egui::Context::default();
        let panel = test_panel();

        // Press on day 1
        let hovered = drive_frame(
            &ctx,
            &panel,
            vec![egui::Event::PointerMoved(cell_center(0)), button_event(cell_center(0), true)],
        );
        assert_eq!(hovered, Some(d(1)));

        // Move onto day 2 with the button still held: the report must follow
        // the pointer instead of staying pinned to the pressed cell
        let hovered = drive_frame(&ctx, &panel, vec![egui::Event::PointerMoved(cell_center(1))]);
        assert_eq!(hovered, Some(d(2)));

        // Holding still keeps reporting the cell under the pointer
        let hovered = drive_frame(&ctx, &panel, vec![]);
        assert_eq!(hovered, Some(d(2)));

        // Release over day 2
        let hovered = drive_frame(&ctx, &panel, vec![button_event(cell_center(1), false)]);
        assert_eq!(hovered, Some(d(2)));
    }
}
