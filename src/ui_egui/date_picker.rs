//! Date picker window.
//!
//! Draws a [`CalendarWidget`] as a floating window and turns clicks into
//! widget operations. Each open picker owns its own widget.

use chrono::Weekday;
use egui::{Color32, Context, RichText};

use crate::models::calendar::{CalendarWidget, MonthGridCell};
use crate::models::civil_date::CivilDate;
use crate::utils::date::today;

/// Which date of the range a picker edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Start,
    End,
}

impl PickerTarget {
    fn title(&self) -> &'static str {
        match self {
            PickerTarget::Start => "📅 Choose start date",
            PickerTarget::End => "📅 Choose end date",
        }
    }
}

/// Outcome of one frame of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerAction {
    /// Still open
    None,
    /// User pressed OK with this selection
    Commit(Option<CivilDate>),
    /// Window closed without committing
    Cancel,
}

enum Navigation {
    PreviousYear,
    PreviousMonth,
    Today,
    NextMonth,
    NextYear,
}

pub struct DatePickerDialog {
    target: PickerTarget,
    widget: CalendarWidget,
}

impl DatePickerDialog {
    /// Open on `current`'s month with it selected, or on today's month.
    pub fn open(target: PickerTarget, current: Option<CivilDate>, first_weekday: Weekday) -> Self {
        let mut widget = CalendarWidget::for_today(first_weekday);
        if let Some(date) = current {
            widget.select_date(date);
        }
        Self { target, widget }
    }

    pub fn target(&self) -> PickerTarget {
        self.target
    }

    pub fn widget(&self) -> &CalendarWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut CalendarWidget {
        &mut self.widget
    }

    pub fn render(&mut self, ctx: &Context) -> DatePickerAction {
        let today = today();
        let mut navigation = None;
        let mut clicked_cell = None;
        let mut clear = false;
        let mut commit = false;
        let mut is_open = true;

        egui::Window::new(self.target.title())
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .open(&mut is_open)
            .show(ctx, |ui| {
                ui.set_max_width(220.0);
                let data = self.widget.render_data();

                ui.horizontal(|ui| {
                    if ui.small_button("◀◀").on_hover_text("Previous year").clicked() {
                        navigation = Some(Navigation::PreviousYear);
                    }
                    if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                        navigation = Some(Navigation::PreviousMonth);
                    }
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            if ui
                                .selectable_label(false, data.month_label.as_str())
                                .on_hover_text("Click to go to today")
                                .clicked()
                            {
                                navigation = Some(Navigation::Today);
                            }
                        },
                    );
                    if ui.small_button("▶").on_hover_text("Next month").clicked() {
                        navigation = Some(Navigation::NextMonth);
                    }
                    if ui.small_button("▶▶").on_hover_text("Next year").clicked() {
                        navigation = Some(Navigation::NextYear);
                    }
                });
                ui.separator();

                egui::Grid::new("date_picker_grid")
                    .num_columns(7)
                    .spacing([4.0, 2.0])
                    .min_col_width(24.0)
                    .show(ui, |ui| {
                        for name in &data.weekday_header {
                            ui.label(RichText::new(name).small().strong());
                        }
                        ui.end_row();

                        for (row, cells) in data.grid.rows().iter().enumerate() {
                            for (column, cell) in cells.iter().enumerate() {
                                let MonthGridCell::Day(day) = cell else {
                                    ui.label("");
                                    continue;
                                };

                                let is_today = data.grid.date_at(row, column) == Some(today);
                                let text = if is_today {
                                    RichText::new(day.to_string())
                                        .strong()
                                        .color(Color32::from_rgb(50, 150, 50))
                                } else {
                                    RichText::new(day.to_string())
                                };

                                let is_selected = self.widget.is_selected_cell(row, column);
                                if ui.selectable_label(is_selected, text).clicked() {
                                    clicked_cell = Some((row, column));
                                }
                            }
                            ui.end_row();
                        }
                    });
                ui.separator();

                ui.horizontal(|ui| {
                    let selected = self
                        .widget
                        .current_selection()
                        .map(|date| date.to_string())
                        .unwrap_or_else(|| "No date selected".to_string());
                    ui.label(RichText::new(selected).weak());
                });
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        commit = true;
                    }
                    if ui.button("Clear").clicked() {
                        clear = true;
                    }
                });
            });

        match navigation {
            Some(Navigation::PreviousYear) => self.widget.go_to_previous_year(),
            Some(Navigation::PreviousMonth) => self.widget.go_to_previous_month(),
            Some(Navigation::Today) => self.widget.go_to_today(),
            Some(Navigation::NextMonth) => self.widget.go_to_next_month(),
            Some(Navigation::NextYear) => self.widget.go_to_next_year(),
            None => {}
        }
        if let Some((row, column)) = clicked_cell {
            self.widget.select_cell(row, column);
        }
        if clear {
            self.widget.clear_selection();
        }

        if commit {
            DatePickerAction::Commit(self.widget.current_selection())
        } else if !is_open {
            DatePickerAction::Cancel
        } else {
            DatePickerAction::None
        }
    }
}
