//! Calendar date-picker state.
//!
//! `CalendarWidget` owns the displayed month, the first-weekday convention and
//! a single optional selection. It knows nothing about pixels: hosts draw from
//! [`CalendarWidget::render_data`] and forward input events to the navigation
//! and selection methods.

use chrono::Weekday;

use super::month_grid::{MonthGrid, GRID_COLUMNS};
use super::names::{CalendarNames, EnglishNames};
use crate::models::civil_date::{CivilDate, DateError, YearMonth};
use crate::utils::date::today;

/// Everything a host needs to draw the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderData<'a> {
    pub month_label: String,
    pub weekday_header: [String; GRID_COLUMNS],
    pub grid: &'a MonthGrid,
}

#[derive(Debug, Clone)]
pub struct CalendarWidget<N: CalendarNames = EnglishNames> {
    displayed: YearMonth,
    first_weekday: Weekday,
    selection: Option<CivilDate>,
    grid: MonthGrid,
    names: N,
}

impl CalendarWidget<EnglishNames> {
    /// Create a widget showing `month` of `year`
    ///
    /// # Panics
    /// Panics if `month` is outside 1-12. An invalid initial month is an
    /// integration bug; use [`CalendarWidget::try_new`] to check instead.
    pub fn new(year: i32, month: u32, first_weekday: Weekday) -> Self {
        match Self::try_new(year, month, first_weekday) {
            Ok(widget) => widget,
            Err(err) => panic!("invalid initial calendar month: {err}"),
        }
    }

    pub fn try_new(year: i32, month: u32, first_weekday: Weekday) -> Result<Self, DateError> {
        let displayed = YearMonth::new(year, month)?;
        Ok(Self::showing(displayed, first_weekday, EnglishNames))
    }

    /// Widget opened on the current real-world month
    pub fn for_today(first_weekday: Weekday) -> Self {
        Self::showing(today().year_month(), first_weekday, EnglishNames)
    }
}

impl<N: CalendarNames> CalendarWidget<N> {
    fn showing(displayed: YearMonth, first_weekday: Weekday, names: N) -> Self {
        Self {
            displayed,
            first_weekday,
            selection: None,
            grid: MonthGrid::for_month(displayed, first_weekday),
            names,
        }
    }

    /// Replace the naming source, keeping all state
    pub fn with_names<M: CalendarNames>(self, names: M) -> CalendarWidget<M> {
        CalendarWidget {
            displayed: self.displayed,
            first_weekday: self.first_weekday,
            selection: self.selection,
            grid: self.grid,
            names,
        }
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn displayed_year(&self) -> i32 {
        self.displayed.year()
    }

    pub fn displayed_month(&self) -> u32 {
        self.displayed.month()
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn names(&self) -> &N {
        &self.names
    }

    pub fn render_data(&self) -> RenderData<'_> {
        RenderData {
            month_label: self.grid.month_label(&self.names),
            weekday_header: self.grid.weekday_header(&self.names),
            grid: &self.grid,
        }
    }

    fn show_month(&mut self, target: Option<YearMonth>) {
        let Some(target) = target else {
            log::debug!("Calendar navigation past {} ignored", self.displayed);
            return;
        };
        if target != self.displayed {
            self.displayed = target;
            self.grid = MonthGrid::for_month(target, self.first_weekday);
        }
    }

    /// Show the month before the displayed one.
    ///
    /// Undone by [`Self::go_to_next_month`], except from January of
    /// `i32::MIN`, where this call is a no-op.
    pub fn go_to_previous_month(&mut self) {
        self.show_month(self.displayed.pred());
    }

    /// Show the month after the displayed one.
    ///
    /// Undone by [`Self::go_to_previous_month`], except from December of
    /// `i32::MAX`, where this call is a no-op.
    pub fn go_to_next_month(&mut self) {
        self.show_month(self.displayed.succ());
    }

    pub fn go_to_previous_year(&mut self) {
        self.show_month(self.displayed.shift_years(-1));
    }

    pub fn go_to_next_year(&mut self) {
        self.show_month(self.displayed.shift_years(1));
    }

    pub fn go_to_month(&mut self, year_month: YearMonth) {
        self.show_month(Some(year_month));
    }

    pub fn go_to_today(&mut self) {
        self.show_month(Some(today().year_month()));
    }

    /// Change the leftmost column's weekday and rebuild the grid.
    pub fn set_first_weekday(&mut self, first_weekday: Weekday) {
        if first_weekday != self.first_weekday {
            self.first_weekday = first_weekday;
            self.grid = MonthGrid::for_month(self.displayed, first_weekday);
        }
    }

    /// Select the date under a grid cell of the displayed month.
    ///
    /// Returns the new selection, or `None` when the coordinate is padding or
    /// outside the grid; in that case the current selection is left alone.
    pub fn select_cell(&mut self, row: usize, column: usize) -> Option<CivilDate> {
        let date = self.grid.date_at(row, column)?;
        log::debug!("Calendar selection set to {}", date);
        self.selection = Some(date);
        Some(date)
    }

    /// Select an arbitrary date and display its month.
    pub fn select_date(&mut self, date: CivilDate) {
        self.selection = Some(date);
        self.show_month(Some(date.year_month()));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn current_selection(&self) -> Option<CivilDate> {
        self.selection
    }

    /// Whether the cell shows the selected date
    pub fn is_selected_cell(&self, row: usize, column: usize) -> bool {
        match self.selection {
            Some(selected) => self.grid.date_at(row, column) == Some(selected),
            None => false,
        }
    }
}
