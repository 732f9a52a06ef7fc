//! Fixed 6x7 day grid for one month.
//!
//! The grid always has six rows so hosts can lay it out at a constant height.
//! Cells before the first and after the last day of the month are `Empty`.

use chrono::Weekday;

use super::names::CalendarNames;
use crate::models::civil_date::{CivilDate, DateError, YearMonth};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLUMNS: usize = 7;

/// One slot in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthGridCell {
    /// Padding outside the displayed month
    Empty,
    /// Day of month, 1-31
    Day(u32),
}

impl MonthGridCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            MonthGridCell::Empty => None,
            MonthGridCell::Day(day) => Some(*day),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MonthGridCell::Empty)
    }
}

pub type MonthGridRow = [MonthGridCell; GRID_COLUMNS];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year_month: YearMonth,
    first_weekday: Weekday,
    rows: [MonthGridRow; GRID_ROWS],
}

impl MonthGrid {
    /// Build the grid for `month` of `year`; fails only if `month` is not 1-12.
    pub fn build(year: i32, month: u32, first_weekday: Weekday) -> Result<Self, DateError> {
        let year_month = YearMonth::new(year, month)?;
        Ok(Self::for_month(year_month, first_weekday))
    }

    pub fn for_month(year_month: YearMonth, first_weekday: Weekday) -> Self {
        let offset = leading_blanks(year_month.first_day().weekday(), first_weekday);
        let day_count = year_month.day_count() as usize;

        let mut rows = [[MonthGridCell::Empty; GRID_COLUMNS]; GRID_ROWS];
        for index in 0..day_count {
            let slot = offset + index;
            rows[slot / GRID_COLUMNS][slot % GRID_COLUMNS] = MonthGridCell::Day(index as u32 + 1);
        }

        Self {
            year_month,
            first_weekday,
            rows,
        }
    }

    pub fn year_month(&self) -> YearMonth {
        self.year_month
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn rows(&self) -> &[MonthGridRow; GRID_ROWS] {
        &self.rows
    }

    /// Cell at a grid coordinate, or `None` outside the 6x7 grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<MonthGridCell> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Resolve a coordinate to a date in the displayed month.
    pub fn date_at(&self, row: usize, column: usize) -> Option<CivilDate> {
        let day = self.cell(row, column)?.day()?;
        self.year_month.with_day(day).ok()
    }

    /// Grid coordinate of `day`, if the month has it.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        if day == 0 || day > self.year_month.day_count() {
            return None;
        }
        let offset = leading_blanks(self.year_month.first_day().weekday(), self.first_weekday);
        let slot = offset + day as usize - 1;
        Some((slot / GRID_COLUMNS, slot % GRID_COLUMNS))
    }

    /// Number of non-empty cells
    pub fn day_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Weekday shown in each column, starting from the configured first weekday.
    pub fn columns(&self) -> [Weekday; GRID_COLUMNS] {
        let mut columns = [self.first_weekday; GRID_COLUMNS];
        for index in 1..GRID_COLUMNS {
            columns[index] = columns[index - 1].succ();
        }
        columns
    }

    pub fn weekday_header(&self, names: &impl CalendarNames) -> [String; GRID_COLUMNS] {
        self.columns().map(|weekday| names.weekday_abbrev(weekday))
    }

    pub fn month_label(&self, names: &impl CalendarNames) -> String {
        names.month_label(self.year_month)
    }
}

/// Columns to skip before day 1 when `first_weekday` is column 0.
fn leading_blanks(first_of_month: Weekday, first_weekday: Weekday) -> usize {
    let first = first_of_month.num_days_from_monday();
    let start = first_weekday.num_days_from_monday();
    ((first + 7 - start) % 7) as usize
}
