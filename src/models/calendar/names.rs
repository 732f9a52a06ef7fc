//! Month and weekday naming for calendar headers.

use chrono::{Month, Weekday};

use crate::models::civil_date::YearMonth;

/// Source of the human-readable labels a calendar shows.
///
/// Swap the implementation to localize headers; grid layout does not depend on it.
pub trait CalendarNames {
    /// Full name of `month` (1-12)
    fn month_name(&self, month: u32) -> String;

    /// Short column-header name for `weekday`
    fn weekday_abbrev(&self, weekday: Weekday) -> String;

    /// Caption shown above the grid, e.g. "February 2024"
    fn month_label(&self, year_month: YearMonth) -> String {
        format!(
            "{} {}",
            self.month_name(year_month.month()),
            year_month.year()
        )
    }
}

/// English names, with two-letter weekday headers ("Mo", "Tu", ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishNames;

impl CalendarNames for EnglishNames {
    fn month_name(&self, month: u32) -> String {
        u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name().to_string())
            .unwrap_or_default()
    }

    fn weekday_abbrev(&self, weekday: Weekday) -> String {
        let abbrev = match weekday {
            Weekday::Mon => "Mo",
            Weekday::Tue => "Tu",
            Weekday::Wed => "We",
            Weekday::Thu => "Th",
            Weekday::Fri => "Fr",
            Weekday::Sat => "Sa",
            Weekday::Sun => "Su",
        };
        abbrev.to_string()
    }
}
