// Test fixtures - reusable test data
// Provides consistent dates and widgets across all test files

#![allow(dead_code)]

use chrono::Weekday;
use weather_history::models::calendar::CalendarWidget;
use weather_history::models::civil_date::CivilDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> CivilDate {
        CivilDate::new(2024, 2, 29).unwrap()
    }

    /// Returns Mar 15, 2024
    pub fn ides_of_march_2024() -> CivilDate {
        CivilDate::new(2024, 3, 15).unwrap()
    }

    /// Returns Oct 13, 2016, the day the Red Butte station came online
    pub fn station_install_2016() -> CivilDate {
        CivilDate::new(2016, 10, 13).unwrap()
    }
}

/// Sample widgets for testing
pub mod widgets {
    use super::*;

    /// Monday-first widget showing `month` of `year`
    pub fn monday_first(year: i32, month: u32) -> CalendarWidget {
        CalendarWidget::new(year, month, Weekday::Mon)
    }

    /// Sunday-first widget showing `month` of `year`
    pub fn sunday_first(year: i32, month: u32) -> CalendarWidget {
        CalendarWidget::new(year, month, Weekday::Sun)
    }
}
