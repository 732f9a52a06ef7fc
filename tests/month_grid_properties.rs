// Property-based tests for month grid layout and navigation

use chrono::Weekday;
use proptest::prelude::*;
use weather_history::models::calendar::{CalendarWidget, MonthGrid, GRID_COLUMNS, GRID_ROWS};
use weather_history::models::civil_date::{days_in_month, is_leap_year, CivilDate};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn any_weekday() -> impl Strategy<Value = Weekday> {
    (0..7usize).prop_map(|index| WEEKDAYS[index])
}

proptest! {
    /// Property: every grid is 6x7 and shows exactly the month's days
    #[test]
    fn prop_grid_shape_and_day_count(
        year in -100_000..100_000i32,
        month in 1..=12u32,
        first_weekday in any_weekday(),
    ) {
        let grid = MonthGrid::build(year, month, first_weekday).unwrap();

        prop_assert_eq!(grid.rows().len(), GRID_ROWS);
        prop_assert!(grid.rows().iter().all(|row| row.len() == GRID_COLUMNS));
        prop_assert_eq!(grid.day_count() as u32, days_in_month(year, month).unwrap());
    }

    /// Property: days appear in order 1..=N reading left-to-right, top-to-bottom
    #[test]
    fn prop_days_are_sequential(
        year in 1..3000i32,
        month in 1..=12u32,
        first_weekday in any_weekday(),
    ) {
        let grid = MonthGrid::build(year, month, first_weekday).unwrap();
        let days: Vec<u32> = grid.rows().iter().flatten().filter_map(|cell| cell.day()).collect();
        let expected: Vec<u32> = (1..=days_in_month(year, month).unwrap()).collect();
        prop_assert_eq!(days, expected);
    }

    /// Property: each day sits under the column of its own weekday
    #[test]
    fn prop_days_align_with_weekday_columns(
        year in 1..3000i32,
        month in 1..=12u32,
        first_weekday in any_weekday(),
    ) {
        let grid = MonthGrid::build(year, month, first_weekday).unwrap();
        let columns = grid.columns();
        for row in 0..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                if let Some(date) = grid.date_at(row, column) {
                    prop_assert_eq!(date.weekday(), columns[column]);
                }
            }
        }
    }

    /// Property: February has 29 days exactly in Gregorian leap years
    #[test]
    fn prop_february_follows_leap_rule(year in -10_000..10_000i32) {
        let grid = MonthGrid::build(year, 2, Weekday::Mon).unwrap();
        let expected = if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 { 29 } else { 28 };
        prop_assert_eq!(grid.day_count(), expected);
        prop_assert_eq!(is_leap_year(year), expected == 29);
    }

    /// Property: next then previous (and vice versa) returns to the same month
    #[test]
    fn prop_navigation_round_trip(
        year in -1_000_000..1_000_000i32,
        month in 1..=12u32,
    ) {
        let mut widget = CalendarWidget::new(year, month, Weekday::Mon);
        let start = widget.displayed();

        widget.go_to_next_month();
        widget.go_to_previous_month();
        prop_assert_eq!(widget.displayed(), start);

        widget.go_to_previous_month();
        widget.go_to_next_month();
        prop_assert_eq!(widget.displayed(), start);
    }

    /// Property: navigation never disturbs the selection
    #[test]
    fn prop_selection_persists(
        year in 1900..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        steps in proptest::collection::vec(any::<bool>(), 0..30),
    ) {
        let date = CivilDate::new(year, month, day).unwrap();
        let mut widget = CalendarWidget::new(year, month, Weekday::Sun);
        widget.select_date(date);

        for forward in steps {
            if forward {
                widget.go_to_next_month();
            } else {
                widget.go_to_previous_month();
            }
        }

        prop_assert_eq!(widget.current_selection(), Some(date));
    }
}
