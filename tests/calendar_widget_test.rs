// Integration tests for calendar navigation and selection

mod fixtures;

use chrono::Weekday;
use fixtures::{dates, widgets};
use pretty_assertions::assert_eq;
use test_case::test_case;
use weather_history::models::calendar::{CalendarWidget, MonthGrid, MonthGridCell};
use weather_history::models::civil_date::{CivilDate, YearMonth};

#[test]
fn test_december_rolls_into_next_year() {
    let mut widget = widgets::monday_first(2024, 12);
    widget.go_to_next_month();
    assert_eq!((widget.displayed_year(), widget.displayed_month()), (2025, 1));
}

#[test]
fn test_january_rolls_into_previous_year() {
    let mut widget = widgets::monday_first(2025, 1);
    widget.go_to_previous_month();
    assert_eq!((widget.displayed_year(), widget.displayed_month()), (2024, 12));
}

#[test]
fn test_selection_survives_navigation() {
    let mut widget = widgets::monday_first(2024, 3);
    let (row, column) = widget.grid().position_of(15).unwrap();
    assert_eq!(widget.select_cell(row, column), Some(dates::ides_of_march_2024()));

    widget.go_to_next_month();
    widget.go_to_next_month();

    assert_eq!(widget.current_selection(), Some(dates::ides_of_march_2024()));
}

#[test]
fn test_blank_cell_leaves_selection_alone() {
    // August 1 2024 is a Thursday, so Monday-first row 0 starts with padding
    let mut widget = widgets::monday_first(2024, 8);
    assert_eq!(widget.grid().cell(0, 0), Some(MonthGridCell::Empty));

    assert_eq!(widget.select_cell(0, 0), None);
    assert_eq!(widget.current_selection(), None);

    let first = widget.select_cell(0, 3);
    assert_eq!(widget.select_cell(0, 0), None);
    assert_eq!(widget.current_selection(), first);
}

#[test_case(6, 0 ; "row below grid")]
#[test_case(0, 7 ; "column right of grid")]
#[test_case(usize::MAX, usize::MAX ; "absurd coordinates")]
fn test_out_of_grid_click_is_ignored(row: usize, column: usize) {
    let mut widget = widgets::monday_first(2024, 8);
    widget.select_date(dates::leap_day_2024());
    widget.go_to_month(YearMonth::new(2024, 8).unwrap());

    assert_eq!(widget.select_cell(row, column), None);
    assert_eq!(widget.current_selection(), Some(dates::leap_day_2024()));
}

#[test]
fn test_reselecting_same_cell_is_idempotent() {
    let mut widget = widgets::monday_first(2024, 2);
    let first = widget.select_cell(2, 2);
    let second = widget.select_cell(2, 2);

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(widget.current_selection(), first);
}

#[test]
fn test_selection_in_other_month_replaces_prior() {
    let mut widget = widgets::monday_first(2024, 3);
    widget.select_date(dates::ides_of_march_2024());

    widget.go_to_next_month();
    let (row, column) = widget.grid().position_of(1).unwrap();
    widget.select_cell(row, column);

    assert_eq!(widget.current_selection(), CivilDate::new(2024, 4, 1).ok());
}

#[test]
fn test_clear_selection() {
    let mut widget = widgets::monday_first(2024, 2);
    widget.select_cell(4, 3);
    widget.clear_selection();
    assert_eq!(widget.current_selection(), None);
}

#[test]
fn test_february_2024_walkthrough() {
    let mut widget = CalendarWidget::new(2024, 2, Weekday::Mon);
    let grid = MonthGrid::build(2024, 2, Weekday::Mon).unwrap();

    assert_eq!(widget.grid(), &grid);
    assert_eq!(grid.cell(0, 3), Some(MonthGridCell::Day(1)));
    assert_eq!(grid.cell(4, 3), Some(MonthGridCell::Day(29)));

    assert_eq!(widget.select_cell(4, 3), Some(dates::leap_day_2024()));
    assert_eq!(widget.current_selection(), Some(dates::leap_day_2024()));
}

#[test]
fn test_render_data_sunday_first() {
    let widget = widgets::sunday_first(2024, 8);
    let data = widget.render_data();

    assert_eq!(data.month_label, "August 2024");
    assert_eq!(
        data.weekday_header,
        ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"].map(String::from)
    );
    assert_eq!(data.grid.cell(0, 4), Some(MonthGridCell::Day(1)));
}

#[test]
fn test_independent_widgets_do_not_share_state() {
    let mut start = widgets::monday_first(2024, 3);
    let mut end = widgets::monday_first(2024, 3);

    start.select_date(dates::station_install_2016());
    end.go_to_next_month();

    assert_eq!(end.current_selection(), None);
    assert_eq!(start.displayed(), YearMonth::new(2016, 10).unwrap());
    assert_eq!(end.displayed(), YearMonth::new(2024, 4).unwrap());
}
