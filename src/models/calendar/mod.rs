// Calendar module
// Month grid layout and the date-picker state used by the host windows

pub mod month_grid;
pub mod names;
pub mod widget;

pub use month_grid::{MonthGrid, MonthGridCell, MonthGridRow, GRID_COLUMNS, GRID_ROWS};
pub use names::{CalendarNames, EnglishNames};
pub use widget::{CalendarWidget, RenderData};
