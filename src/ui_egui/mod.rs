mod alert;
mod app;
pub mod date_picker;

pub use app::WeatherHistoryApp;
pub use date_picker::{DatePickerAction, DatePickerDialog, PickerTarget};
