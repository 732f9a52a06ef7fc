// Module exports for models

pub mod calendar;
pub mod civil_date;
pub mod settings;
