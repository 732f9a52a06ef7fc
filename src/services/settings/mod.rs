// Settings service
// Persists the main window's defaults between runs

mod service;

pub use service::SettingsService;
