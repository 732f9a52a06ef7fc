use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Weekday;

use super::alert::AlertState;
use super::date_picker::{DatePickerAction, DatePickerDialog, PickerTarget};
use crate::models::civil_date::CivilDate;
use crate::models::settings::Settings;
use crate::services::history::{
    download_history, DownloadSummary, HistoryFetcher, HistoryRequest, HistorySource,
};
use crate::services::settings::SettingsService;
use crate::utils::date::today;

pub struct WeatherHistoryApp {
    settings_service: SettingsService,
    station_id: String,
    start_date: Option<CivilDate>,
    /// Defaults to today when nothing was saved
    end_date: CivilDate,
    first_weekday: Weekday,
    /// Where downloaded CSV files land
    output_dir: PathBuf,
    date_picker: Option<DatePickerDialog>,
    alert: AlertState,
    /// Result of the download running on a worker thread, if any
    download_rx: Option<Receiver<Result<DownloadSummary, String>>>,
}

impl eframe::App for WeatherHistoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.poll_download() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
        self.render_main_form(ctx);
        self.render_date_picker(ctx);
        self.alert.render(ctx);
    }
}

impl WeatherHistoryApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let output_dir = std::env::current_dir().unwrap_or_else(|err| {
            log::warn!("Unable to resolve working directory ({err}); writing to '.'");
            PathBuf::from(".")
        });
        Self::with_service(SettingsService::new(SettingsService::default_path()), output_dir)
    }

    /// Build the app around a defaults file, restoring whatever it holds
    pub fn with_service(settings_service: SettingsService, output_dir: PathBuf) -> Self {
        let mut alert = AlertState::new();
        let settings = settings_service.load().unwrap_or_else(|err| {
            log::error!("Failed to load defaults: {err:?}");
            alert.show(format!("Could not read saved values: {err}"));
            Settings::default()
        });

        Self {
            settings_service,
            station_id: settings.station_id,
            start_date: settings.start_date,
            end_date: settings.end_date.unwrap_or_else(today),
            first_weekday: Weekday::Mon,
            output_dir,
            date_picker: None,
            alert,
            download_rx: None,
        }
    }

    pub fn start_date(&self) -> Option<CivilDate> {
        self.start_date
    }

    pub fn end_date(&self) -> CivilDate {
        self.end_date
    }

    pub fn alert_message(&self) -> Option<&str> {
        self.alert.message()
    }

    pub fn set_station_id(&mut self, station_id: impl Into<String>) {
        self.station_id = station_id.into();
    }

    /// Open a fresh picker for one end of the range, replacing any open one.
    pub fn open_date_picker(&mut self, target: PickerTarget) {
        let current = match target {
            PickerTarget::Start => self.start_date,
            PickerTarget::End => Some(self.end_date),
        };
        self.date_picker = Some(DatePickerDialog::open(target, current, self.first_weekday));
    }

    pub fn date_picker_mut(&mut self) -> Option<&mut DatePickerDialog> {
        self.date_picker.as_mut()
    }

    /// Store a committed pick; clearing the end date falls back to today.
    pub fn apply_date(&mut self, target: PickerTarget, date: Option<CivilDate>) {
        match target {
            PickerTarget::Start => self.start_date = date,
            PickerTarget::End => self.end_date = date.unwrap_or_else(today),
        }
        log::debug!("{:?} date set to {:?}", target, date);
    }

    pub fn current_settings(&self) -> Settings {
        Settings::new(
            self.station_id.trim(),
            self.start_date,
            Some(self.end_date),
        )
    }

    pub fn save_defaults(&mut self) {
        match self.settings_service.save(&self.current_settings()) {
            Ok(()) => self.alert.show("Selected values saved to file!"),
            Err(err) => {
                log::error!("Failed to save defaults: {err:?}");
                self.alert.show(format!("Could not save values: {err}"));
            }
        }
    }

    pub fn is_downloading(&self) -> bool {
        self.download_rx.is_some()
    }

    /// Validate the form, alerting on the first problem.
    fn download_request(&mut self) -> Option<HistoryRequest> {
        let Some(start) = self.start_date else {
            self.alert.show("No start date selected! Can't download data.");
            return None;
        };

        match HistoryRequest::new(&self.station_id, start, self.end_date) {
            Ok(request) => Some(request),
            Err(err) => {
                self.alert.show(format!("Can't download data: {err}."));
                None
            }
        }
    }

    /// Start a download on a worker thread.
    ///
    /// `make_source` runs on the worker, so building an HTTP client does not
    /// block the UI either. The result is picked up by [`Self::poll_download`].
    pub fn start_download<S, F>(&mut self, make_source: F)
    where
        S: HistorySource,
        F: FnOnce() -> Result<S> + Send + 'static,
    {
        if self.is_downloading() {
            log::debug!("Download already in progress; request ignored");
            return;
        }
        let Some(request) = self.download_request() else {
            return;
        };

        let output_dir = self.output_dir.clone();
        let (tx, rx) = mpsc::channel();
        self.download_rx = Some(rx);

        thread::spawn(move || {
            let result = make_source()
                .and_then(|source| download_history(&source, &request, &output_dir))
                .map_err(|err| {
                    log::error!("History download failed: {err:?}");
                    format!("{err:#}")
                });
            let _ = tx.send(result);
        });
    }

    /// Collect a finished download, if any. Returns whether one is still running.
    pub fn poll_download(&mut self) -> bool {
        let Some(rx) = &self.download_rx else {
            return false;
        };

        match rx.try_recv() {
            Ok(Ok(summary)) => {
                self.download_rx = None;
                self.alert.show(format!(
                    "Downloaded {} rows to {}",
                    summary.rows,
                    summary.path.display()
                ));
                false
            }
            Ok(Err(err)) => {
                self.download_rx = None;
                self.alert.show(format!("Download failed: {err}"));
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                self.download_rx = None;
                self.alert
                    .show("Download failed: worker stopped unexpectedly");
                false
            }
        }
    }

    fn render_main_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("main_form")
                .num_columns(4)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Start Date");
                    let start = self
                        .start_date
                        .map(|date| date.to_string())
                        .unwrap_or_else(|| "not set".to_string());
                    ui.label(start);
                    if ui.button("Choose").clicked() {
                        self.open_date_picker(PickerTarget::Start);
                    }
                    ui.end_row();

                    ui.label("End Date");
                    ui.label(self.end_date.to_string());
                    if ui.button("Choose").clicked() {
                        self.open_date_picker(PickerTarget::End);
                    }
                    ui.label(egui::RichText::new("(defaults to today)").weak());
                    ui.end_row();

                    ui.label("");
                    ui.add(egui::TextEdit::singleline(&mut self.station_id).desired_width(80.0));
                    ui.label("Station Code");
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Save selected values").clicked() {
                    self.save_defaults();
                }
                let downloading = self.is_downloading();
                let label = if downloading {
                    "Downloading..."
                } else {
                    "Download Data"
                };
                if ui
                    .add_enabled(!downloading, egui::Button::new(label))
                    .clicked()
                {
                    self.start_download(HistoryFetcher::new);
                }
            });
        });
    }

    fn render_date_picker(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.date_picker.as_mut() else {
            return;
        };

        let target = dialog.target();
        match dialog.render(ctx) {
            DatePickerAction::None => {}
            DatePickerAction::Commit(date) => {
                self.apply_date(target, date);
                self.date_picker = None;
            }
            DatePickerAction::Cancel => self.date_picker = None,
        }
    }
}
