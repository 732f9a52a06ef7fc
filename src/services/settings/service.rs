use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::{Settings, SettingsFile};

const DEFAULTS_FILE_NAME: &str = "default.cfg";

/// Loads and saves the last-used station and dates as JSON
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Defaults file in the platform config directory, or `default.cfg` in
    /// the working directory when no home directory can be resolved.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "WeatherHistory", "WeatherHistory") {
            dirs.config_dir().join(DEFAULTS_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for defaults");
            PathBuf::from(DEFAULTS_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read saved defaults; a missing file yields empty settings
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!("No defaults file found at {}", self.path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read defaults from {}", self.path.display()))?;
        let file: SettingsFile = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse defaults in {}", self.path.display()))?;
        let settings = Settings::try_from(file)
            .with_context(|| format!("invalid date in {}", self.path.display()))?;

        log::info!(
            "Loaded defaults: station={:?}, start={:?}, end={:?}",
            settings.station_id,
            settings.start_date,
            settings.end_date
        );
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(&settings.to_file())?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write defaults to {}", self.path.display()))?;
        Ok(())
    }
}
