// Settings module
// Last-used station and date range, stored between runs

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::civil_date::{CivilDate, DateError};

/// Defaults restored into the main window on startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub station_id: String,
    pub start_date: Option<CivilDate>,
    pub end_date: Option<CivilDate>,
}

impl Settings {
    pub fn new(
        station_id: impl Into<String>,
        start_date: Option<CivilDate>,
        end_date: Option<CivilDate>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            start_date,
            end_date,
        }
    }

    pub fn to_file(&self) -> SettingsFile {
        SettingsFile {
            station: StationSection {
                station_id: self.station_id.clone(),
            },
            start: self.start_date.map(|date| StartSection {
                start_day: date.day(),
                start_month: date.month(),
                start_year: date.year(),
            }),
            end: self.end_date.map(|date| EndSection {
                end_day: date.day(),
                end_month: date.month(),
                end_year: date.year(),
            }),
        }
    }
}

/// On-disk layout of the defaults file.
///
/// Each date is split into day, month and year fields; numbers may be written
/// either as JSON integers or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub station: StationSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<StartSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EndSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSection {
    #[serde(default)]
    pub station_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSection {
    #[serde(deserialize_with = "number_or_string")]
    pub start_day: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub start_month: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub start_year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSection {
    #[serde(deserialize_with = "number_or_string")]
    pub end_day: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub end_month: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub end_year: i32,
}

impl TryFrom<SettingsFile> for Settings {
    type Error = DateError;

    fn try_from(file: SettingsFile) -> Result<Self, Self::Error> {
        let start_date = file
            .start
            .map(|s| CivilDate::new(s.start_year, s.start_month, s.start_day))
            .transpose()?;
        let end_date = file
            .end
            .map(|e| CivilDate::new(e.end_year, e.end_month, e.end_day))
            .transpose()?;

        Ok(Settings {
            station_id: file.station.station_id,
            start_date,
            end_date,
        })
    }
}

fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + Deserialize<'de>,
    T::Err: std::fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString<T> {
        Number(T),
        Text(String),
    }

    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
