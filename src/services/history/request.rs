use anyhow::{Context, Result};
use reqwest::Url;
use thiserror::Error;

use crate::models::civil_date::CivilDate;
use crate::utils::date::to_day_month_year;

const HISTORY_ENDPOINT: &str = "https://www.wunderground.com/weatherstation/WXDailyHistory.asp";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("no station code entered")]
    EmptyStation,
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: CivilDate, end: CivilDate },
}

/// Station and inclusive date range to download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    station_id: String,
    start: CivilDate,
    end: CivilDate,
}

impl HistoryRequest {
    pub fn new(
        station_id: impl AsRef<str>,
        start: CivilDate,
        end: CivilDate,
    ) -> Result<Self, HistoryError> {
        let station_id = station_id.as_ref().trim();
        if station_id.is_empty() {
            return Err(HistoryError::EmptyStation);
        }
        if start > end {
            return Err(HistoryError::StartAfterEnd { start, end });
        }

        Ok(Self {
            station_id: station_id.to_string(),
            start,
            end,
        })
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn start(&self) -> CivilDate {
        self.start
    }

    pub fn end(&self) -> CivilDate {
        self.end
    }

    /// Daily-history CSV query for this station and range
    pub fn url(&self) -> Result<Url> {
        let (day, month, year) = to_day_month_year(self.start);
        let (day_end, month_end, year_end) = to_day_month_year(self.end);

        let mut url = Url::parse(HISTORY_ENDPOINT).context("Invalid history endpoint")?;
        url.query_pairs_mut()
            .append_pair("ID", &self.station_id)
            .append_pair("day", &day.to_string())
            .append_pair("month", &month.to_string())
            .append_pair("year", &year.to_string())
            .append_pair("dayend", &day_end.to_string())
            .append_pair("monthend", &month_end.to_string())
            .append_pair("yearend", &year_end.to_string())
            .append_pair("graphspan", "custom")
            .append_pair("format", "1");
        Ok(url)
    }
}
