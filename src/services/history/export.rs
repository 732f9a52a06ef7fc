//! Clean-up and export of downloaded station history.
//!
//! The daily-history endpoint interleaves `<br>` markers with the CSV rows and
//! tags the last header column with one as well.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::fetcher::HistorySource;
use super::request::HistoryRequest;

const LINE_BREAK_MARKER: &str = "<br>";

/// Header columns renamed on export: (raw name, exported name)
const COLUMN_RENAMES: &[(&str, &str)] = &[("PrecipitationSumIn", "Precipitation Sum (in)")];

/// Result of a completed download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Strip `<br>` separator rows and markers and rename known header columns.
pub fn clean_history_csv(raw: &str) -> String {
    let mut lines = raw
        .lines()
        .map(|line| {
            line.trim()
                .trim_end_matches(LINE_BREAK_MARKER)
                .trim_end()
        })
        .filter(|line| !line.is_empty())
        .filter(|line| line.split(',').next().map(str::trim) != Some(LINE_BREAK_MARKER));

    let mut cleaned = String::with_capacity(raw.len());
    if let Some(header) = lines.next() {
        let header: Vec<&str> = header
            .split(',')
            .map(|column| {
                let column = column.trim();
                COLUMN_RENAMES
                    .iter()
                    .find(|(raw_name, _)| *raw_name == column)
                    .map_or(column, |(_, renamed)| *renamed)
            })
            .collect();
        cleaned.push_str(&header.join(","));
        cleaned.push('\n');
    }
    for line in lines {
        cleaned.push_str(line);
        cleaned.push('\n');
    }
    cleaned
}

/// `updated-DD-MM-YYYY-<station>-weather.csv`, dated by the range end
pub fn export_file_name(request: &HistoryRequest) -> String {
    let end = request.end();
    format!(
        "updated-{:02}-{:02}-{}-{}-weather.csv",
        end.day(),
        end.month(),
        end.year(),
        request.station_id().to_lowercase()
    )
}

/// Fetch, clean and write the history for `request` into `out_dir`.
pub fn download_history(
    source: &dyn HistorySource,
    request: &HistoryRequest,
    out_dir: &Path,
) -> Result<DownloadSummary> {
    log::info!(
        "Downloading history for {} from {} to {}",
        request.station_id(),
        request.start(),
        request.end()
    );

    let raw = source.fetch_csv(request)?;
    let cleaned = clean_history_csv(&raw);
    let rows = cleaned.lines().count().saturating_sub(1);
    if rows == 0 {
        log::warn!("History for {} contained no observations", request.station_id());
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create dir {}", out_dir.display()))?;
    let path = out_dir.join(export_file_name(request));
    fs::write(&path, cleaned)
        .with_context(|| format!("failed to write history to {}", path.display()))?;

    log::info!("Wrote {} rows to {}", rows, path.display());
    Ok(DownloadSummary { path, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::civil_date::CivilDate;
    use crate::services::history::fetcher::MockHistorySource;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const RAW: &str = "\n\
Date,TemperatureHighF,TemperatureAvgF,PrecipitationSumIn<br>\n\
2024-03-01,61,50,0.00\n\
<br>\n\
2024-03-02,58,47,0.12\n\
<br>\n";

    fn request() -> HistoryRequest {
        HistoryRequest::new(
            "KAZLITTL3",
            CivilDate::new(2024, 3, 1).unwrap(),
            CivilDate::new(2024, 3, 2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_clean_drops_markers_and_renames() {
        assert_eq!(
            clean_history_csv(RAW),
            "Date,TemperatureHighF,TemperatureAvgF,Precipitation Sum (in)\n\
             2024-03-01,61,50,0.00\n\
             2024-03-02,58,47,0.12\n"
        );
    }

    #[test]
    fn test_clean_drops_marker_index_rows() {
        let raw = "Date,Temp\n<br>,,\n2024-03-01,61<br>\n";
        assert_eq!(clean_history_csv(raw), "Date,Temp\n2024-03-01,61\n");
    }

    #[test]
    fn test_clean_empty_input() {
        assert_eq!(clean_history_csv(""), "");
    }

    #[test]
    fn test_export_file_name_uses_end_date() {
        assert_eq!(
            export_file_name(&request()),
            "updated-02-03-2024-kazlittl3-weather.csv"
        );
    }

    #[test]
    fn test_download_writes_cleaned_csv() {
        let dir = TempDir::new().unwrap();
        let mut source = MockHistorySource::new();
        source
            .expect_fetch_csv()
            .times(1)
            .returning(|_| Ok(RAW.to_string()));

        let summary = download_history(&source, &request(), dir.path()).unwrap();

        assert_eq!(summary.rows, 2);
        assert_eq!(
            summary.path,
            dir.path().join("updated-02-03-2024-kazlittl3-weather.csv")
        );
        let written = fs::read_to_string(&summary.path).unwrap();
        assert!(written.starts_with("Date,TemperatureHighF"));
    }

    #[test]
    fn test_download_propagates_fetch_error() {
        let dir = TempDir::new().unwrap();
        let mut source = MockHistorySource::new();
        source
            .expect_fetch_csv()
            .returning(|_| Err(anyhow!("HTTP status 503")));

        let err = download_history(&source, &request(), dir.path()).unwrap_err();
        assert!(err.to_string().contains("503"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
