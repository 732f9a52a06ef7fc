//! Network access to the daily-history endpoint.
//!
//! A station code the service does not know still gets `200 OK`, with an HTML
//! page in place of the CSV. Bodies are therefore checked for a `Date` header
//! row before they are handed on.

use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use super::request::HistoryRequest;

/// First column of every history header row
const HEADER_FIRST_COLUMN: &str = "Date";

/// Anything that can produce the raw history CSV for a request
#[cfg_attr(test, mockall::automock)]
pub trait HistorySource {
    fn fetch_csv(&self, request: &HistoryRequest) -> Result<String>;
}

/// Reasons a response body is not usable history data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    #[error("history response is empty")]
    Empty,
    #[error("history response is an HTML page, not CSV")]
    Html,
    #[error("history response has no Date header (first line: {first_line:?})")]
    MissingHeader { first_line: String },
    #[error("history response too large ({size} bytes > {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
}

/// Check that a response body looks like history CSV.
///
/// Leading blank lines are skipped. The first remaining line must begin with
/// the `Date` column; HTML pages are reported separately.
pub fn check_history_body(body: &str) -> Result<(), BodyError> {
    let first_line = body
        .lines()
        .map(|line| line.trim().trim_start_matches('\u{feff}'))
        .find(|line| !line.is_empty())
        .ok_or(BodyError::Empty)?;

    let lowered = first_line.to_ascii_lowercase();
    if lowered.starts_with("<!doctype") || lowered.starts_with("<html") {
        return Err(BodyError::Html);
    }
    if !first_line.starts_with(HEADER_FIRST_COLUMN) {
        return Err(BodyError::MissingHeader {
            first_line: first_line.chars().take(60).collect(),
        });
    }
    Ok(())
}

fn check_size(size: u64, limit: usize) -> Result<(), BodyError> {
    let limit = u64::try_from(limit).unwrap_or(u64::MAX);
    if size > limit {
        return Err(BodyError::TooLarge { size, limit });
    }
    Ok(())
}

/// Run `op` up to `attempts` times, sleeping `delay` between failures.
///
/// The error of the last attempt is returned with `what` and the attempt count
/// attached.
fn with_retries<T>(
    attempts: usize,
    delay: Duration,
    what: &str,
    mut op: impl FnMut() -> Result<T>,
) -> Result<T> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if attempt == attempts => {
                return Err(err.context(format!(
                    "Failed to fetch {what} after {attempts} attempts"
                )));
            }
            Err(err) => {
                log::warn!("Attempt {attempt}/{attempts} to fetch {what} failed: {err:#}");
                thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}

/// Blocking HTTP client for station history
pub struct HistoryFetcher {
    client: Client,
    max_body_bytes: usize,
    attempts: usize,
    retry_delay: Duration,
}

impl HistoryFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build history HTTP client")?;

        Ok(Self {
            client,
            max_body_bytes: 20 * 1024 * 1024,
            attempts: 3,
            retry_delay: Duration::from_millis(400),
        })
    }

    fn get_body(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .context("Network error while requesting history")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("History service answered with HTTP status {status}"));
        }
        if let Some(declared) = response.content_length() {
            check_size(declared, self.max_body_bytes)?;
        }

        let bytes = response
            .bytes()
            .context("Failed to read history response body")?;
        check_size(u64::try_from(bytes.len()).unwrap_or(u64::MAX), self.max_body_bytes)?;

        String::from_utf8(bytes.to_vec()).context("History response is not valid UTF-8")
    }
}

impl HistorySource for HistoryFetcher {
    fn fetch_csv(&self, request: &HistoryRequest) -> Result<String> {
        let url = request.url()?;
        let what = format!("history for {}", request.station_id());
        let body = with_retries(self.attempts, self.retry_delay, &what, || {
            self.get_body(url.as_str())
        })?;

        // A wrong station code is not transient, so this is checked once
        check_history_body(&body).with_context(|| format!("Unusable {what}"))?;
        Ok(body)
    }
}
