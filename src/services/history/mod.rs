// History service
// Builds station history requests, downloads them and writes CSV exports

mod export;
mod fetcher;
mod request;

pub use export::{clean_history_csv, download_history, export_file_name, DownloadSummary};
pub use fetcher::{check_history_body, BodyError, HistoryFetcher, HistorySource};
pub use request::{HistoryError, HistoryRequest};
