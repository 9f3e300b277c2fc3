use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Public sheet.best endpoint the site was launched with.
pub const DEFAULT_SHEET_URL: &str =
    "https://api.sheetbest.com/sheets/19402277-d48e-4cb3-b884-2689be966458";

/// Where waitlist submissions go. Exactly one is active per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SinkKind {
    /// Append JSON lines to a local file.
    File,
    /// POST rows to a sheet.best spreadsheet API.
    SheetBest,
    /// Append rows through the Google Sheets API (needs the `google-sheets` feature).
    GoogleSheets,
    /// Keep entries in process memory. Lost on restart.
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub sink: SinkKind,

    pub waitlist_file: PathBuf,

    pub sheet_url: String,
    pub sheet_timeout: Duration,

    pub google_service_account: Option<PathBuf>,
    pub google_spreadsheet_id: Option<String>,
    pub google_range: String,
}
