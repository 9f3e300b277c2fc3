//! Waitlist sinks: the system of record a validated entry is forwarded to.

use std::sync::Arc;

use anyhow::Context;
use ares_core::model::WaitlistEntry;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ServerConfig, SinkKind};

mod file;
#[cfg(feature = "google-sheets")]
mod google;
mod memory;
mod rows;
mod sheet_best;

pub use file::FileSink;
#[cfg(feature = "google-sheets")]
pub use google::GoogleSheetsSink;
pub use memory::MemorySink;
pub use sheet_best::SheetBestSink;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sheet request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("sheet responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("waitlist file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed waitlist record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("google sheets: {0}")]
    Google(String),
}

/// Destination for waitlist entries.
#[async_trait]
pub trait WaitlistSink: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Stores one entry.
    async fn append(&self, entry: &WaitlistEntry) -> Result<(), SinkError>;

    /// Reads every stored row back, oldest first, as the sink holds it.
    async fn list(&self) -> Result<Vec<Value>, SinkError>;
}

/// Builds the sink selected by `config`.
pub async fn from_config(config: &ServerConfig) -> anyhow::Result<Arc<dyn WaitlistSink>> {
    let sink: Arc<dyn WaitlistSink> = match config.sink {
        SinkKind::File => Arc::new(FileSink::new(&config.waitlist_file)),
        SinkKind::Memory => Arc::new(MemorySink::default()),
        SinkKind::SheetBest => Arc::new(
            SheetBestSink::new(&config.sheet_url, config.sheet_timeout)
                .context("build sheet.best client")?,
        ),
        SinkKind::GoogleSheets => google_sheets(config).await?,
    };
    Ok(sink)
}

#[cfg(feature = "google-sheets")]
async fn google_sheets(config: &ServerConfig) -> anyhow::Result<Arc<dyn WaitlistSink>> {
    let key = config
        .google_service_account
        .as_deref()
        .context("--google-service-account is required for the google-sheets sink")?;
    let spreadsheet_id = config
        .google_spreadsheet_id
        .as_deref()
        .context("--google-spreadsheet-id is required for the google-sheets sink")?;
    let sink = GoogleSheetsSink::connect(key, spreadsheet_id, &config.google_range).await?;
    Ok(Arc::new(sink))
}

#[cfg(not(feature = "google-sheets"))]
async fn google_sheets(_config: &ServerConfig) -> anyhow::Result<Arc<dyn WaitlistSink>> {
    anyhow::bail!("this build has no Google Sheets support (enable the `google-sheets` feature)")
}
