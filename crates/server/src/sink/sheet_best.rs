use std::time::Duration;

use ares_core::model::WaitlistEntry;
use async_trait::async_trait;
use tracing::debug;

use serde_json::Value;

use super::{SinkError, WaitlistSink};

/// sheet.best spreadsheet API: POST appends a row, GET returns all rows.
#[derive(Debug, Clone)]
pub struct SheetBestSink {
    client: reqwest::Client,
    url: String,
}

impl SheetBestSink {
    /// Client for the sheet at `url`; every request is bounded by `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl WaitlistSink for SheetBestSink {
    fn name(&self) -> &'static str {
        "sheet-best"
    }

    async fn append(&self, entry: &WaitlistEntry) -> Result<(), SinkError> {
        let resp = self.client.post(&self.url).json(entry).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SinkError::Status {
                status: status.as_u16(),
                body,
            });
        }
        // sheet.best acks with the stored rows; anything else is a proxy or outage page.
        let ack: Value = serde_json::from_str(&body)?;
        debug!(%status, %ack, "sheet.best accepted row");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Value>, SinkError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(SinkError::Status {
                status: status.as_u16(),
                body,
            });
        }
        // Rows go back as stored, including columns added by hand in the sheet.
        Ok(resp.json().await?)
    }
}
