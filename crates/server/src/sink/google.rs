//! Google Sheets sink.
//!
//! Uses a service-account JSON key. The spreadsheet must be shared with the
//! key's `client_email`. Rows are `[timestamp, name, company, email]`.

use std::path::Path;

use anyhow::{Context, Result};
use ares_core::model::WaitlistEntry;
use async_trait::async_trait;
use serde_json::Value;

// google-apis-rs generated client.
use google_sheets4 as sheets4;
use sheets4::api::ValueRange;

use super::rows::sheet_rows_to_objects;
use super::{SinkError, WaitlistSink};

type Connector = sheets4::hyper_rustls::HttpsConnector<
    sheets4::hyper_util::client::legacy::connect::HttpConnector,
>;

pub struct GoogleSheetsSink {
    hub: sheets4::Sheets<Connector>,
    spreadsheet_id: String,
    range: String,
}

impl GoogleSheetsSink {
    pub async fn connect(
        service_account_json: &Path,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Self> {
        let key = sheets4::yup_oauth2::read_service_account_key(service_account_json)
            .await
            .with_context(|| {
                format!(
                    "read google service account key from {}",
                    service_account_json.display()
                )
            })?;

        let auth = sheets4::yup_oauth2::ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .context("build service account authenticator")?;

        let connector = sheets4::hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .context("load native root certs")?
            .https_only()
            .enable_http1()
            .build();

        let client = sheets4::hyper_util::client::legacy::Client::builder(
            sheets4::hyper_util::rt::TokioExecutor::new(),
        )
        .build(connector);

        Ok(Self {
            hub: sheets4::Sheets::new(client, auth),
            spreadsheet_id: spreadsheet_id.to_string(),
            range: range.to_string(),
        })
    }
}

#[async_trait]
impl WaitlistSink for GoogleSheetsSink {
    fn name(&self) -> &'static str {
        "google-sheets"
    }

    async fn append(&self, entry: &WaitlistEntry) -> Result<(), SinkError> {
        let row: Vec<Value> = entry
            .to_row()
            .iter()
            .map(|cell| Value::String(cell.to_string()))
            .collect();
        let request = ValueRange {
            values: Some(vec![row]),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .values_append(request, &self.spreadsheet_id, &self.range)
            .value_input_option("USER_ENTERED")
            .doit()
            .await
            .map_err(|e| SinkError::Google(e.to_string()))?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Value>, SinkError> {
        let (_resp, range) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, &self.range)
            .doit()
            .await
            .map_err(|e| SinkError::Google(e.to_string()))?;

        Ok(sheet_rows_to_objects(&range.values.unwrap_or_default()))
    }
}
