//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `POST /api/analyse` request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyse. Missing or empty is a 400.
    #[serde(default)]
    pub input: Option<String>,
}

/// `POST /api/waitlist` request.
///
/// Every field is optional on the wire; validation decides which error code a
/// missing field produces. Fields are read loosely so that odd JSON types are
/// a validation matter rather than a parse failure:
///
/// - `name` and `company`: `null`, `false`, `0` count as missing; other
///   non-string values are kept as their JSON text (`1` becomes `"1"`).
/// - `email`: only a string counts; any other value is treated as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaitlistRequest {
    /// Full name.
    #[serde(default, deserialize_with = "truthy_text")]
    pub name: Option<String>,
    /// Organization.
    #[serde(default, deserialize_with = "truthy_text")]
    pub company: Option<String>,
    /// Work email; must contain `@`.
    #[serde(default, deserialize_with = "string_only")]
    pub email: Option<String>,
}

fn truthy_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.and_then(|v| match v {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

fn string_only<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Message returned on a successful waitlist submission.
pub const ACCESS_GRANTED: &str = "ACCESS_GRANTED";

/// Successful `POST /api/waitlist` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistResponse {
    /// Always `true`; failures use [`ErrorBody`].
    pub success: bool,
    /// [`ACCESS_GRANTED`].
    pub message: String,
    /// Timestamp stored with the entry.
    pub timestamp: String,
}

impl WaitlistResponse {
    /// Acknowledgment for an entry that reached the sink.
    pub fn granted(timestamp: impl Into<String>) -> Self {
        Self {
            success: true,
            message: ACCESS_GRANTED.to_string(),
            timestamp: timestamp.into(),
        }
    }
}

/// `GET /api/waitlist` response.
///
/// Rows are passed through as the sink returned them, including columns the
/// site does not write itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistListing {
    /// Number of rows in `data`.
    pub count: usize,
    /// Stored rows, oldest first.
    pub data: Vec<Value>,
}

impl From<Vec<Value>> for WaitlistListing {
    fn from(data: Vec<Value>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Error body used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Wire error code or message.
    pub error: String,
    /// Underlying cause, when the endpoint exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    /// Body carrying only an error code or message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Attaches a free-text explanation.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
