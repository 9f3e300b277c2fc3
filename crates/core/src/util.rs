use chrono::{SecondsFormat, Utc};

/// Returns the current UTC time as RFC 3339 with millisecond precision,
/// e.g. `2025-01-02T03:04:05.678Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
