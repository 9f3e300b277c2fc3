//! Mapping of A1-range spreadsheet values to row objects.

use serde_json::{json, Value};

/// Turns `[timestamp, name, company, email]` cell rows into JSON objects.
///
/// A leading header row (first cell `timestamp`, any case) is skipped. Short
/// rows are padded with empty strings; cells past the fourth are dropped.
#[cfg_attr(not(feature = "google-sheets"), allow(dead_code))]
pub(crate) fn sheet_rows_to_objects(rows: &[Vec<Value>]) -> Vec<Value> {
    let has_header = rows
        .first()
        .and_then(|r| r.first())
        .and_then(Value::as_str)
        .is_some_and(|c| c.eq_ignore_ascii_case("timestamp"));

    rows.iter()
        .skip(usize::from(has_header))
        .map(|row| {
            let cell = |i: usize| match row.get(i) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            json!({
                "timestamp": cell(0),
                "name": cell(1),
                "company": cell(2),
                "email": cell(3),
            })
        })
        .collect()
}
