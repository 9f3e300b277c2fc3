use ares_core::model::WaitlistEntry;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{SinkError, WaitlistSink};

/// In-process sink. Useful for demos and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RwLock<Vec<WaitlistEntry>>,
}

#[async_trait]
impl WaitlistSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn append(&self, entry: &WaitlistEntry) -> Result<(), SinkError> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Value>, SinkError> {
        self.entries
            .read()
            .await
            .iter()
            .map(|e| serde_json::to_value(e).map_err(SinkError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_insertion_order() {
        let sink = MemorySink::default();
        for name in ["a", "b", "c"] {
            sink.append(&WaitlistEntry {
                timestamp: "t".into(),
                name: name.into(),
                company: "co".into(),
                email: "x@y".into(),
            })
            .await
            .unwrap();
        }
        let rows = sink.list().await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
