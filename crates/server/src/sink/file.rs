use std::path::{Path, PathBuf};

use ares_core::model::WaitlistEntry;
use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{SinkError, WaitlistSink};

/// Append-only local file, one JSON object per line.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    // Serializes appends so concurrent requests never interleave lines.
    write_lock: Mutex<()>,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WaitlistSink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn append(&self, entry: &WaitlistEntry) -> Result<(), SinkError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Value>, SinkError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        text.lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).map_err(SinkError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(email: &str) -> WaitlistEntry {
        WaitlistEntry {
            timestamp: "2025-01-01T00:00:00.000Z".into(),
            name: "Ada".into(),
            company: "Analytical Engines".into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn missing_file_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("nope.jsonl"));
        assert!(sink.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn appends_lines_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("waitlist.jsonl");
        let sink = FileSink::new(&path);

        sink.append(&entry("a@x.io")).await.unwrap();
        sink.append(&entry("b@x.io")).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));

        let rows = sink.list().await.unwrap();
        let emails: Vec<_> = rows.iter().map(|r| r["email"].as_str().unwrap()).collect();
        assert_eq!(emails, ["a@x.io", "b@x.io"]);
    }

    #[tokio::test]
    async fn concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let sink = std::sync::Arc::new(FileSink::new(dir.path().join("w.jsonl")));

        let mut handles = Vec::new();
        for i in 0..32 {
            let sink = sink.clone();
            handles.push(tokio::spawn(async move {
                sink.append(&entry(&format!("user{i}@x.io"))).await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        assert_eq!(sink.list().await.unwrap().len(), 32);
    }

    #[tokio::test]
    async fn lines_are_listed_as_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w.jsonl");
        std::fs::write(&path, "{\"email\":\"a@x.io\",\"source\":\"import\"}\n\n").unwrap();
        let rows = FileSink::new(&path).list().await.unwrap();
        assert_eq!(rows, [serde_json::json!({"email": "a@x.io", "source": "import"})]);
    }

    #[tokio::test]
    async fn corrupt_line_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w.jsonl");
        std::fs::write(&path, "not json\n").unwrap();
        let err = FileSink::new(&path).list().await.unwrap_err();
        assert!(matches!(err, SinkError::Json(_)));
    }
}
