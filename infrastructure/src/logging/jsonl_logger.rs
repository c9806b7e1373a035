//! JSONL file writer for exchange events.
//!
//! Each [`ExchangeEvent`] is serialized as a single JSON line with a
//! `type` field and UTC `timestamp`, appended through a buffered
//! writer. Logging failures are swallowed: a broken log file must not
//! disturb a recommendation run.

use advisor_application::ports::exchange_logger::{ExchangeEvent, ExchangeLogger};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Exchange logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`; flushed after every
/// record since volume is one or two events per request.
pub struct JsonlExchangeLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlExchangeLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates parent directories as needed. Returns `None` if the
    /// file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create exchange log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create exchange log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExchangeLogger for JsonlExchangeLogger {
    fn record(&self, event: ExchangeEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = match event.payload {
            serde_json::Value::Object(mut map) => {
                map.insert(
                    "type".to_string(),
                    serde_json::Value::String(event.event_type.to_string()),
                );
                map.insert("timestamp".to_string(), serde_json::Value::String(timestamp));
                serde_json::Value::Object(map)
            }
            other => serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "payload": other,
            }),
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = serde_json::to_writer(&mut *writer, &record);
            let _ = writer.write_all(b"\n");
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_written_as_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exchanges.jsonl");
        let logger = JsonlExchangeLogger::new(&path).unwrap();

        logger.record(ExchangeEvent::new(
            "industry_analysis",
            serde_json::json!({"company": "Globex", "text": "analysis"}),
        ));
        logger.record(ExchangeEvent::new(
            "recommendation_response",
            serde_json::json!({"company": "Globex", "bytes": 42}),
        ));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "industry_analysis");
        assert_eq!(first["company"], "Globex");
        assert!(first["timestamp"].is_string());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("exchanges.jsonl");
        assert!(JsonlExchangeLogger::new(&path).is_some());
        assert!(path.exists());
    }
}
