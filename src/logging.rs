//! Console diagnostics and the run's append-only record sinks.
//!
//! Two sinks are kept per run: one line per rename taken (or simulated) and
//! one line per file that could not be renamed. They are opened once by the
//! binary and handed to the [`Organizer`](crate::renamer::Organizer).

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{Level, error};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Install the console subscriber. `RUST_LOG` overrides `default_level`.
pub fn init(default_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Append-only line sink
pub trait LogSink: Send + Sync {
    fn record(&self, line: &str);
}

/// Sink appending timestamped lines to a file
pub struct FileSink {
    writer: Mutex<RollingFileAppender>,
}

impl FileSink {
    /// Open `directory/file_name` for appending, creating it if needed
    pub fn open(directory: &Path, file_name: &str) -> Result<Self, InitError> {
        let writer = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(directory)?;

        Ok(Self {
            writer: Mutex::new(writer),
        })
    }
}

impl LogSink for FileSink {
    fn record(&self, line: &str) {
        let stamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{stamp} {line}").and_then(|()| writer.flush()) {
            error!("Failed to write log line '{}': {}", line, e);
        }
    }
}

/// Sink keeping lines in memory
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl LogSink for MemorySink {
    fn record(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// The rename and error sinks of one run
#[derive(Clone)]
pub struct RunLogs {
    pub renames: Arc<dyn LogSink>,
    pub errors: Arc<dyn LogSink>,
}

impl RunLogs {
    pub fn new(renames: Arc<dyn LogSink>, errors: Arc<dyn LogSink>) -> Self {
        Self { renames, errors }
    }

    /// File-backed sinks under `directory`
    pub fn open(directory: &Path, rename_log: &str, error_log: &str) -> Result<Self, InitError> {
        Ok(Self::new(
            Arc::new(FileSink::open(directory, rename_log)?),
            Arc::new(FileSink::open(directory, error_log)?),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.record("first");
        sink.record("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_file_sink_appends() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("rename_log.txt"), "earlier line\n").unwrap();

        {
            let sink = FileSink::open(temp_dir.path(), "rename_log.txt").unwrap();
            sink.record("a.mkv -> b.mkv");
        }

        let content = std::fs::read_to_string(temp_dir.path().join("rename_log.txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "earlier line");
        assert!(lines[1].ends_with(" a.mkv -> b.mkv"));
    }
}
