//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

/// Builder for creating test Daslog directories
pub struct LogDirBuilder {
    temp_dir: TempDir,
}

impl LogDirBuilder {
    /// Create a new builder with an empty log directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the log directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a log file with raw content, modified `mtime_secs` after the epoch
    pub fn with_file(self, name: &str, content: &str, mtime_secs: u64) -> Self {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write log file");
        set_mtime(&path, UNIX_EPOCH + Duration::from_secs(mtime_secs));
        self
    }

    /// Add a log file built from entries
    pub fn with_log(self, name: &str, log: &DaslogBuilder, mtime_secs: u64) -> Self {
        self.with_file(name, &log.to_content(), mtime_secs)
    }

    /// Add an empty subdirectory
    pub fn with_subdir(self, name: &str) -> Self {
        fs::create_dir(self.temp_dir.path().join(name)).expect("Failed to create subdirectory");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for LogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Set a file's modification time
pub fn set_mtime(path: &Path, time: SystemTime) {
    let file = File::options().append(true).open(path).expect("Failed to open file");
    file.set_modified(time).expect("Failed to set modification time");
}

/// Builder for the content of one Daslog file
///
/// Entries are joined the way Cozmo writes them: `{..},{..},` with a
/// trailing separator after the last object.
pub struct DaslogBuilder {
    entries: Vec<String>,
}

impl DaslogBuilder {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add an event entry with a timestamp, custom key/value and data
    pub fn event(mut self, ts: i64, key: &str, value: &str, data: &str) -> Self {
        self.entries.push(format!(
            r#"{{"$ts":{},"$phys":0,"{}":"{}","$data":"{}"}}"#,
            ts, key, value, data
        ));
        self
    }

    /// Add a raw object literal verbatim
    pub fn raw(mut self, object: &str) -> Self {
        self.entries.push(object.to_string());
        self
    }

    pub fn to_content(&self) -> String {
        format!("{},", self.entries.join(","))
    }
}

impl Default for DaslogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
