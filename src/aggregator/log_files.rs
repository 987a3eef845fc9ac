use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

/// List the entries of `log_dir` ordered by modification time, oldest first
///
/// The listing is not recursive and includes every entry, directories too;
/// callers skip what is not a regular file. Entries with equal modification
/// times are ordered by path.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - An entry's metadata or modification time cannot be read
pub fn list_log_files(log_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory: {}", log_dir.display()))?;

    let mut files: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        let modified = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .with_context(|| format!("Failed to read modification time: {}", path.display()))?;

        files.push((modified, path));
    }

    files.sort();

    Ok(files.into_iter().map(|(_, path)| path).collect())
}
